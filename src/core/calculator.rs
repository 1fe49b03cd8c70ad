use crate::domain::model::{BmiCategory, BmiReport, Measurements};

/// BMI = weight(kg) / height(m)^2, with height given in centimeters.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    weight_kg / (height_cm * height_cm * 0.0001)
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 23.0 {
            BmiCategory::Normal
        } else if bmi < 25.0 {
            BmiCategory::PreObese
        } else if bmi < 30.0 {
            BmiCategory::ObeseStage1
        } else if bmi < 35.0 {
            BmiCategory::ObeseStage2
        } else {
            BmiCategory::ObeseStage3
        }
    }
}

impl BmiReport {
    pub fn from_measurements(measurements: &Measurements) -> Self {
        let bmi = calculate_bmi(measurements.height, measurements.weight);
        Self {
            bmi,
            category: BmiCategory::classify(bmi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_bmi() {
        let bmi = calculate_bmi(170.0, 65.0);
        assert!((bmi - 22.491_349_480_968_857).abs() < 1e-9);
        assert_eq!(BmiCategory::classify(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_formula_across_domain() {
        for height in (100..=200).step_by(5) {
            for weight in (40..=200).step_by(8) {
                let (h, w) = (height as f64, weight as f64);
                let expected = w / ((h * 0.01) * (h * 0.01));
                let actual = calculate_bmi(h, w);
                assert!(
                    (actual - expected).abs() <= 1e-9 * expected,
                    "h={} w={} expected={} actual={}",
                    h,
                    w,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(BmiCategory::classify(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(22.999), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(23.0), BmiCategory::PreObese);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::ObeseStage1);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::ObeseStage2);
        assert_eq!(BmiCategory::classify(34.999), BmiCategory::ObeseStage2);
        assert_eq!(BmiCategory::classify(35.0), BmiCategory::ObeseStage3);
        assert_eq!(BmiCategory::classify(80.0), BmiCategory::ObeseStage3);
    }

    #[test]
    fn test_report_from_measurements() {
        let measurements = Measurements {
            height: 170.0,
            weight: 65.0,
            raw_height: "170".to_string(),
            raw_weight: "65".to_string(),
        };
        let report = BmiReport::from_measurements(&measurements);
        assert_eq!(report.category, BmiCategory::Normal);
        assert_eq!(report.title(), "BMI: 22.5");
    }
}
