use crate::core::parser::{HEIGHT_RANGE, WEIGHT_RANGE};
use rand::Rng;

/// Uniform (height, weight) pair inside the accepted ranges.
pub fn random_sample<R: Rng>(rng: &mut R) -> (f64, f64) {
    let height = rng.random_range(HEIGHT_RANGE);
    let weight = rng.random_range(WEIGHT_RANGE);
    (height, weight)
}

/// Two decimal places, as used to pre-fill the input fields.
pub fn format_sample(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_measurements;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let (height, weight) = random_sample(&mut rng);
            assert!(HEIGHT_RANGE.contains(&height));
            assert!(WEIGHT_RANGE.contains(&weight));
        }
    }

    #[test]
    fn test_formatted_samples_parse() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (height, weight) = random_sample(&mut rng);
            assert!(parse_measurements(&format_sample(height), &format_sample(weight)).is_ok());
        }
    }

    #[test]
    fn test_format_sample() {
        assert_eq!(format_sample(170.0), "170.00");
        assert_eq!(format_sample(65.456), "65.46");
    }
}
