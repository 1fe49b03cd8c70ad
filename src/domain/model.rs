use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Height and weight that passed validation, alongside the exact text they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    pub height: f64,
    pub weight: f64,
    pub raw_height: String,
    pub raw_weight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    PreObese,
    ObeseStage1,
    ObeseStage2,
    ObeseStage3,
}

impl BmiCategory {
    pub fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => match self {
                BmiCategory::Underweight => "Underweight",
                BmiCategory::Normal => "Normal",
                BmiCategory::PreObese => "Pre-obese",
                BmiCategory::ObeseStage1 => "Obese stage 1",
                BmiCategory::ObeseStage2 => "Obese stage 2",
                BmiCategory::ObeseStage3 => "Obese stage 3",
            },
            Language::Ko => match self {
                BmiCategory::Underweight => "저체중",
                BmiCategory::Normal => "정상",
                BmiCategory::PreObese => "비만전단계",
                BmiCategory::ObeseStage1 => "1단계 비만",
                BmiCategory::ObeseStage2 => "2단계 비만",
                BmiCategory::ObeseStage3 => "3단계 비만",
            },
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::En))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiReport {
    /// `BMI: <value>` with one decimal place.
    pub fn title(&self) -> String {
        format!("BMI: {:.1}", self.bmi)
    }

    pub fn message(&self, lang: Language) -> String {
        self.category.label(lang).to_string()
    }
}

/// Contents of the modal acknowledgment dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}\n{}", self.title, message),
            None => f.write_str(&self.title),
        }
    }
}

/// Last raw input strings, each absent until the first successful computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastEntry {
    pub height: Option<String>,
    pub weight: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ko" => Ok(Language::Ko),
            other => Err(format!("Unsupported language: {} (expected en or ko)", other)),
        }
    }
}
