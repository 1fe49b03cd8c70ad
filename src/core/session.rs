use crate::core::parser::parse_measurements;
use crate::core::repository::LastEntryRepository;
use crate::core::sampler::{format_sample, random_sample};
use crate::domain::model::{Alert, BmiReport, Language};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use rand::Rng;

const MASK_CHAR: char = '•';

/// Input state of the calculator screen, decoupled from any display toolkit.
pub struct CalculatorSession<S: KeyValueStore> {
    height_text: String,
    weight_text: String,
    weight_masked: bool,
    repository: LastEntryRepository<S>,
}

impl<S: KeyValueStore> CalculatorSession<S> {
    /// Starts a session with both fields pre-filled from the last successful entry.
    pub fn open(store: S) -> Result<Self> {
        let repository = LastEntryRepository::new(store);
        let last = repository.load()?;
        tracing::debug!("Restored last entry: {:?}", last);

        Ok(Self {
            height_text: last.height.unwrap_or_default(),
            weight_text: last.weight.unwrap_or_default(),
            weight_masked: true,
            repository,
        })
    }

    pub fn with_weight_masked(mut self, masked: bool) -> Self {
        self.weight_masked = masked;
        self
    }

    pub fn height_text(&self) -> &str {
        &self.height_text
    }

    pub fn weight_text(&self) -> &str {
        &self.weight_text
    }

    pub fn set_height(&mut self, text: impl Into<String>) {
        self.height_text = text.into();
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        self.weight_text = text.into();
    }

    pub fn is_weight_masked(&self) -> bool {
        self.weight_masked
    }

    /// Flips weight masking and returns the new state.
    pub fn toggle_weight_mask(&mut self) -> bool {
        self.weight_masked = !self.weight_masked;
        self.weight_masked
    }

    /// Weight as it should appear on screen.
    pub fn displayed_weight(&self) -> String {
        if self.weight_masked {
            self.weight_text.chars().map(|_| MASK_CHAR).collect()
        } else {
            self.weight_text.clone()
        }
    }

    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Fills both fields with random values. Nothing is validated or saved here.
    ///
    /// Generated values were never typed by the user, so the weight is unmasked.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        let (height, weight) = random_sample(rng);
        self.height_text = format_sample(height);
        self.weight_text = format_sample(weight);
        self.weight_masked = false;
        tracing::debug!(
            "Randomized inputs: height={} weight={}",
            self.height_text,
            self.weight_text
        );
    }

    /// Validates the current fields and computes the report.
    ///
    /// The raw field text is persisted only when validation succeeds. A failed
    /// write is logged and does not discard the computed report.
    pub fn submit(&mut self) -> Result<BmiReport> {
        let measurements = parse_measurements(&self.height_text, &self.weight_text)?;
        let report = BmiReport::from_measurements(&measurements);
        tracing::info!(
            "Computed BMI {:.1} ({}) for height={} weight={}",
            report.bmi,
            report.category,
            measurements.height,
            measurements.weight
        );

        if let Err(e) = self
            .repository
            .save(&measurements.raw_height, &measurements.raw_weight)
        {
            tracing::warn!("Failed to persist last entry: {}", e);
        }

        Ok(report)
    }

    pub fn repository(&self) -> &LastEntryRepository<S> {
        &self.repository
    }

    pub fn into_store(self) -> S {
        self.repository.into_inner()
    }
}

/// Dialog contents for the outcome of a submission.
pub fn alert_for(outcome: &Result<BmiReport>, lang: Language) -> Alert {
    match outcome {
        Ok(report) => Alert {
            title: report.title(),
            message: Some(report.message(lang)),
        },
        Err(e) => Alert {
            title: e.localized_message(lang),
            message: None,
        },
    }
}
