use crate::config::app_config::AppConfig;
use crate::domain::model::Language;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "bmi-calc")]
#[command(about = "Body Mass Index calculator that remembers your last entry")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to the JSON file holding the last entry
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Language for result and error messages (en, ko)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Print the weight in plain text instead of masking it
    #[arg(long, global = true)]
    pub show_weight: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute BMI. Omitted values fall back to the last saved entry.
    Calc {
        /// Height in centimeters
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Weight in kilograms
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,
    },

    /// Fill in random height and weight values
    Random {
        /// Also compute the BMI for the generated values
        #[arg(long)]
        submit: bool,
    },

    /// Show the last saved entry
    Last,
}

impl CliConfig {
    /// Layers command line overrides on top of the config file, or defaults when none is given.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        if let Some(store) = &self.store {
            config.storage.path = store.clone();
        }
        if let Some(lang) = self.lang {
            config.display.language = lang;
        }
        if self.show_weight {
            config.display.mask_weight = false;
        }

        Ok(config)
    }
}
