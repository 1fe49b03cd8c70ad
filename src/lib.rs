pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{file_store::FileStore, memory_store::MemoryStore};
pub use config::AppConfig;
pub use crate::core::calculator::calculate_bmi;
pub use crate::core::parser::parse_measurements;
pub use crate::core::repository::LastEntryRepository;
pub use crate::core::session::{alert_for, CalculatorSession};
pub use domain::model::{Alert, BmiCategory, BmiReport, Language, LastEntry, Measurements};
pub use domain::ports::KeyValueStore;
pub use utils::error::{BmiError, Result};
