pub mod calculator;
pub mod parser;
pub mod repository;
pub mod sampler;
pub mod session;

pub use crate::domain::model::{Alert, BmiCategory, BmiReport, Language, LastEntry, Measurements};
pub use crate::domain::ports::KeyValueStore;
pub use crate::utils::error::Result;
