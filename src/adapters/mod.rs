// Adapters layer: concrete KeyValueStore backends.

pub mod file_store;
pub mod memory_store;
