use crate::domain::model::LastEntry;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

pub const HEIGHT_KEY: &str = "height";
pub const WEIGHT_KEY: &str = "weight";

/// Reads and writes the most recent valid input strings.
pub struct LastEntryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LastEntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrites both keys with the raw strings as typed.
    pub fn save(&mut self, height: &str, weight: &str) -> Result<()> {
        tracing::debug!("Saving last entry: height={:?} weight={:?}", height, weight);
        self.store.set(HEIGHT_KEY, height)?;
        self.store.set(WEIGHT_KEY, weight)?;
        Ok(())
    }

    pub fn load(&self) -> Result<LastEntry> {
        Ok(LastEntry {
            height: self.store.get(HEIGHT_KEY)?,
            weight: self.store.get(WEIGHT_KEY)?,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
