use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Process-local store. Contents are lost on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("height").unwrap(), None);

        store.set("height", "170").unwrap();
        store.set("height", "171").unwrap();
        assert_eq!(store.get("height").unwrap().as_deref(), Some("171"));
        assert_eq!(store.len(), 1);
    }
}
