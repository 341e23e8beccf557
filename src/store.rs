//! Session-scoped key/value storage.
//!
//! Values live only as long as the process. Nothing is written to disk, so a
//! restart always starts from configuration defaults.

use std::collections::HashMap;

pub const KEY_PRINCIPAL: &str = "principal";
pub const KEY_RATE: &str = "rate";
pub const KEY_YEARS: &str = "years";
pub const KEY_THEME: &str = "theme";
pub const KEY_LOAN_TYPE: &str = "loan_type";

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
