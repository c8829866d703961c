use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use comply_scan::prelude::*;

/// Mock PreferenceStore keeping values in memory and counting writes.
#[derive(Default, Clone)]
pub struct MockPreferenceStore {
    values: Arc<Mutex<HashMap<String, bool>>>,
    writes: Arc<Mutex<usize>>,
}

impl MockPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: bool) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_string(), value);
        store
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl PreferenceStore for MockPreferenceStore {
    fn load_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.values.lock().unwrap().get(key).copied())
    }

    fn store_bool(&self, key: &str, value: bool) -> Result<()> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
