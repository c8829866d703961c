use std::sync::{Arc, Mutex};
use std::time::Duration;

use comply_scan::prelude::*;

/// Mock Scheduler that returns immediately, recording requested sleeps.
///
/// Lets the lifecycle run its full tick sequence without real time passing.
#[derive(Clone)]
pub struct InstantScheduler {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl InstantScheduler {
    pub fn new() -> Self {
        Self {
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }
}

impl Default for InstantScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Scheduler for InstantScheduler {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
