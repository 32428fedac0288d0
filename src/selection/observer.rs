use std::sync::{Arc, Mutex};

/// Told the distinct-recipe count after every finished run, including 0 for
/// empty or failed runs.
pub trait CountObserver: Send + Sync {
    fn count_changed(&self, total: usize);
}

impl<F> CountObserver for F
where
    F: Fn(usize) + Send + Sync,
{
    fn count_changed(&self, total: usize) {
        self(total)
    }
}

/// Keeps every reported count. Handy for tests and simple status displays.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    counts: Arc<Mutex<Vec<usize>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> Vec<usize> {
        self.counts
            .lock()
            .map(|counts| counts.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<usize> {
        self.counts().last().copied()
    }
}

impl CountObserver for RecordingObserver {
    fn count_changed(&self, total: usize) {
        if let Ok(mut counts) = self.counts.lock() {
            counts.push(total);
        }
    }
}
