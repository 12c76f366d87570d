//! Progress reporting for long-running filter stages.
//!
//! A filter stage owns a window of the overall 0..=100 range and reports
//! its local completion fraction into it, so a pipeline of stages yields
//! one monotonic percentage stream for the consumer.
use std::sync::Arc;

/// Callback receiving an overall completion percentage (0..=100).
pub type ProgressFn = dyn Fn(u8) + Send + Sync;

/// Shared handle to an optional progress consumer.
#[derive(Clone, Default)]
pub struct Progress {
    callback: Option<Arc<ProgressFn>>,
}

impl Progress {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(u8) + Send + Sync + 'static,
    {
        Self {
            callback: Some(Arc::new(callback)),
        }
    }

    /// A reporter that discards all updates.
    pub fn sink() -> Self {
        Self::default()
    }

    /// Scope a stage to the `lo..=hi` percentage window.
    pub fn range(&self, lo: u8, hi: u8) -> ProgressRange {
        debug_assert!(lo <= hi && hi <= 100);
        ProgressRange {
            progress: self.clone(),
            lo,
            hi,
        }
    }

    fn emit(&self, percent: u8) {
        if let Some(callback) = &self.callback {
            callback(percent.min(100));
        }
    }
}

/// One stage's window of the overall percentage range.
pub struct ProgressRange {
    progress: Progress,
    lo: u8,
    hi: u8,
}

impl ProgressRange {
    /// Report the stage's local completion fraction (clamped to 0..=1).
    pub fn report(&self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        let span = f64::from(self.hi - self.lo);
        let percent = f64::from(self.lo) + span * fraction;
        self.progress.emit(percent.round() as u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn collector() -> (Progress, Arc<Mutex<Vec<u8>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let progress = Progress::new(move |p| sink.lock().unwrap().push(p));
        (progress, seen)
    }

    #[test]
    fn range_remaps_fractions() {
        let (progress, seen) = collector();
        let range = progress.range(50, 60);
        range.report(0.0);
        range.report(0.5);
        range.report(1.0);
        assert_eq!(*seen.lock().unwrap(), vec![50, 55, 60]);
    }

    #[test]
    fn fractions_are_clamped() {
        let (progress, seen) = collector();
        let range = progress.range(0, 100);
        range.report(-1.0);
        range.report(2.0);
        assert_eq!(*seen.lock().unwrap(), vec![0, 100]);
    }

    #[test]
    fn sink_discards() {
        // Must not panic with no consumer attached.
        Progress::sink().range(0, 50).report(1.0);
    }
}
