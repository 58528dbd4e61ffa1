/// A trait for reporting progress of long-running operations.
pub trait Progress: Send + Sync {
    /// Set the phase label for the current operation (e.g., "Fetching").
    fn set_phase(&self, phase: &str);

    /// Report that `position` out of `total` items are done, with a message describing the current item.
    fn update(&self, position: u64, total: u64, message: &str);

    /// Finish and clear the progress indicator.
    fn done(&self);
}

/// Progress sink that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn set_phase(&self, _phase: &str) {}
    fn update(&self, _position: u64, _total: u64, _message: &str) {}
    fn done(&self) {}
}
