// src/progress.rs
/// Lightweight progress reporting for the fetch pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once when a fetch starts.
    fn begin(&mut self, _url: &str) {}

    /// Free-form status line for human eyes (retries, parse counts).
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
