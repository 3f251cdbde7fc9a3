// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

/// Mirrors fetch progress into the status line. Lives on the worker thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    lines: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, lines: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        self.lines = 0;
        self.set_status(format!("Fetching {url} …"));
    }

    fn log(&mut self, msg: &str) {
        self.lines += 1;
        self.set_status(s!(msg));
    }

    fn finish(&mut self) {
        log::debug!("GUI: worker done ({} status line(s))", self.lines);
    }
}
