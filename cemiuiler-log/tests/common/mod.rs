#![allow(dead_code)]

use cemiuiler_log::{BoxError, LogPolicy, Logger, ModuleHook, testing::RecordingSink};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Loggers
// ============================================================================

pub const ALL_FLAGS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

pub fn recording_logger(debug_build: bool, suppress: bool) -> (Logger<RecordingSink>, RecordingSink) {
    let sink = RecordingSink::new();
    let logger = Logger::new(sink.clone(), LogPolicy::new(debug_build, suppress));
    (logger, sink)
}

// ============================================================================
// Test Hooks
// ============================================================================

pub struct CountingHook {
    pub calls: Arc<AtomicUsize>,
}

impl ModuleHook for CountingHook {
    fn init(&mut self) -> Result<(), BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct FailingHook {
    pub reason: &'static str,
}

impl ModuleHook for FailingHook {
    fn init(&mut self) -> Result<(), BoxError> {
        Err(std::io::Error::other(self.reason).into())
    }
}

pub struct PanickingHook;

impl ModuleHook for PanickingHook {
    fn init(&mut self) -> Result<(), BoxError> {
        panic!("method not found: onCreate");
    }
}

pub struct NamedHook {
    pub name: String,
}

impl ModuleHook for NamedHook {
    fn tag(&self) -> &str {
        &self.name
    }

    fn init(&mut self) -> Result<(), BoxError> {
        Ok(())
    }
}
