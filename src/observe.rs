//! Observer interface for session outcomes.
//!
//! The session reports per-file results and ready-set changes through a
//! [`SessionObserver`]; implementors can record metrics, drive a UI, or log.

use std::fmt;
use std::sync::Arc;

use crate::types::UploadedFile;

/// Observer for upload-session events.
pub trait SessionObserver: Send + Sync {
    /// Called when a file reaches `Ready`.
    fn on_file_ready(&self, _file: &UploadedFile) {}

    /// Called when a file reaches `Failed`.
    fn on_file_failed(&self, _file: &UploadedFile) {}

    /// Called after a batch (or a removal) changes the set of ready files.
    ///
    /// `ready` is the full current ready subset, in session order.
    fn on_ready_set_changed(&self, _ready: &[&UploadedFile]) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SessionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SessionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SessionObserver for CompositeObserver {
    fn on_file_ready(&self, file: &UploadedFile) {
        for o in &self.observers {
            o.on_file_ready(file);
        }
    }

    fn on_file_failed(&self, file: &UploadedFile) {
        for o in &self.observers {
            o.on_file_failed(file);
        }
    }

    fn on_ready_set_changed(&self, ready: &[&UploadedFile]) {
        for o in &self.observers {
            o.on_ready_set_changed(ready);
        }
    }
}

/// Logs session events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl SessionObserver for StdErrObserver {
    fn on_file_ready(&self, file: &UploadedFile) {
        eprintln!(
            "[intake][ok] file={} format={} rows={}",
            file.name,
            file.format,
            file.table.as_ref().map_or(0, |t| t.total_row_count)
        );
    }

    fn on_file_failed(&self, file: &UploadedFile) {
        eprintln!(
            "[intake][failed] file={} format={} err={}",
            file.name,
            file.format,
            file.error.as_deref().unwrap_or("unknown")
        );
    }

    fn on_ready_set_changed(&self, ready: &[&UploadedFile]) {
        eprintln!("[intake] ready set changed: {} file(s)", ready.len());
    }
}
