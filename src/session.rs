//! Upload session: the bounded, ordered collection of files queued by one caller.
//!
//! The session owns the whole pipeline run for each accepted file: classify, parse,
//! profile. Everything is synchronous and single-writer; no batch runs concurrently
//! against the same session.

use std::sync::Arc;

use crate::classify::{classify, RECOGNIZED_EXTENSIONS};
use crate::observe::SessionObserver;
use crate::parse;
use crate::types::{FileInput, FileStatus, UploadedFile};

/// Default cap on queued files per session.
pub const DEFAULT_MAX_FILES: usize = 5;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of files the session holds at once.
    pub max_files: usize,
    /// Extension allow-list surfaced to the file-selection UI. Advisory only; the
    /// classifier's own table is the authority on what parses successfully.
    pub accepted_extensions: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            accepted_extensions: RECOGNIZED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// The ordered set of files a caller has queued, bounded by `max_files`.
pub struct UploadSession {
    config: SessionConfig,
    files: Vec<UploadedFile>,
    observer: Option<Arc<dyn SessionObserver>>,
}

impl std::fmt::Debug for UploadSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadSession")
            .field("config", &self.config)
            .field("files_len", &self.files.len())
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl UploadSession {
    /// Create an empty session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
            observer: None,
        }
    }

    /// Attach an observer that receives per-file outcomes and ready-set changes.
    pub fn with_observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Accept a batch of files, returning the ids of the records actually admitted.
    ///
    /// At most `max_files - current count` files are admitted, in the order offered;
    /// excess files are dropped silently (the returned set is shorter than the batch,
    /// never an error). Each admitted file is classified, parsed, and profiled before
    /// this call returns. A failure becomes a `Failed` record and never aborts the
    /// batch's sibling files. After the batch, the current ready subset is published
    /// to the observer.
    pub fn accept(&mut self, inputs: Vec<FileInput>) -> Vec<String> {
        let capacity = self.config.max_files.saturating_sub(self.files.len());

        let mut accepted_ids = Vec::new();
        for input in inputs.into_iter().take(capacity) {
            let file = self.process_one(&input);
            accepted_ids.push(file.id.clone());
            self.files.push(file);
        }

        if !accepted_ids.is_empty() {
            self.publish_ready_set();
        }
        accepted_ids
    }

    /// Remove exactly one record by id. No-op when the id is absent; other records are
    /// unaffected. Removing a ready file republishes the ready set.
    pub fn remove(&mut self, id: &str) {
        let Some(pos) = self.files.iter().position(|f| f.id == id) else {
            return;
        };
        let removed = self.files.remove(pos);
        if removed.is_ready() {
            self.publish_ready_set();
        }
    }

    /// All records currently held, in acceptance order.
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// The subset of records whose status is `Ready`, in acceptance order.
    pub fn ready_files(&self) -> Vec<&UploadedFile> {
        self.files.iter().filter(|f| f.is_ready()).collect()
    }

    /// Look up one record by id.
    pub fn file(&self, id: &str) -> Option<&UploadedFile> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Number of records currently held. Never exceeds `max_files`.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when no records are held.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn process_one(&self, input: &FileInput) -> UploadedFile {
        let format = classify(input.media_type.as_deref(), &input.name);
        let mut file = UploadedFile::queued(input, format);

        file.status = FileStatus::Parsing;
        file.advance_progress(50);

        match parse::parse_table(input, format) {
            Ok(table) => {
                file.status = FileStatus::Ready;
                file.advance_progress(100);
                file.table = Some(table);
                if let Some(obs) = &self.observer {
                    obs.on_file_ready(&file);
                }
            }
            Err(err) => {
                file.status = FileStatus::Failed;
                file.advance_progress(100);
                file.error = Some(err.to_string());
                if let Some(obs) = &self.observer {
                    obs.on_file_failed(&file);
                }
            }
        }
        file
    }

    fn publish_ready_set(&self) {
        if let Some(obs) = &self.observer {
            let ready = self.ready_files();
            obs.on_ready_set_changed(&ready);
        }
    }
}
