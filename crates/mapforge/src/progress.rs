//! Job progress reporting.
//!
//! The core never owns task state. It writes coarse status updates into a
//! [`ProgressSink`] supplied by the caller (an upload handler's status map, a
//! CLI spinner, or nothing at all).

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Status of a long-running job, as exposed to pollers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work in progress. `progress` is a percentage.
    Converting { progress: u8, detail: String },
    /// Finished successfully.
    Done { progress: u8, message: String },
    /// Finished with a terminal error.
    Error { error: String },
}

impl TaskStatus {
    pub fn converting(progress: u8, detail: impl Into<String>) -> Self {
        TaskStatus::Converting {
            progress: progress.min(100),
            detail: detail.into(),
        }
    }

    pub fn done(message: impl Into<String>) -> Self {
        TaskStatus::Done {
            progress: 100,
            message: message.into(),
        }
    }

    pub fn error(error: impl ToString) -> Self {
        TaskStatus::Error {
            error: error.to_string(),
        }
    }

    /// True for `Done` and `Error`.
    pub fn is_finished(&self) -> bool {
        !matches!(self, TaskStatus::Converting { .. })
    }
}

/// Receiver of job status updates, keyed by task id.
pub trait ProgressSink: Send + Sync {
    fn report(&self, key: &str, status: TaskStatus);
}

/// Discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&self, _key: &str, _status: TaskStatus) {}
}

/// Keeps the latest status per key in memory.
#[derive(Debug, Default)]
pub struct MemoryProgress {
    tasks: Mutex<HashMap<String, TaskStatus>>,
}

impl MemoryProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest status for a key.
    pub fn get(&self, key: &str) -> Option<TaskStatus> {
        self.lock().get(key).cloned()
    }

    /// Number of tracked keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, TaskStatus>> {
        // A panicked writer leaves a complete status behind; keep serving it.
        self.tasks.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ProgressSink for MemoryProgress {
    fn report(&self, key: &str, status: TaskStatus) {
        self.lock().insert(key.to_string(), status);
    }
}

/// Maps row counts onto a percentage window and reports every `interval` rows.
pub struct RowProgress<'a> {
    sink: &'a dyn ProgressSink,
    key: &'a str,
    interval: usize,
    from: u8,
    to: u8,
}

impl<'a> RowProgress<'a> {
    /// Report into `sink` under `key`, scaling progress into `from..=to`.
    pub fn new(sink: &'a dyn ProgressSink, key: &'a str, interval: usize, from: u8, to: u8) -> Self {
        Self {
            sink,
            key,
            interval,
            from: from.min(to),
            to,
        }
    }

    /// A tracker that never reports.
    pub fn silent() -> RowProgress<'static> {
        RowProgress {
            sink: &NoopProgress,
            key: "",
            interval: 0,
            from: 0,
            to: 0,
        }
    }

    /// Called after each processed row.
    pub fn tick(&self, processed: usize, total: usize) {
        if self.interval == 0 || processed == 0 || total == 0 || processed % self.interval != 0 {
            return;
        }
        let span = (self.to - self.from) as usize;
        let pct = self.from as usize + span * processed.min(total) / total;
        self.sink.report(
            self.key,
            TaskStatus::converting(pct as u8, format!("Processed {processed}/{total} rows")),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_progress_keeps_latest() {
        let sink = MemoryProgress::new();
        sink.report("job", TaskStatus::converting(10, "reading"));
        sink.report("job", TaskStatus::done("ok"));

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get("job"), Some(TaskStatus::done("ok")));
        assert!(sink.get("job").unwrap().is_finished());
        assert_eq!(sink.get("other"), None);
    }

    #[test]
    fn test_row_progress_interval() {
        let sink = MemoryProgress::new();
        let progress = RowProgress::new(&sink, "job", 50, 30, 60);

        progress.tick(49, 100);
        assert!(sink.is_empty());

        progress.tick(50, 100);
        assert_eq!(
            sink.get("job"),
            Some(TaskStatus::converting(45, "Processed 50/100 rows"))
        );
    }

    #[test]
    fn test_status_json_shape() {
        let json = serde_json::to_value(TaskStatus::converting(20, "columns")).unwrap();
        assert_eq!(json["status"], "converting");
        assert_eq!(json["progress"], 20);
        assert_eq!(json["detail"], "columns");
    }
}
