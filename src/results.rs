//! Append-only persistence of game results.

use derive_more::{Display, Error};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Default results file, relative to the working directory.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Result sink error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Result sink error: {} at {}:{}", message, file, line)]
pub struct SinkError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SinkError {
    /// Creates a new sink error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Destination for finished-game result lines.
pub trait ResultSink {
    /// Persists one result sentence.
    fn record(&mut self, result: &str) -> Result<(), SinkError>;
}

/// Appends one UTF-8 line per game to a text file.
///
/// The file is opened in append mode for each write and closed again,
/// so no handle is held between games.
#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    /// Creates a sink writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path results are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileResultSink {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_FILE)
    }
}

impl ResultSink for FileResultSink {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn record(&mut self, result: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::new(format!("Failed to open {}: {}", self.path.display(), e)))?;

        writeln!(file, "{result}").map_err(|e| {
            SinkError::new(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!("Result recorded");
        Ok(())
    }
}
