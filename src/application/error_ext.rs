//! Error conversion helpers
//!
//! Extension traits that attach a file path to I/O and JSON failures.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// let content = std::fs::read_to_string(&path)
    ///     .with_path_context("read catalog", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| operation_failed(action, path, e))
    }
}

/// Same as [`IoResultExt`] for JSON decoding.
pub trait JsonResultExt<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> JsonResultExt<T> for serde_json::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| operation_failed(action, path, e))
    }
}

fn operation_failed(
    action: &str,
    path: &Path,
    source: impl std::error::Error + Send + Sync + 'static,
) -> ApplicationError {
    ApplicationError::OperationFailed {
        context: format!("{}: {}", action, path.display()),
        source: Box::new(source),
    }
}
