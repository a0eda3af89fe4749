//! Word source service
//!
//! Loads the line-delimited word list that feeds the name pool.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::NamePool;
use crate::infrastructure::traits::FileSystem;

/// Service for loading candidate names.
pub struct WordSource {
    fs: Arc<dyn FileSystem>,
}

impl WordSource {
    /// Create a new word source.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load the word list at `path` into a normalized pool.
    ///
    /// Lines are trimmed, blanks dropped, and duplicates kept once in
    /// first-seen order. A pool too small for sampling is not an error
    /// here; that surfaces at planning time.
    pub fn load(&self, path: &Path) -> ApplicationResult<NamePool> {
        debug!("load: path={}", path.display());

        // Check file exists first - give clear error message
        if !self.fs.exists(path) {
            return Err(ApplicationError::WordsNotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read word list", path)?;

        let pool = NamePool::from_lines(&content);
        debug!("load: {} usable names", pool.len());
        Ok(pool)
    }
}
