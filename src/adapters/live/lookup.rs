//! Live adapters for the `LookUpRepository` port.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::ports::{BoxError, LookUpRepository};

/// Lookup store that treats every tag as free.
pub struct NothingTaken;

impl LookUpRepository for NothingTaken {
    fn data_exists(&self, _tag: &str) -> Result<bool, BoxError> {
        Ok(false)
    }
}

/// Lookup store backed by a newline-delimited file of taken tags.
///
/// The file is read once when opened. Blank lines and lines starting with
/// `#` are ignored; entries are trimmed and compared lowercase.
pub struct TakenTagsFile {
    path: PathBuf,
    taken: HashSet<String>,
}

impl TakenTagsFile {
    /// Loads the taken tags listed in `path`.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read.
    pub fn open(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read taken tags file {}: {e}", path.display()))?;
        let store = Self::parse(path, &contents);
        tracing::debug!(path = %path.display(), taken = store.len(), "loaded taken tags");
        Ok(store)
    }

    /// Builds a store from already-loaded file contents.
    #[must_use]
    pub fn parse(path: &Path, contents: &str) -> Self {
        let taken = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { path: path.to_path_buf(), taken }
    }

    /// Path the store was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of distinct taken tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns `true` if the file listed no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

impl LookUpRepository for TakenTagsFile {
    fn data_exists(&self, tag: &str) -> Result<bool, BoxError> {
        Ok(self.taken.contains(&tag.trim().to_lowercase()))
    }
}
