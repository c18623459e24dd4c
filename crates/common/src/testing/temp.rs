//! Temporary directory helper
//!
//! RAII wrapper around a uniquely named directory under the system temp
//! location. Integration tests use it to hold throwaway SQLite files.

use std::path::{Path, PathBuf};
use std::{fs, io};

/// Temporary directory that is removed, with its contents, when dropped
///
/// # Examples
///
/// ```
/// use sharehub_common::testing::TempDir;
///
/// let temp_dir = TempDir::new("profiles").unwrap();
/// let db_path = temp_dir.join("sharehub.db");
/// assert!(db_path.starts_with(temp_dir.path()));
/// ```
#[derive(Debug)]
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    /// Create a new temporary directory whose name starts with `prefix`
    pub fn new(prefix: &str) -> io::Result<Self> {
        let path = std::env::temp_dir().join(format!("{}-{}", prefix, uuid::Uuid::new_v4()));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Path of the directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of an entry inside the directory (not created)
    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Write a file inside the directory and return its path
    pub fn create_file(&self, name: &str, contents: &str) -> io::Result<PathBuf> {
        let file_path = self.path.join(name);
        fs::write(&file_path, contents)?;
        Ok(file_path)
    }

    /// Keep the directory on disk and return its path
    pub fn keep(mut self) -> PathBuf {
        std::mem::take(&mut self.path)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if !self.path.as_os_str().is_empty() && self.path.exists() {
            let _ = fs::remove_dir_all(&self.path);
        }
    }
}
