// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem path values.
//!
//! [`FilePath`] and [`DirectoryPath`] keep the path exactly as given together
//! with its absolute form. Neither requires the path to exist.

use crate::domain::errors::{ConvertError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// A path that is expected to name a file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FilePath {
    path: PathBuf,
    full_path: PathBuf,
}

/// A path that is expected to name a directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectoryPath {
    path: PathBuf,
    full_path: PathBuf,
}

/// Validates path text and returns the given and absolute paths.
fn resolve(text: &str, target: &'static str) -> Result<(PathBuf, PathBuf)> {
    let invalid = |reason: String| ConvertError::InvalidPath {
        input: text.to_string(),
        target,
        reason,
    };

    if text.is_empty() {
        return Err(invalid("path cannot be empty".to_string()));
    }
    if text.contains('\0') {
        return Err(invalid("path contains a NUL byte".to_string()));
    }

    let path = PathBuf::from(text);
    let full_path = std::path::absolute(&path).map_err(|e| invalid(e.to_string()))?;
    Ok((path, full_path))
}

impl FilePath {
    /// Parses a file path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` for empty text, text containing a NUL byte, or a
    /// relative path when the current directory cannot be determined.
    pub fn parse(text: &str) -> Result<Self> {
        let (path, full_path) = resolve(text, "file path")?;
        Ok(FilePath { path, full_path })
    }

    /// Returns the path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the absolute path.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns true if the path currently names an existing file.
    pub fn exists(&self) -> bool {
        self.full_path.is_file()
    }
}

impl DirectoryPath {
    /// Parses a directory path.
    ///
    /// # Errors
    ///
    /// Same as [`FilePath::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        let (path, full_path) = resolve(text, "directory path")?;
        Ok(DirectoryPath { path, full_path })
    }

    /// Returns the path as given.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the absolute path.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns true if the path currently names an existing directory.
    pub fn exists(&self) -> bool {
        self.full_path.is_dir()
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
