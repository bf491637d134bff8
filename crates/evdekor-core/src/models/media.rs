//! Selected media files.

use std::path::{Path, PathBuf};

use crate::error::{Result, WizardError};

/// File extensions accepted as images.
pub const IMAGE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "gif", "webp", "heic", "heif", "avif"];

/// A user-selected local image. Never persisted and never transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub name: String,
}

impl MediaFile {
    /// Wrap a path without touching the file system.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Select a file from disk, accepting only existing image files.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` when the path is not a regular file
    /// or its extension is not an image type.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(WizardError::invalid_input("media")
                .with_reason(format!("'{}' is not a file", path.display())));
        }
        if !is_image(path) {
            return Err(WizardError::invalid_input("media")
                .with_reason(format!("'{}' is not an image", path.display())));
        }
        Ok(Self::new(path))
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
