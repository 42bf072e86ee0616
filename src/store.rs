//! Asset store
//!
//! The flat directory holding one SVG per completed prompt. A file's presence is
//! the only state: there is no index, metadata, or content hash.

use crate::error::StorageError;
use crate::filename::is_asset_name;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Flat, filename-keyed asset directory
///
/// Writes go through a `.tmp` sibling and a rename, so a reader never sees a
/// half-written asset and an interrupted write never counts as materialized.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Open the store at `root`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to create asset directory at {:?}: {}", root, e),
            ))
        })?;
        Ok(Self { root })
    }

    /// Use `root` without touching the filesystem.
    pub fn at<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the asset called `name`.
    ///
    /// Names that could escape the directory are rejected.
    pub fn asset_path(&self, name: &str) -> Result<PathBuf, StorageError> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    /// Whether the asset has been materialized.
    pub fn exists(&self, name: &str) -> Result<bool, StorageError> {
        let path = self.asset_path(name)?;
        Ok(path.try_exists()?)
    }

    /// Persist an asset atomically (write to .tmp, then rename).
    pub fn write(&self, name: &str, content: &str) -> Result<PathBuf, StorageError> {
        let path = self.asset_path(name)?;
        let temp_path = self.root.join(format!("{}.tmp", name));

        fs::write(&temp_path, content.as_bytes()).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to write asset to {:?}: {}", temp_path, e),
            ))
        })?;

        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!("Failed to rename temp file to {:?}: {}", path, e),
            ))
        })?;

        Ok(path)
    }

    /// Names of all assets, sorted.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_asset_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Read an asset's bytes; `Ok(None)` when it does not exist.
    ///
    /// Invalid names read as absent.
    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = match self.asset_path(name) {
            Ok(path) => path,
            Err(StorageError::InvalidName(_)) => return Ok(None),
            Err(e) => return Err(e),
        };
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }
}

fn validate_name(name: &str) -> Result<(), StorageError> {
    let invalid = name.is_empty()
        || name == "."
        || name.contains("..")
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0');
    if invalid {
        return Err(StorageError::InvalidName(name.to_string()));
    }
    Ok(())
}
