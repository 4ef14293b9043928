use std::path::{Path, PathBuf};

use log::debug;

use super::errors::StoreError;
use super::{ByteStore, ERASED_BYTE};

/// Flash emulation backed by an image file.
///
/// The whole region is cached on open; `commit` rewrites the file from the
/// cache. A missing image reads as an erased region.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: Vec<u8>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>, size: usize) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let cache = if path.exists() {
            let contents = std::fs::read(&path).map_err(|e| {
                StoreError::FileError(format!("failed to read {}: {}", path.display(), e))
            })?;
            if contents.len() != size {
                return Err(StoreError::ImageSize {
                    path: path.display().to_string(),
                    expected: size,
                    actual: contents.len(),
                });
            }
            debug!("loaded {} byte image from {}", size, path.display());
            contents
        } else {
            debug!("no image at {}, starting erased", path.display());
            vec![ERASED_BYTE; size]
        };

        Ok(Self { path, cache })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteStore for FileStore {
    fn cache(&self) -> &[u8] {
        &self.cache
    }

    fn cache_mut(&mut self) -> &mut [u8] {
        &mut self.cache
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::CommitFailed(format!(
                    "failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        std::fs::write(&self.path, &self.cache).map_err(|e| {
            StoreError::CommitFailed(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}
