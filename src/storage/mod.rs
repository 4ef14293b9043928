pub mod args;
pub mod checksum;
pub mod errors;
pub mod file;
pub mod footer;

use errors::StoreError;

/// Size of the emulated EEPROM region used when nothing else is configured.
pub const DEFAULT_REGION_SIZE: usize = 4096;

/// Value of an erased flash byte.
pub const ERASED_BYTE: u8 = 0xFF;

/// Fixed-size byte region with a write-back cache, as exposed by a flash
/// EEPROM emulation layer.
///
/// Callers must hold exclusive access to the underlying medium for the whole
/// of a `set`..`commit` sequence.
pub trait ByteStore {
    /// Full in-memory cache of the region.
    fn cache(&self) -> &[u8];

    /// Mutable view of the cache. Changes reach the medium on `commit`.
    fn cache_mut(&mut self) -> &mut [u8];

    /// Writes the cache back to the medium.
    fn commit(&mut self) -> Result<(), StoreError>;

    fn size(&self) -> usize {
        self.cache().len()
    }

    fn get(&self, offset: usize, len: usize) -> Result<&[u8], StoreError> {
        let size = self.size();
        offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .map(|end| &self.cache()[offset..end])
            .ok_or(StoreError::OutOfBounds { offset, len, size })
    }

    fn set(&mut self, offset: usize, bytes: &[u8]) -> Result<(), StoreError> {
        let size = self.size();
        let len = bytes.len();
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= size)
            .ok_or(StoreError::OutOfBounds { offset, len, size })?;
        self.cache_mut()[offset..end].copy_from_slice(bytes);
        Ok(())
    }
}

/// Purely in-memory region. Starts erased.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    cache: Vec<u8>,
    commits: usize,
    fail_commits: bool,
}

impl MemoryStore {
    pub fn new(size: usize) -> Self {
        Self {
            cache: vec![ERASED_BYTE; size],
            commits: 0,
            fail_commits: false,
        }
    }

    /// Makes every subsequent `commit` report failure.
    pub fn with_failing_commits(mut self) -> Self {
        self.fail_commits = true;
        self
    }

    /// Number of successful commits so far.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl ByteStore for MemoryStore {
    fn cache(&self) -> &[u8] {
        &self.cache
    }

    fn cache_mut(&mut self) -> &mut [u8] {
        &mut self.cache
    }

    fn commit(&mut self) -> Result<(), StoreError> {
        if self.fail_commits {
            return Err(StoreError::CommitFailed("medium rejected the write".to_string()));
        }
        self.commits += 1;
        Ok(())
    }
}
