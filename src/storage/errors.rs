use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Access out of bounds: {len} bytes at offset {offset} in a {size}-byte region.")]
    OutOfBounds {
        offset: usize,
        len: usize,
        size: usize,
    },

    #[error("Image '{path}' is {actual} bytes, expected {expected}.")]
    ImageSize {
        path: String,
        expected: usize,
        actual: usize,
    },

    #[error("Commit failed: {0}.")]
    CommitFailed(String),

    #[error("File error: {0}.")]
    FileError(String),
}

/// Reasons a stored footer is not accepted. `load` folds all of them into a
/// default-initialised record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FooterError {
    #[error("bad footer magic 0x{found:08X}")]
    Format { found: u32 },

    #[error("payload of {data_size} bytes does not fit a {region_size}-byte region")]
    Size { data_size: u32, region_size: usize },

    #[error("checksum mismatch: stored 0x{stored:08X}, computed 0x{computed:08X}")]
    Integrity { stored: u32, computed: u32 },
}
