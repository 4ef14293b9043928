use thiserror::Error;

use crate::schema::errors::SchemaError;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Encoded record needs {required} bytes, buffer holds {capacity}.")]
    BufferTooSmall { required: usize, capacity: usize },

    #[error("Encoding failed: {0}")]
    Encode(#[source] protobuf::Error),

    #[error("Decoding failed: {0}")]
    Decode(#[source] protobuf::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
