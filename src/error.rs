use thiserror::Error;

use crate::codec::errors::CodecError;
use crate::config::errors::ConfigError;
use crate::output::errors::OutputError;
use crate::schema::errors::SchemaError;
use crate::storage::errors::{FooterError, StoreError};

#[derive(Debug, Error)]
pub enum NvsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Footer(#[from] FooterError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error("In cycle {cycle} ({schema} schema): {source}")]
    InCycle {
        cycle: u32,
        schema: &'static str,
        #[source]
        source: Box<NvsError>,
    },
}
