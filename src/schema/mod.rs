pub mod descriptor;
pub mod dump;
pub mod errors;
pub mod presence;

use clap::ValueEnum;
use protobuf::MessageFull;
use serde::{Deserialize, Serialize};

use errors::SchemaError;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/protos/mod.rs"));
}

pub use generated::{settings_v0, settings_v1};

/// A settings record type that can be persisted.
///
/// The reflection table comes from `MessageFull::descriptor()`; the
/// default-initialised record is `Default::default()`.
pub trait Schema: MessageFull {
    /// Short label used in logs and reports.
    const LABEL: &'static str;

    /// Upper bound on the encoded size of a fully populated record, derived
    /// from the generated descriptor so it follows `.proto` edits.
    fn max_encoded_size() -> Result<usize, SchemaError> {
        descriptor::max_encoded_size(&Self::descriptor())
    }
}

impl Schema for settings_v0::Settings {
    const LABEL: &'static str = "v0";
}

impl Schema for settings_v1::Settings {
    const LABEL: &'static str = "v1";
}

/// Schema generations compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    V0,
    V1,
}

impl SchemaVersion {
    pub fn label(&self) -> &'static str {
        match self {
            SchemaVersion::V0 => settings_v0::Settings::LABEL,
            SchemaVersion::V1 => settings_v1::Settings::LABEL,
        }
    }
}
