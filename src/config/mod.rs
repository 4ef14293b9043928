pub mod errors;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::args::Args;
use crate::schema::SchemaVersion;
use crate::storage::DEFAULT_REGION_SIZE;
use crate::storage::footer::FOOTER_SIZE;
use errors::ConfigError;

pub const DEFAULT_IMAGE: &str = "settings.bin";
pub const DEFAULT_ITERATIONS: u32 = 1;

/// Optional TOML file supplying defaults for the command line.
///
/// ```toml
/// [store]
/// image = "out/settings.bin"
/// region_size = 4096
///
/// [harness]
/// schema = "v1"
/// iterations = 10
/// seed = 42
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub harness: HarnessSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    pub image: Option<PathBuf>,
    pub region_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessSection {
    pub schema: Option<SchemaVersion>,
    pub iterations: Option<u32>,
    pub seed: Option<u32>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub image: PathBuf,
    pub region_size: usize,
    pub schema: SchemaVersion,
    pub iterations: u32,
    pub seed: Option<u32>,
    pub inspect: bool,
}

pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::FileError(format!("failed to read {}: {}", path.display(), e))
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merges command line, config file and built-in defaults, in that order of
/// precedence.
pub fn resolve(args: &Args) -> Result<RunConfig, ConfigError> {
    let file = match &args.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };
    resolve_with(args, file)
}

pub fn resolve_with(args: &Args, file: ConfigFile) -> Result<RunConfig, ConfigError> {
    let image = args
        .store
        .image
        .clone()
        .or(file.store.image)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE));
    let region_size = args
        .store
        .region_size
        .or(file.store.region_size)
        .unwrap_or(DEFAULT_REGION_SIZE);
    let schema = args
        .harness
        .schema
        .or(file.harness.schema)
        .unwrap_or(SchemaVersion::V1);
    let iterations = args
        .harness
        .iterations
        .or(file.harness.iterations)
        .unwrap_or(DEFAULT_ITERATIONS);
    let seed = args.harness.seed.or(file.harness.seed);

    if region_size < FOOTER_SIZE {
        return Err(ConfigError::RegionTooSmall {
            size: region_size,
            minimum: FOOTER_SIZE,
        });
    }
    if iterations == 0 && !args.harness.inspect {
        return Err(ConfigError::NoIterations);
    }

    Ok(RunConfig {
        image,
        region_size,
        schema,
        iterations,
        seed,
        inspect: args.harness.inspect,
    })
}
