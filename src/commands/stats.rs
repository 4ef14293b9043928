use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use crate::schema::SchemaVersion;
use crate::settings::{LoadStatus, SaveStatus};

/// Outcome of one load/mutate/save cycle.
#[derive(Debug, Clone, Serialize)]
pub struct CycleStat {
    pub cycle: u32,
    pub load: LoadStatus,
    pub save: SaveStatus,
    /// Footer fields as found after the save, if the footer validates.
    pub data_size: Option<u32>,
    pub data_crc: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub image: PathBuf,
    pub schema: SchemaVersion,
    pub seed: u32,
    pub cycles: Vec<CycleStat>,
    #[serde(skip)]
    pub total_duration: Duration,
}

impl RunStats {
    pub fn new(image: PathBuf, schema: SchemaVersion, seed: u32) -> Self {
        Self {
            image,
            schema,
            seed,
            cycles: Vec::new(),
            total_duration: Duration::ZERO,
        }
    }

    pub fn add_cycle(&mut self, stat: CycleStat) {
        self.cycles.push(stat);
    }

    pub fn loaded(&self) -> usize {
        self.cycles
            .iter()
            .filter(|c| c.load == LoadStatus::Loaded)
            .count()
    }

    pub fn saved(&self) -> usize {
        self.cycles
            .iter()
            .filter(|c| c.save == SaveStatus::Saved)
            .count()
    }
}
