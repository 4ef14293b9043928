pub mod stats;

use std::time::Instant;

use log::info;

use crate::config::RunConfig;
use crate::error::NvsError;
use crate::harness::MutationHarness;
use crate::harness::entropy::OsEntropy;
use crate::output::args::OutputArgs;
use crate::output::report::write_run_report;
use crate::schema::dump::dump;
use crate::schema::{Schema, SchemaVersion, settings_v0, settings_v1};
use crate::settings::SettingsStore;
use crate::storage::ByteStore;
use crate::storage::file::FileStore;
use crate::storage::footer::FooterReport;
use crate::visuals;
use stats::{CycleStat, RunStats};

/// Runs the compatibility loop against the configured image: load, dump,
/// mutate, dump, save, once per iteration.
///
/// Alternating `--schema` between invocations on the same image exercises
/// reading records written by an older or newer schema generation.
pub fn run(config: &RunConfig, output: &OutputArgs) -> Result<RunStats, NvsError> {
    let start_time = Instant::now();

    let store = FileStore::open(&config.image, config.region_size)?;
    let mut settings = SettingsStore::new(store);
    let mut harness = match config.seed {
        Some(seed) => MutationHarness::new(seed),
        None => MutationHarness::from_entropy(&mut OsEntropy),
    };
    info!(
        "running {} cycle(s) on {} with the {} schema, seed 0x{:08X}",
        config.iterations,
        config.image.display(),
        config.schema.label(),
        harness.seed()
    );

    let mut stats = RunStats::new(config.image.clone(), config.schema, harness.seed());
    for cycle in 1..=config.iterations {
        let stat = match config.schema {
            SchemaVersion::V0 => run_cycle::<settings_v0::Settings, _>(
                &mut settings,
                &mut harness,
                cycle,
                output.quiet,
            ),
            SchemaVersion::V1 => run_cycle::<settings_v1::Settings, _>(
                &mut settings,
                &mut harness,
                cycle,
                output.quiet,
            ),
        }
        .map_err(|e| NvsError::InCycle {
            cycle,
            schema: config.schema.label(),
            source: Box::new(e),
        })?;
        stats.add_cycle(stat);
    }

    stats.total_duration = start_time.elapsed();

    if let Some(path) = output.export_json.as_ref() {
        write_run_report(path, &stats)?;
    }

    Ok(stats)
}

/// One load/mutate/save pass over any byte store.
pub fn run_cycle<S: Schema, B: ByteStore>(
    settings: &mut SettingsStore<B>,
    harness: &mut MutationHarness,
    cycle: u32,
    quiet: bool,
) -> Result<CycleStat, NvsError> {
    let (mut record, load) = settings.load::<S>();
    if !quiet {
        visuals::print_cycle_start(cycle, load);
        visuals::print_state("Initial State", &dump(&record)?);
    }

    harness.mutate(&mut record)?;
    if !quiet {
        visuals::print_state("Modified State", &dump(&record)?);
    }

    let save = settings.save(&mut record)?;

    let report = settings.inspect();
    let footer = report.verdict.is_ok().then_some(report.footer).flatten();
    Ok(CycleStat {
        cycle,
        load,
        save,
        data_size: footer.map(|f| f.data_size),
        data_crc: footer.map(|f| f.data_crc),
    })
}

/// Reads the image footer without touching the payload.
pub fn inspect(config: &RunConfig) -> Result<FooterReport, NvsError> {
    let store = FileStore::open(&config.image, config.region_size)?;
    Ok(SettingsStore::new(store).inspect())
}
