use clap::Parser;
use env_logger::{Builder, Env};

use nvsettings::args::Args;
use nvsettings::commands;
use nvsettings::config;
use nvsettings::error::NvsError;
use nvsettings::visuals;

fn main() -> Result<(), NvsError> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = config::resolve(&args)?;

    if config.inspect {
        let report = commands::inspect(&config)?;
        visuals::print_footer(&report);
        return Ok(());
    }

    let stats = commands::run(&config, &args.output)?;

    if !args.output.quiet {
        if args.output.stats {
            visuals::print_detailed(&stats);
        } else {
            visuals::print_summary(&stats);
        }
    }

    Ok(())
}
