use std::path::PathBuf;

use crate::harness::args::HarnessArgs;
use crate::output::args::OutputArgs;
use crate::storage::args::StoreArgs;
use clap::Parser;

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Load, mutate and save checksummed settings in an emulated flash region",
    after_help = "Run with one --schema, then another, on the same --image to check that records survive schema changes."
)]
pub struct Args {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "TOML file with [store] and [harness] defaults"
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,

    #[command(flatten)]
    pub harness: HarnessArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
