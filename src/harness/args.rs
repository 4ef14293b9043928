use clap::Args;

use crate::schema::SchemaVersion;

/// Compatibility harness options.
#[derive(Args, Debug, Clone, Default)]
pub struct HarnessArgs {
    #[arg(
        short = 's',
        long,
        value_enum,
        help = "Settings schema generation to load, mutate and save with [default: v1]"
    )]
    pub schema: Option<SchemaVersion>,

    #[arg(
        short = 'n',
        long,
        value_name = "N",
        help = "Number of load/mutate/save cycles to run [default: 1]"
    )]
    pub iterations: Option<u32>,

    #[arg(
        long,
        value_name = "SEED",
        help = "Fixed mutation seed; random when omitted"
    )]
    pub seed: Option<u32>,

    #[arg(long, help = "Only report the stored footer; do not load, mutate or save")]
    pub inspect: bool,
}
