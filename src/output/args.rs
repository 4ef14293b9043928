use std::path::PathBuf;

use clap::Args;

/// Reporting options.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    #[arg(
        long,
        value_name = "FILE",
        help = "Write a JSON report of every cycle to FILE"
    )]
    pub export_json: Option<PathBuf>,

    /// Show a per-cycle table after the run.
    #[arg(long, help = "Show detailed per-cycle statistics")]
    pub stats: bool,

    /// Suppress dumps and summaries; errors are still reported.
    #[arg(short = 'q', long, help = "Suppress all output except errors")]
    pub quiet: bool,
}
