use std::path::PathBuf;

use clap::Args;

/// Where the emulated flash region lives.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    #[arg(
        short = 'i',
        long,
        value_name = "FILE",
        help = "Flash image file backing the settings region [default: settings.bin]"
    )]
    pub image: Option<PathBuf>,

    #[arg(
        long,
        value_name = "BYTES",
        help = "Size of the settings region in bytes, footer included [default: 4096]"
    )]
    pub region_size: Option<usize>,
}
