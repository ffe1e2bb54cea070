use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "eventsize",
    version,
    about = "Report per-branch storage footprint of an event data file"
)]
pub struct Cli {
    /// Path to the event data file.
    ///
    /// Kept optional so a missing argument gets its own exit code instead of
    /// the generic usage failure.
    pub data_file: Option<PathBuf>,

    /// Skip loading the optional page index before the size pass
    #[arg(long)]
    pub no_index_load: bool,

    /// Write an SVG histogram of the largest branches to this path
    #[arg(short = 'p', long, value_name = "PATH")]
    pub plot: Option<PathBuf>,

    /// Limit the histogram to the N largest branches
    #[arg(short = 'n', long, value_name = "N", default_value_t = 20)]
    pub plot_top: usize,

    /// Persist the histogram data as JSON to this path
    #[arg(short = 's', long, value_name = "PATH")]
    pub save_histogram: Option<PathBuf>,
}
