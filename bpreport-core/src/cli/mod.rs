mod aggregate;
mod hint;
mod plot;
mod summary;


pub use aggregate::*;
pub use hint::*;
pub use plot::*;
pub use summary::*;

use clap::Subcommand;
use std::path::PathBuf;

pub const AGGREGATE_USAGE: &str = "Usage: bpreport aggregate <log1> [<log2> ...]";

#[derive(Subcommand, Debug)]
pub enum ReportCmd {
    /// Merge CSV blocks from simulator logs into the canonical results CSV
    Aggregate {
        /// Simulator log files (glob patterns are expanded)
        logs: Vec<PathBuf>,
    },

    /// Render accuracy charts from the canonical results CSV
    Plot,

    /// Print per-scheme geometric mean accuracy
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
