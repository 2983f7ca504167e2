use std::path::PathBuf;

use structopt::StructOpt;

/// Simulates turmites ("ants") described in an input file: colored, headed
/// automata that walk an infinite grid, rewriting cells under them according
/// to a per-color transition table (their "DNA").
#[derive(StructOpt, Debug)]
pub struct Args {
    /// Path to the input file describing one or more ants.
    pub filename: PathBuf,

    /// Write one PNG per ant to this directory after simulation, as
    /// `ant_<i>.png`. Implies `--simple`.
    #[structopt(short, long = "image_dir")]
    pub image_dir: Option<PathBuf>,

    /// Disable loop detection and fast-forward; every step executes
    /// naively, for the entire requested budget.
    #[structopt(short, long)]
    pub simple: bool,
}

impl Args {
    /// Whether loop detection should run for this invocation.
    pub fn detect_loops(&self) -> bool {
        !self.simple && self.image_dir.is_none()
    }
}
