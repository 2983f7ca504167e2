//! The structured error taxonomy surfaced to the driver and the CLI (§7, §10.2).

use thiserror::Error;

use crate::color::ColorId;

/// Domain errors the simulation core and its input parser can raise.
///
/// Pairs with `anyhow` at the process boundary (see `main.rs`): the CLI
/// matches on `SimError`'s variants to decide whether a failure is fatal for
/// just the current ant (`UnknownColor`, `MalformedDnaLine`, `GridTooLarge`)
/// or for the whole process (`FileNotFound`, `DirectoryMissing`, `Io`).
#[derive(Debug, Error)]
pub enum SimError {
    /// The ant's current cell holds a color with no transition-table entry.
    #[error("unknown color id {0} has no transition-table entry")]
    UnknownColor(ColorId),

    /// A DNA line was malformed: wrong token count, wrong-length strings, or
    /// a `<dirs>` character outside `{N,E,S,W}`.
    #[error("malformed DNA line: {0}")]
    MalformedDnaLine(String),

    /// The image raster would exceed the configured safety threshold.
    #[error("grid is too large to render: {width}x{height} exceeds the {limit} limit")]
    GridTooLarge { width: u64, height: u64, limit: u64 },

    /// The input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The `-i`/`--image_dir` directory does not exist.
    #[error("no such directory: {0}")]
    DirectoryMissing(String),

    /// Any other I/O failure while reading the input or writing an image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
