//! Per-step snapshots and the bounded ring buffer the detector reads from.

use bytemuck::{Pod, Zeroable};

use crate::color::ColorId;
use crate::grid::Position;
use crate::heading::Heading;

/// The recommended window size `W` from §3: bounds both memory and the
/// largest detectable period (`W / 2`).
pub const DEFAULT_RING_CAPACITY: usize = 100_000;

/// One per executed step, recorded *after* the step (§3, resolved open
/// question in §9): the heading after the step, the color just written to
/// the departed cell, the position now occupied, and the running maximum of
/// `x² + y²`.
///
/// Laid out as a flat, `bytemuck`-derived POD value (all fields widened to
/// `u64`/`i64` so the struct has no padding) so [`StateRing`]'s backing store
/// is a single `Vec<AntState>` circular buffer with no per-push allocation,
/// per the §9 design note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct AntState {
    heading_raw: u64,
    color_raw: u64,
    max_radius_sq: u64,
    x: i64,
    y: i64,
}

impl AntState {
    pub fn new(heading: Heading, color: ColorId, max_radius_sq: i64, position: Position) -> Self {
        Self {
            heading_raw: heading.index() as u64,
            color_raw: color.0 as u64,
            max_radius_sq: max_radius_sq as u64,
            x: position.0,
            y: position.1,
        }
    }

    pub fn heading(&self) -> Heading {
        Heading::from_index(self.heading_raw as usize)
    }

    pub fn color(&self) -> ColorId {
        ColorId(self.color_raw as u16)
    }

    pub fn max_radius_sq(&self) -> i64 {
        self.max_radius_sq as i64
    }

    pub fn position(&self) -> Position {
        (self.x, self.y)
    }
}

/// A FIFO with fixed capacity `W`. Oldest entries are silently discarded once
/// full. Supports Python-style negative indexing from the newest entry, which
/// is how the loop detector (§4.3) addresses it.
pub struct StateRing {
    capacity: usize,
    /// Backing storage, in chronological order (oldest first) for the
    /// entries currently retained.
    data: Vec<AntState>,
    /// Index into `data` (mod capacity) of the oldest retained entry, once
    /// the ring has wrapped. Before wrapping, `data` is simply appended to
    /// and `start` stays 0.
    start: usize,
}

impl StateRing {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be positive");
        Self {
            capacity,
            data: Vec::with_capacity(capacity.min(1024)),
            start: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, state: AntState) {
        if self.data.len() < self.capacity {
            self.data.push(state);
        } else {
            self.data[self.start] = state;
            self.start = (self.start + 1) % self.capacity;
        }
    }

    /// Python-style indexing: `i >= 0` counts from the oldest retained entry,
    /// `i < 0` counts from the newest (`-1` is the newest).
    pub fn get(&self, i: isize) -> AntState {
        let len = self.data.len() as isize;
        let logical = if i < 0 { len + i } else { i };
        assert!(
            logical >= 0 && logical < len,
            "ring index {} out of bounds (len {})",
            i,
            len
        );
        let physical = (self.start + logical as usize) % self.capacity.max(1);
        // Before the ring has wrapped, `start` is 0 and `data.len() <
        // capacity`, so `physical` is already a valid index into `data`.
        // After wrapping, `data.len() == capacity` and the modulo above maps
        // every logical index into the occupied range.
        self.data[physical]
    }
}
