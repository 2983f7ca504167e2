//! The turmite state machine (§4.1): owns position, heading, step budget, the
//! grid, and the ring of recent snapshots; executes one tick at a time.

use crate::color::ColorId;
use crate::error::SimError;
use crate::grid::{GridStore, Position};
use crate::heading::Heading;
use crate::state::{AntState, StateRing, DEFAULT_RING_CAPACITY};
use crate::transition::TransitionTable;

/// One ant's full mutable state. Every ant starts at the origin facing
/// north, matching the reference implementation.
pub struct Simulator {
    position: Position,
    heading: Heading,
    step_budget: u64,
    max_radius_sq: i64,
    grid: GridStore,
    ring: StateRing,
    table: TransitionTable,
    c0: ColorId,
}

impl Simulator {
    pub fn new(table: TransitionTable, c0: ColorId, step_budget: u64) -> Self {
        Self::with_ring_capacity(table, c0, step_budget, DEFAULT_RING_CAPACITY)
    }

    pub fn with_ring_capacity(
        table: TransitionTable,
        c0: ColorId,
        step_budget: u64,
        ring_capacity: usize,
    ) -> Self {
        let mut grid = GridStore::new();
        // Invariant (§3.2): GridStore[p] is defined for every p the ant has
        // ever occupied, including the origin at t=0, with value C0.
        grid.write((0, 0), c0);

        Self {
            position: (0, 0),
            heading: Heading::N,
            step_budget,
            max_radius_sq: 0,
            grid,
            ring: StateRing::new(ring_capacity),
            table,
            c0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn step_budget(&self) -> u64 {
        self.step_budget
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn ring(&self) -> &StateRing {
        &self.ring
    }

    pub fn c0(&self) -> ColorId {
        self.c0
    }

    /// Directly sets the position and zeroes the remaining budget, without
    /// touching the grid or the ring. Used exclusively by fast-forward
    /// (§4.4), whose whole point is to skip further simulation.
    pub fn fast_forward_to(&mut self, position: Position) {
        self.position = position;
        self.step_budget = 0;
    }

    /// Executes one tick (§4.1). Returns `Err(UnknownColor)` if the current
    /// cell's color has no transition-table entry.
    pub fn step(&mut self) -> Result<(), SimError> {
        let current_color = self.grid.get(self.position).unwrap_or(self.c0);

        let (next_heading, next_color) = self
            .table
            .lookup(current_color, self.heading)
            .ok_or(SimError::UnknownColor(current_color))?;

        self.grid.write(self.position, next_color);

        let (dx, dy) = next_heading.delta();
        self.position = (self.position.0 + dx, self.position.1 + dy);
        self.heading = next_heading;

        let radius_sq = self.position.0 * self.position.0 + self.position.1 * self.position.1;
        self.max_radius_sq = self.max_radius_sq.max(radius_sq);

        self.ring.push(AntState::new(
            next_heading,
            next_color,
            self.max_radius_sq,
            self.position,
        ));
        self.step_budget -= 1;

        Ok(())
    }
}
