//! Analytic projection of an ant's final position once a period is known (§4.4).

use crate::grid::Position;
use crate::state::StateRing;

/// Computes the position the ant would reach after `remaining_budget` more
/// naive steps, given a detected period `l`, without executing them.
///
/// `current_position` is the ant's position at the moment of detection (the
/// newest ring entry). No grid mutation or further ring bookkeeping happens;
/// callers disable image rendering for a fast-forwarded run since the grid is
/// only faithful through the point of detection.
pub fn project(ring: &StateRing, current_position: Position, remaining_budget: u64, l: usize) -> Position {
    let l_i64 = l as i64;
    let extra = (remaining_budget % l as u64) as i64;
    let full = (remaining_budget / l as u64) as i64;

    let newest = ring.get(-1).position();
    let one_period_back = ring.get(-1 - l_i64).position();
    let extra_mark = ring.get(-1 - l_i64 + extra).position();

    let delta_full = (newest.0 - one_period_back.0, newest.1 - one_period_back.1);
    let delta_extra = (extra_mark.0 - one_period_back.0, extra_mark.1 - one_period_back.1);

    (
        current_position.0 + full * delta_full.0 + delta_extra.0,
        current_position.1 + full * delta_full.1 + delta_extra.1,
    )
}
