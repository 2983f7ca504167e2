//! Drives one ant to completion: naive stepping interleaved with geometric
//! back-off loop probes, handing off to fast-forward the moment a period is
//! proven (§4.5).

use crate::error::SimError;
use crate::fast_forward;
use crate::loop_detector::find_loops;
use crate::outcome::Outcome;
use crate::simulator::Simulator;

/// Runs `simulator` to budget exhaustion. If `detect_loops` is false (simple
/// mode, §6.2's `-s` flag), probing never runs and every step executes
/// naively.
///
/// Takes `simulator` by unique reference rather than by value so callers that
/// need the grid afterwards (image rendering, §6.2's `-i` flag, which always
/// implies simple mode) can inspect it post-hoc instead of re-simulating the
/// same ant a second time.
pub fn run(simulator: &mut Simulator, detect_loops: bool) -> Outcome {
    if !detect_loops {
        return run_naive(simulator);
    }

    let initial_budget = simulator.step_budget();
    let mut probe_at: i64 = initial_budget as i64 - 1;
    let mut interval: f64 = 2.0;

    while simulator.step_budget() > 0 {
        if probe_at >= 0 && simulator.step_budget() == probe_at as u64 {
            if let Some(l) = find_loops(simulator.ring()) {
                let remaining = simulator.step_budget();
                let position = simulator.position();
                let projected = fast_forward::project(simulator.ring(), position, remaining, l);
                simulator.fast_forward_to(projected);
                return Outcome::FastForwarded {
                    position: projected,
                    period: l,
                };
            }
            interval *= 1.2;
            probe_at = simulator.step_budget() as i64 - interval.floor() as i64;
        }

        if let Err(err) = simulator.step() {
            return Outcome::Failed(err);
        }
    }

    Outcome::Completed {
        position: simulator.position(),
    }
}

fn run_naive(simulator: &mut Simulator) -> Outcome {
    while simulator.step_budget() > 0 {
        if let Err(err) = simulator.step() {
            return Outcome::Failed(err);
        }
    }
    Outcome::Completed {
        position: simulator.position(),
    }
}

/// Convenience wrapper returning just the final position, for callers that
/// don't need the full [`Outcome`] classification (mostly tests).
pub fn run_to_position(simulator: &mut Simulator, detect_loops: bool) -> Result<(i64, i64), SimError> {
    match run(simulator, detect_loops) {
        Outcome::Completed { position } | Outcome::FastForwarded { position, .. } => Ok(position),
        Outcome::Failed(err) => Err(err),
    }
}
