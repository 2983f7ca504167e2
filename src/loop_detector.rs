//! Periodic-behavior detection over a [`StateRing`] (§4.3).

use crate::state::StateRing;

/// Suffix-match: the `L` snapshots ending `steps_back` positions before the
/// newest are pairwise equal, in heading and color (not position — highways
/// translate), to the `L` snapshots that immediately precede them.
pub fn detect_loop(ring: &StateRing, steps_back: isize, l: usize) -> bool {
    let l = l as isize;
    if (ring.len() as isize) < steps_back + 2 * l {
        return false;
    }
    // Indices are negative, counted back from the newest entry.
    let end = -1 - steps_back;
    for i in 0..l {
        let recent = ring.get(end - i);
        let earlier = ring.get(end - l - i);
        if recent.heading() != earlier.heading() || recent.color() != earlier.color() {
            return false;
        }
    }
    true
}

/// Closed-orbit test: the position the ant held `L` steps ago equals the
/// position it held `2L` steps ago.
pub fn detect_stationary(ring: &StateRing, l: usize) -> bool {
    let l = l as isize;
    if ring.len() as isize <= 2 * l {
        return false;
    }
    ring.get(-l).position() == ring.get(-2 * l).position()
}

/// Highway test: an earlier occurrence of the same `L`-motif lay entirely
/// inside a disc strictly smaller than the disc the latest motif lies
/// outside of, proving unbounded outward translation (§4.3.3).
pub fn detect_highway(ring: &StateRing, l: usize) -> bool {
    let len = ring.len();
    if len < 2 * l + 1 {
        return false;
    }
    let l_isize = l as isize;

    let mut latest_min_r2 = i64::MAX;
    for i in 0..l_isize {
        let p = ring.get(-1 - i).position();
        latest_min_r2 = latest_min_r2.min(p.0 * p.0 + p.1 * p.1);
    }

    let mut k = len as isize - l_isize - 1;
    while k > 2 * l_isize {
        let steps_back = len as isize - k;
        if !detect_loop(ring, steps_back, l) {
            break;
        }
        let prev_max_r2 = ring.get(k).max_radius_sq();
        if prev_max_r2 < latest_min_r2 {
            return true;
        }
        k -= l_isize;
    }
    false
}

/// Searches ascending periods for the smallest `L` that is both suffix-matched
/// and proven periodic (stationary or highway). Smallest period wins (§4.3.4).
pub fn find_loops(ring: &StateRing) -> Option<usize> {
    let max_l = ring.len() / 2;
    for l in 1..=max_l {
        if detect_loop(ring, 0, l) && (detect_stationary(ring, l) || detect_highway(ring, l)) {
            return Some(l);
        }
    }
    None
}
