//! Zombie movement: close in on the nearest living occupant one cell at a time.

use crate::vector::Vector;
use crate::world::{Limits, ViewpointEntry};

/// Offset of the nearest living occupant, or `Vector::UNREACHABLE` if none is
/// in view. Ties go to whichever entry comes first.
pub fn nearest_target(viewpoint: &[ViewpointEntry]) -> Vector {
    viewpoint
        .iter()
        .filter(|entry| entry.occupant.is_alive())
        .map(|entry| entry.offset)
        .fold(Vector::UNREACHABLE, |nearest, offset| {
            if offset.distance() < nearest.distance() {
                offset
            } else {
                nearest
            }
        })
}

/// Within the 3x3 block around the zombie
#[inline]
pub fn in_biting_range(offset: Vector) -> bool {
    matches!(offset.chebyshev(), Some(reach) if reach <= 1)
}

/// Single-cell moves toward `target`, most direct first
pub fn candidates(target: Vector) -> [Vector; 3] {
    let (step_x, step_y) = target.signum().components().unwrap_or((0, 0));

    if step_x == 0 {
        [
            Vector::new(0, step_y),
            Vector::new(-1, step_y),
            Vector::new(1, step_y),
        ]
    } else if step_y == 0 {
        [
            Vector::new(step_x, 0),
            Vector::new(step_x, -1),
            Vector::new(step_x, 1),
        ]
    } else {
        [
            Vector::new(step_x, step_y),
            Vector::new(0, step_y),
            Vector::new(step_x, 0),
        ]
    }
}

/// Pick this tick's step for a zombie.
///
/// Stays put when nothing living is in view or the nearest target is already
/// adjacent. Otherwise takes the first candidate that is on the grid and not
/// occupied; stays put if all three are blocked.
pub fn next_step(viewpoint: &[ViewpointEntry], limits: &Limits) -> Vector {
    let target = nearest_target(viewpoint);
    if !target.is_reachable() || in_biting_range(target) {
        return Vector::ZERO;
    }

    candidates(target)
        .into_iter()
        .find(|&step| limits.contains(step) && !viewpoint.iter().any(|entry| entry.offset == step))
        .unwrap_or(Vector::ZERO)
}
