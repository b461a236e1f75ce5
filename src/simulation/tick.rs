use crate::error::Result;
use crate::vector::Vector;
use crate::world::{Placement, World};
use tracing::{debug, trace};

/// Advance every occupant once, in traversal order.
///
/// Each occupant looks at the world as left by the occupants before it in
/// this same tick, so an earlier mover's new cell is what later ones avoid.
/// A policy proposing a taken cell surfaces as `OccupiedCell`.
pub fn tick(world: &World) -> Result<World> {
    world
        .placements()
        .iter()
        .try_fold(world.clone(), |current, &Placement { x, y, occupant }| {
            let viewpoint = current.viewpoint(x, y);
            trace!(occupant = %occupant.id, visible = viewpoint.len(), "viewpoint");

            let step = occupant.next_move(&viewpoint, &current.limits_from(x, y));
            if step.is_zero() {
                return current.with_occupant_at(occupant, x, y);
            }

            // policies only ever return finite steps
            let (to_x, to_y) = (Vector::new(x, y) + step).components().unwrap_or((x, y));
            debug!(
                occupant = %occupant.id,
                kind = occupant.kind.as_str(),
                from = ?(x, y),
                to = ?(to_x, to_y),
                "move"
            );
            current.with_occupant_at(occupant, to_x, to_y)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupant::{Kind, Occupant};

    fn world(width: u16, height: u16, placements: &[(i32, i32, Occupant)]) -> World {
        World::with_placements(
            width,
            height,
            placements.iter().map(|&(x, y, o)| Placement::new(x, y, o)),
        )
        .expect("valid placements")
    }

    #[test]
    fn test_empty_world_ticks_to_itself() {
        let empty = World::new(4, 4);
        assert_eq!(tick(&empty).unwrap(), empty);
    }

    #[test]
    fn test_humans_stay_put() {
        let start = World::populated_by(3, 3, [Some(Kind::Human), None, Some(Kind::Human)]).unwrap();
        assert_eq!(tick(&start).unwrap(), start);
    }

    #[test]
    fn test_zombie_closes_in_until_adjacent() {
        let zombie = Occupant::zombie(0);
        let human = Occupant::human(1);
        let mut current = world(6, 1, &[(0, 0, zombie), (5, 0, human)]);

        let mut path = Vec::new();
        for _ in 0..6 {
            current = tick(&current).unwrap();
            path.push(current.position_of(zombie.id).unwrap().0);
        }

        assert_eq!(path, vec![1, 2, 3, 4, 4, 4]);
        assert_eq!(current.position_of(human.id), Some((5, 0)));
    }

    #[test]
    fn test_tick_leaves_input_unchanged() {
        let start = world(5, 5, &[(0, 0, Occupant::zombie(0)), (4, 4, Occupant::human(1))]);
        let snapshot = start.clone();
        let next = tick(&start).unwrap();

        assert_eq!(start, snapshot);
        assert_eq!(next.position_of(Occupant::zombie(0).id), Some((1, 1)));
    }

    #[test]
    fn test_blocked_direct_step_falls_back() {
        let a = Occupant::zombie(0);
        let b = Occupant::zombie(1);
        let human = Occupant::human(2);
        let start = world(5, 3, &[(0, 1, a), (1, 1, b), (4, 1, human)]);
        let next = tick(&start).unwrap();

        // a is blocked by b, which has not moved yet, and goes round it
        assert_eq!(next.position_of(a.id), Some((1, 0)));
        assert_eq!(next.position_of(b.id), Some((2, 1)));
    }

    #[test]
    fn test_later_mover_avoids_earlier_move() {
        let a = Occupant::zombie(0);
        let b = Occupant::zombie(1);
        let human = Occupant::human(2);
        let start = world(3, 4, &[(0, 0, a), (2, 0, b), (1, 3, human)]);
        let next = tick(&start).unwrap();

        // both would pick (1, 1); a gets there first
        assert_eq!(next.position_of(a.id), Some((1, 1)));
        assert_eq!(next.position_of(b.id), Some((2, 1)));
    }

    #[test]
    fn test_fallback_never_leaves_grid() {
        let a = Occupant::zombie(0);
        let b = Occupant::zombie(1);
        let human = Occupant::human(2);
        // one column wide: both sideways fallbacks are off the grid
        let start = world(1, 5, &[(0, 0, a), (0, 1, b), (0, 4, human)]);
        let next = tick(&start).unwrap();

        assert_eq!(next.position_of(a.id), Some((0, 0)));
        assert_eq!(next.position_of(b.id), Some((0, 2)));
    }
}
