use crate::occupant::Occupant;
use crate::vector::Vector;

/// One occupant standing on one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub occupant: Occupant,
}

impl Placement {
    #[inline]
    pub const fn new(x: i32, y: i32, occupant: Occupant) -> Self {
        Self { x, y, occupant }
    }

    /// This placement seen from `(x, y)`
    #[inline]
    pub fn relative_to(&self, x: i32, y: i32) -> ViewpointEntry {
        ViewpointEntry::new(
            Vector::new(self.x, self.y) - Vector::new(x, y),
            self.occupant,
        )
    }
}

/// Another occupant as seen from a query origin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewpointEntry {
    pub offset: Vector,
    pub occupant: Occupant,
}

impl ViewpointEntry {
    #[inline]
    pub const fn new(offset: Vector, occupant: Occupant) -> Self {
        Self { offset, occupant }
    }
}

/// Relative offsets an occupant may step to without leaving the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limits {
    /// Every offset is allowed
    Unlimited,
    /// Half-open box: `min <= offset < max` on each axis
    Bounded {
        min_dx: i32,
        min_dy: i32,
        max_dx: i32,
        max_dy: i32,
    },
}

impl Limits {
    pub const UNLIMITED: Limits = Limits::Unlimited;

    #[inline]
    pub fn contains(&self, offset: Vector) -> bool {
        let Some((dx, dy)) = offset.components() else {
            return false;
        };
        match *self {
            Limits::Unlimited => true,
            Limits::Bounded {
                min_dx,
                min_dy,
                max_dx,
                max_dy,
            } => (min_dx..max_dx).contains(&dx) && (min_dy..max_dy).contains(&dy),
        }
    }
}
