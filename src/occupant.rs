use crate::simulation::pursuit;
use crate::vector::Vector;
use crate::world::{Limits, ViewpointEntry};
use std::fmt;

/// Identity of one occupant, stable across every world it moves through
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u32);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What an occupant is, which decides how it moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Human,
    Zombie,
}

impl Kind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Human => "human",
            Kind::Zombie => "zombie",
        }
    }
}

/// An entity placed on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub id: OccupantId,
    pub kind: Kind,
}

impl Occupant {
    pub const fn new(id: u32, kind: Kind) -> Self {
        Self {
            id: OccupantId(id),
            kind,
        }
    }

    pub const fn human(id: u32) -> Self {
        Self::new(id, Kind::Human)
    }

    pub const fn zombie(id: u32) -> Self {
        Self::new(id, Kind::Zombie)
    }

    /// Living occupants are the ones zombies pursue
    #[inline]
    pub const fn is_alive(&self) -> bool {
        matches!(self.kind, Kind::Human)
    }

    /// Same entity, regardless of where it stands
    #[inline]
    pub fn is(&self, other: &Occupant) -> bool {
        self.id == other.id
    }

    /// Propose a single-step move given what this occupant can see.
    /// `limits` holds the offsets that stay on the grid.
    pub fn next_move(&self, viewpoint: &[ViewpointEntry], limits: &Limits) -> Vector {
        match self.kind {
            Kind::Human => Vector::ZERO,
            Kind::Zombie => pursuit::next_step(viewpoint, limits),
        }
    }
}
