use crate::error::{Result, WorldError};
use crate::occupant::{Kind, Occupant, OccupantId};
use crate::simulation;
use crate::world::placement::{Limits, Placement, ViewpointEntry};
use std::collections::{HashMap, HashSet};

/// Head count per kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub humans: usize,
    pub zombies: usize,
}

/// Immutable grid state: dimensions + one placement per occupant.
///
/// Every transition returns a new `World`; the receiver is never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    width: u16,
    height: u16,
    placements: Vec<Placement>,
}

impl World {
    /// Create an empty world
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            placements: Vec::new(),
        }
    }

    /// Create a world from initial placements, checking that each lies on the
    /// grid, no cell is shared and no occupant appears twice
    pub fn with_placements<I>(width: u16, height: u16, placements: I) -> Result<Self>
    where
        I: IntoIterator<Item = Placement>,
    {
        let mut world = World::new(width, height);
        let mut cells: HashMap<(i32, i32), OccupantId> = HashMap::new();
        let mut seen: HashSet<OccupantId> = HashSet::new();

        for placement in placements {
            let Placement { x, y, occupant } = placement;
            world.check_bounds(x, y)?;
            if !seen.insert(occupant.id) {
                return Err(WorldError::DuplicateOccupant(occupant.id));
            }
            if let Some(&holder) = cells.get(&(x, y)) {
                return Err(WorldError::OccupiedCell {
                    occupant: occupant.id,
                    holder,
                    x,
                    y,
                });
            }
            cells.insert((x, y), occupant.id);
            world.placements.push(placement);
        }

        Ok(world)
    }

    /// Fill the grid from a generator, one pull per cell in row-major order
    /// (`y` outer, `x` inner). Ids are handed out in that same order starting
    /// at 0. An exhausted generator leaves the remaining cells empty.
    pub fn populated_by<G>(width: u16, height: u16, generator: G) -> Result<Self>
    where
        G: IntoIterator<Item = Option<Kind>>,
    {
        let cells = (0..i32::from(height)).flat_map(|y| (0..i32::from(width)).map(move |x| (x, y)));

        let mut next_id = 0u32;
        let placements: Vec<Placement> = cells
            .zip(generator)
            .filter_map(|((x, y), kind)| {
                kind.map(|kind| {
                    let occupant = Occupant::new(next_id, kind);
                    next_id += 1;
                    Placement::new(x, y, occupant)
                })
            })
            .collect();

        World::with_placements(width, height, placements)
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether `(x, y)` lies on the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..i32::from(self.width)).contains(&x) && (0..i32::from(self.height)).contains(&y)
    }

    fn check_bounds(&self, x: i32, y: i32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(WorldError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The occupant at `(x, y)`, `None` for an empty cell, `OutOfBounds` off the grid
    pub fn at(&self, x: i32, y: i32) -> Result<Option<Occupant>> {
        self.check_bounds(x, y)?;
        Ok(self.occupant_at(x, y))
    }

    #[inline]
    fn occupant_at(&self, x: i32, y: i32) -> Option<Occupant> {
        self.placements
            .iter()
            .find(|p| p.x == x && p.y == y)
            .map(|p| p.occupant)
    }

    /// Every occupant except the one standing on `(x, y)`, rebased to that origin
    pub fn viewpoint(&self, x: i32, y: i32) -> Vec<ViewpointEntry> {
        self.placements
            .iter()
            .filter(|p| !(p.x == x && p.y == y))
            .map(|p| p.relative_to(x, y))
            .collect()
    }

    /// Offsets from `(x, y)` that land on the grid
    pub fn limits_from(&self, x: i32, y: i32) -> Limits {
        Limits::Bounded {
            min_dx: -x,
            min_dy: -y,
            max_dx: i32::from(self.width) - x,
            max_dy: i32::from(self.height) - y,
        }
    }

    /// A world with `occupant` standing on `(x, y)`.
    ///
    /// Moves the occupant if it is already placed, otherwise adds it. Standing
    /// still is allowed; stepping onto anyone else is `OccupiedCell`.
    pub fn with_occupant_at(&self, occupant: Occupant, x: i32, y: i32) -> Result<World> {
        self.check_bounds(x, y)?;

        match self.occupant_at(x, y) {
            Some(holder) if holder.is(&occupant) => return Ok(self.clone()),
            Some(holder) => {
                return Err(WorldError::OccupiedCell {
                    occupant: occupant.id,
                    holder: holder.id,
                    x,
                    y,
                })
            }
            None => {}
        }

        let mut placements = self.placements.clone();
        match placements.iter_mut().find(|p| p.occupant.is(&occupant)) {
            Some(existing) => *existing = Placement::new(x, y, occupant),
            None => placements.push(Placement::new(x, y, occupant)),
        }

        Ok(World {
            width: self.width,
            height: self.height,
            placements,
        })
    }

    /// Where `id` currently stands
    pub fn position_of(&self, id: OccupantId) -> Option<(i32, i32)> {
        self.placements
            .iter()
            .find(|p| p.occupant.id == id)
            .map(|p| (p.x, p.y))
    }

    /// Placements in traversal order
    #[inline]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Row-major grid: `height` rows of `width` cells
    pub fn rows(&self) -> Vec<Vec<Option<Occupant>>> {
        let mut rows = vec![vec![None; usize::from(self.width)]; usize::from(self.height)];
        for p in &self.placements {
            rows[p.y as usize][p.x as usize] = Some(p.occupant);
        }
        rows
    }

    /// Count humans and zombies
    pub fn census(&self) -> Census {
        self.placements
            .iter()
            .fold(Census::default(), |mut census, p| {
                match p.occupant.kind {
                    Kind::Human => census.humans += 1,
                    Kind::Zombie => census.zombies += 1,
                }
                census
            })
    }

    /// Advance every occupant by one step
    pub fn tick(&self) -> Result<World> {
        simulation::tick(self)
    }
}
