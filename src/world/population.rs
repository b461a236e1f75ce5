use crate::error::{Result, WorldError};
use crate::occupant::Kind;

/// Endless source of "what goes in the next cell" draws.
///
/// Each draw is independent: a human with `human` probability, a zombie with
/// `zombie` probability, nothing otherwise.
#[derive(Clone, Debug)]
pub struct Population {
    human: f64,
    zombie: f64,
    rng: fastrand::Rng,
}

impl Population {
    pub fn new(human: f64, zombie: f64, rng: fastrand::Rng) -> Result<Self> {
        let valid = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
        if !valid(human) || !valid(zombie) || human + zombie > 1.0 {
            return Err(WorldError::InvalidPopulation { human, zombie });
        }
        Ok(Self { human, zombie, rng })
    }

    /// `density` of cells are occupied; `zombie_chance` of those are zombies
    pub fn from_density(density: f64, zombie_chance: f64, rng: fastrand::Rng) -> Result<Self> {
        Population::new(
            density * (1.0 - zombie_chance),
            density * zombie_chance,
            rng,
        )
    }

    #[inline]
    fn kind_for(&self, draw: f64) -> Option<Kind> {
        if draw < self.human {
            Some(Kind::Human)
        } else if draw < self.human + self.zombie {
            Some(Kind::Zombie)
        } else {
            None
        }
    }
}

impl Iterator for Population {
    type Item = Option<Kind>;

    fn next(&mut self) -> Option<Self::Item> {
        let draw = self.rng.f64();
        Some(self.kind_for(draw))
    }
}
