use crate::error::{Result, WorldError};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Relative offset between two cells, or "unreachable" when nothing is in view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vector(Repr);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Repr {
    Offset { dx: i32, dy: i32 },
    Unreachable,
}

impl Vector {
    /// No movement
    pub const ZERO: Vector = Vector::new(0, 0);

    /// Farther than every finite vector; absorbs under `+` and `-`
    pub const UNREACHABLE: Vector = Vector(Repr::Unreachable);

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Vector(Repr::Offset { dx, dy })
    }

    /// Build a vector from optional axes, refusing to default a missing one to zero
    pub fn from_axes(dx: Option<i32>, dy: Option<i32>) -> Result<Self> {
        match (dx, dy) {
            (Some(dx), Some(dy)) => Ok(Vector::new(dx, dy)),
            (None, _) => Err(WorldError::InvalidVector("missing dx".to_string())),
            (_, None) => Err(WorldError::InvalidVector("missing dy".to_string())),
        }
    }

    /// `(dx, dy)` for a finite vector
    #[inline]
    pub const fn components(self) -> Option<(i32, i32)> {
        match self.0 {
            Repr::Offset { dx, dy } => Some((dx, dy)),
            Repr::Unreachable => None,
        }
    }

    #[inline]
    pub const fn is_reachable(self) -> bool {
        matches!(self.0, Repr::Offset { .. })
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self.0, Repr::Offset { dx: 0, dy: 0 })
    }

    /// Squared Euclidean length, used only to rank vectors against each other.
    /// `UNREACHABLE` ranks as `u64::MAX`, above any finite vector.
    #[inline]
    pub fn distance(self) -> u64 {
        match self.0 {
            Repr::Offset { dx, dy } => {
                let (dx, dy) = (u64::from(dx.unsigned_abs()), u64::from(dy.unsigned_abs()));
                dx * dx + dy * dy
            }
            Repr::Unreachable => u64::MAX,
        }
    }

    /// Chess-board length: the number of single-cell steps, diagonals included
    #[inline]
    pub fn chebyshev(self) -> Option<u32> {
        self.components()
            .map(|(dx, dy)| dx.unsigned_abs().max(dy.unsigned_abs()))
    }

    /// Per-axis sign, giving the unit step toward this offset
    #[inline]
    pub fn signum(self) -> Vector {
        match self.0 {
            Repr::Offset { dx, dy } => Vector::new(dx.signum(), dy.signum()),
            Repr::Unreachable => self,
        }
    }

    fn combine(self, other: Vector, op: fn(i32, i32) -> Option<i32>) -> Vector {
        match (self.0, other.0) {
            (Repr::Offset { dx: ax, dy: ay }, Repr::Offset { dx: bx, dy: by }) => {
                match (op(ax, bx), op(ay, by)) {
                    (Some(dx), Some(dy)) => Vector::new(dx, dy),
                    // an offset past the coordinate range can never be stepped to
                    _ => Vector::UNREACHABLE,
                }
            }
            _ => Vector::UNREACHABLE,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        self.combine(other, i32::checked_add)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        self.combine(other, i32::checked_sub)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Repr::Offset { dx, dy } => write!(f, "({}, {})", dx, dy),
            Repr::Unreachable => f.write_str("(unreachable)"),
        }
    }
}

impl FromStr for Vector {
    type Err = WorldError;

    /// Parses `"dx,dy"` or `"(dx, dy)"`
    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let mut parts = inner.split(',');

        let axis = |part: Option<&str>, name: &str| -> Result<Option<i32>> {
            match part.map(str::trim) {
                None | Some("") => Ok(None),
                Some(raw) => raw.parse().map(Some).map_err(|_| {
                    WorldError::InvalidVector(format!("{} is not an integer: {:?}", name, raw))
                }),
            }
        };

        let dx = axis(parts.next(), "dx")?;
        let dy = axis(parts.next(), "dy")?;
        if parts.next().is_some() {
            return Err(WorldError::InvalidVector(format!("too many axes in {:?}", s)));
        }
        Vector::from_axes(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Vector::new(1, -2);
        let b = Vector::new(3, 4);

        assert_eq!(a + b, Vector::new(4, 2));
        assert_eq!(b - a, Vector::new(2, 6));
        assert_eq!(a + Vector::ZERO, a);
    }

    #[test]
    fn test_distance_is_squared_euclidean() {
        assert_eq!(Vector::ZERO.distance(), 0);
        assert_eq!(Vector::new(2, 2).distance(), 8);
        assert_eq!(Vector::new(-3, 3).distance(), 18);
        assert_eq!(Vector::new(3, -3).distance(), 18);
    }

    #[test]
    fn test_unreachable_is_farthest() {
        let far = Vector::new(i32::MAX, i32::MIN);
        assert!(far.distance() < Vector::UNREACHABLE.distance());
        assert!(!Vector::UNREACHABLE.is_reachable());
        assert_eq!(Vector::UNREACHABLE.chebyshev(), None);
    }

    #[test]
    fn test_unreachable_absorbs() {
        let v = Vector::new(5, -7);

        assert_eq!(Vector::UNREACHABLE + v, Vector::UNREACHABLE);
        assert_eq!(v + Vector::UNREACHABLE, Vector::UNREACHABLE);
        assert_eq!(Vector::UNREACHABLE - v, Vector::UNREACHABLE);
        assert_eq!(v - Vector::UNREACHABLE, Vector::UNREACHABLE);
    }

    #[test]
    fn test_chebyshev_and_signum() {
        assert_eq!(Vector::new(1, 1).chebyshev(), Some(1));
        assert_eq!(Vector::new(-4, 2).chebyshev(), Some(4));
        assert_eq!(Vector::new(-4, 0).signum(), Vector::new(-1, 0));
        assert_eq!(Vector::new(7, -9).signum(), Vector::new(1, -1));
    }

    #[test]
    fn test_from_axes_rejects_missing_axis() {
        assert_eq!(Vector::from_axes(Some(1), Some(0)), Ok(Vector::new(1, 0)));
        assert!(matches!(
            Vector::from_axes(None, Some(0)),
            Err(WorldError::InvalidVector(_))
        ));
        assert!(matches!(
            Vector::from_axes(Some(0), None),
            Err(WorldError::InvalidVector(_))
        ));
    }

    #[test]
    fn test_parse() {
        assert_eq!("2,-3".parse::<Vector>(), Ok(Vector::new(2, -3)));
        assert_eq!(" (-1, 4) ".parse::<Vector>(), Ok(Vector::new(-1, 4)));

        for bad in ["", "3", "3,", ",3", "a,1", "1,2,3"] {
            assert!(
                matches!(bad.parse::<Vector>(), Err(WorldError::InvalidVector(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(1, -1).to_string(), "(1, -1)");
        assert_eq!(Vector::UNREACHABLE.to_string(), "(unreachable)");
    }
}
