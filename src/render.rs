use crate::occupant::{Kind, Occupant};
use crate::world::World;

const EMPTY: &str = ". ";
const HUMAN: &str = "\u{1F468} ";
const ZOMBIE: &str = "\u{1F9DF} ";

/// Turns a world into text, one line per row, two columns per cell
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Glyph for one cell
    #[inline]
    pub fn glyph(cell: Option<&Occupant>) -> &'static str {
        match cell.map(|occupant| occupant.kind) {
            None => EMPTY,
            Some(Kind::Human) => HUMAN,
            Some(Kind::Zombie) => ZOMBIE,
        }
    }

    pub fn lines(&self, world: &World) -> Vec<String> {
        world
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| Self::glyph(cell.as_ref())).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Placement;

    #[test]
    fn test_empty_world() {
        let lines = Renderer::new().lines(&World::new(3, 2));
        assert_eq!(lines, vec![". . . ", ". . . "]);
    }

    #[test]
    fn test_no_rows() {
        assert!(Renderer::new().lines(&World::new(0, 0)).is_empty());
    }

    #[test]
    fn test_occupants() {
        let world = World::with_placements(
            2,
            2,
            [
                Placement::new(1, 0, Occupant::human(0)),
                Placement::new(0, 1, Occupant::zombie(1)),
            ],
        )
        .unwrap();

        assert_eq!(
            Renderer::new().lines(&world),
            vec![". \u{1F468} ".to_string(), "\u{1F9DF} . ".to_string()]
        );
    }
}
