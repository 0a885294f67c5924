use crate::element::ElementKind;

/// A cell of the original, undoubled board as handed over by a puzzle parser.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Tile {
    /// Open space where a movable block may be placed.
    #[default]
    Open,
    /// Space where no block may ever be placed.
    Closed,
    /// A block fixed on the board from the start.
    Fixed(ElementKind),
}

/// Marker held at a cell center of the doubled lattice.
///
/// Non-center coordinates carry [`Cell::Blocked`] so that occupancy and
/// placement queries fall through uniformly; only centers ever change.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Cell {
    #[default]
    Empty,
    Blocked,
    Fixed(ElementKind),
    Placed(ElementKind),
}

impl Cell {
    pub(crate) fn occupant(self) -> Option<ElementKind> {
        match self {
            Cell::Fixed(kind) | Cell::Placed(kind) => Some(kind),
            Cell::Empty | Cell::Blocked => None,
        }
    }
}

impl From<Tile> for Cell {
    fn from(value: Tile) -> Self {
        match value {
            Tile::Open => Cell::Empty,
            Tile::Closed => Cell::Blocked,
            Tile::Fixed(kind) => Cell::Fixed(kind),
        }
    }
}
