use strum::VariantArray;

use crate::location::Location;

/// One of the four diagonal directions a ray travels on the doubled lattice.
///
/// Rays always move one unit along both axes per step, so they alternate
/// between vertically- and horizontally-oriented edge midpoints and never
/// occupy a cell center or a lattice corner.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Heading {
    /// Toward decreasing x and decreasing y.
    NorthWest,
    /// Toward increasing x and decreasing y.
    NorthEast,
    /// Toward decreasing x and increasing y.
    SouthWest,
    /// Toward increasing x and increasing y.
    SouthEast,
}

impl Heading {
    /// The `(dx, dy)` step vector of this heading.
    pub fn components(self) -> (isize, isize) {
        match self {
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (1, -1),
            Self::SouthWest => (-1, 1),
            Self::SouthEast => (1, 1),
        }
    }

    /// The heading matching the step vector `components`, if it is one of the
    /// four diagonals. Use this to adopt direction vectors from puzzle input.
    pub fn from_components(components: (isize, isize)) -> Option<Self> {
        Self::VARIANTS.iter().find(|heading| heading.components() == components).copied()
    }

    /// Attempt one step from `location` and return the resultant [`Location`].
    ///
    /// Stepping off the low edge wraps far out of bounds; callers detect this
    /// with a bounds check, never by inspecting the coordinate.
    pub fn attempt_from(self, location: Location) -> Location {
        location.offset_by(self.components())
    }

    pub(crate) fn flip_x(self) -> Self {
        match self {
            Self::NorthWest => Self::NorthEast,
            Self::NorthEast => Self::NorthWest,
            Self::SouthWest => Self::SouthEast,
            Self::SouthEast => Self::SouthWest,
        }
    }

    pub(crate) fn flip_y(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthWest,
            Self::NorthEast => Self::SouthEast,
            Self::SouthWest => Self::NorthWest,
            Self::SouthEast => Self::NorthEast,
        }
    }
}
