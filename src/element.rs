use strum::VariantArray;

use crate::heading::Heading;
use crate::location::Location;

/// The three optical block types.
///
/// Declaration order is also the fixed order in which the placement search
/// tries each kind at a cell.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum ElementKind {
    /// Bounces a ray off the struck face.
    Reflect,
    /// Swallows any ray that strikes it.
    Opaque,
    /// Lets the ray pass through and emits a reflected copy from the same point.
    Refract,
}

impl ElementKind {
    /// Display letter, following the `A`/`B`/`C` convention of the puzzle
    /// file format; placed blocks render in lowercase.
    pub(crate) fn display(self, fixed: bool) -> char {
        let letter = match self {
            Self::Reflect => 'A',
            Self::Opaque => 'B',
            Self::Refract => 'C',
        };
        if fixed { letter } else { letter.to_ascii_lowercase() }
    }

    /// Resolve a ray striking `face` of a block of this kind while traveling
    /// along `heading`. Pure; the lattice is not consulted.
    pub(crate) fn interact(self, face: Face, heading: Heading) -> Interaction {
        match self {
            Self::Opaque => Interaction::Absorb,
            Self::Reflect => Interaction::Deflect(face.reflect(heading)),
            Self::Refract => Interaction::Split(heading, face.reflect(heading)),
        }
    }
}

/// Which kind of face an edge midpoint adjoins, classified by parity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Face {
    /// A left or right face; the midpoint's x axis is even.
    Vertical,
    /// A top or bottom face; the midpoint's y axis is even.
    Horizontal,
}

impl Face {
    /// Classify `position`. Cell centers and lattice corners adjoin no face
    /// and yield `None`.
    pub(crate) fn of(position: Location) -> Option<Self> {
        match (position.0 % 2, position.1 % 2) {
            (0, 1) => Some(Self::Vertical),
            (1, 0) => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// Mirror `heading` across this face: a vertical face negates the x
    /// component, a horizontal face the y component. Applying the same face
    /// twice restores the original heading.
    pub(crate) fn reflect(self, heading: Heading) -> Heading {
        match self {
            Self::Vertical => heading.flip_x(),
            Self::Horizontal => heading.flip_y(),
        }
    }
}

/// Outcome of one ray/block interaction.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Interaction {
    Absorb,
    Deflect(Heading),
    Split(Heading, Heading),
}
