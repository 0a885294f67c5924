use itertools::Itertools;
use ndarray::Array2;

use crate::cell::{Cell, Tile};
use crate::lattice::Lattice;
use crate::location::{Coord, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The board has no rows, or a row has no cells.
    EmptyGrid,
    /// The board's rows do not all have the same length.
    RaggedGrid,
    /// A target was placed outside the bounds of the doubled lattice.
    FeatureOutOfBounds,
    /// A target was placed on a cell center that can never be lit because it
    /// is closed to placement and holds no block.
    TargetOnClosedCell,
}

/// A builder for [`Lattice`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point. Once a reason for invalidity arises, later
/// calls do nothing and [`build`](Self::build) reports every reason seen.
#[derive(Clone)]
pub struct LatticeBuilder {
    rows: Vec<Vec<Tile>>,
    targets: Vec<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl LatticeBuilder {
    /// Start a builder from the undoubled board rows, top row first.
    ///
    /// May cause the builder to enter an [`EmptyGrid`](BuilderInvalidReason::EmptyGrid)
    /// or [`RaggedGrid`](BuilderInvalidReason::RaggedGrid) invalid state.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let mut invalid_reasons = Vec::new();
        if rows.is_empty() || rows.iter().any(Vec::is_empty) {
            invalid_reasons.push(BuilderInvalidReason::EmptyGrid);
        } else if !rows.iter().map(Vec::len).all_equal() {
            invalid_reasons.push(BuilderInvalidReason::RaggedGrid);
        }

        Self {
            rows,
            targets: Vec::new(),
            invalid_reasons,
        }
    }

    /// Mark a lattice coordinate every solution must illuminate.
    ///
    /// May cause the builder to enter a
    /// [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) or
    /// [`TargetOnClosedCell`](BuilderInvalidReason::TargetOnClosedCell)
    /// invalid state. If the builder is already in an invalid state, this
    /// function does nothing.
    pub fn add_target(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let dims = self.doubled_dims();
        if location.0 >= dims.0 || location.1 >= dims.1 {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        if location.0 % 2 == 1 && location.1 % 2 == 1 {
            let tile = self.rows[(location.1 - 1) / 2][(location.0 - 1) / 2];
            if tile == Tile::Closed {
                self.invalid_reasons.push(BuilderInvalidReason::TargetOnClosedCell);
                return self;
            }
        }

        self.targets.push(location);
        self
    }

    /// Check the validity of this builder, ensuring no
    /// [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        (!self.invalid_reasons.is_empty()).then_some(&self.invalid_reasons)
    }

    /// Convert the state of this builder into a [`Lattice`].
    /// If the builder is invalid for any reason, a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Lattice, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        let dims = self.doubled_dims();
        let cells = Array2::from_shape_fn((dims.1, dims.0), |(y, x)| {
            if x % 2 == 1 && y % 2 == 1 {
                Cell::from(self.rows[(y - 1) / 2][(x - 1) / 2])
            } else {
                // edge midpoints and corners never take blocks
                Cell::Blocked
            }
        });

        Ok(Lattice {
            cells,
            dims,
            targets: self.targets.iter().copied().collect(),
        })
    }

    #[inline]
    fn doubled_dims(&self) -> (Coord, Coord) {
        (self.rows[0].len() * 2 + 1, self.rows.len() * 2 + 1)
    }
}
