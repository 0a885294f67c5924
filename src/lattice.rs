use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::cell::Cell;
use crate::element::ElementKind;
use crate::inventory::Inventory;
use crate::location::{Coord, Location};
use crate::solver::{Placement, Solver};
use crate::tracer::Ray;

/// The doubled-resolution board: a `h × w` puzzle grid expands to a
/// `(2h+1) × (2w+1)` lattice whose odd/odd coordinates are cell centers.
///
/// [`Lattice`]s should be built using a [`LatticeBuilder`](crate::builder::LatticeBuilder).
/// The lattice owns every currently standing block, fixed and placed alike;
/// target coordinates are carried alongside the cells and never move.
#[derive(Debug)]
pub struct Lattice {
    pub(crate) cells: Array2<Cell>,
    // width, height of the doubled lattice
    pub(crate) dims: (Coord, Coord),
    pub(crate) targets: HashSet<Location>,
}

impl Lattice {
    /// Width and height of the doubled lattice, in that order.
    pub fn dims(&self) -> (Coord, Coord) {
        self.dims
    }

    /// Whether `position` lies on the lattice.
    pub fn is_inside(&self, position: Location) -> bool {
        position.0 < self.dims.0 && position.1 < self.dims.1
    }

    /// The block standing at `position`, fixed or placed, if any.
    pub fn occupant(&self, position: Location) -> Option<ElementKind> {
        self.cells.get(position.as_index()).copied().and_then(Cell::occupant)
    }

    /// Whether a movable block may go at `position`: inside bounds and an
    /// open cell center.
    pub fn can_place(&self, position: Location) -> bool {
        self.cells.get(position.as_index()) == Some(&Cell::Empty)
    }

    /// Place a movable block of `kind` at `position`.
    /// Returns whether the placement happened; anything but an open cell
    /// center refuses it.
    pub fn place(&mut self, position: Location, kind: ElementKind) -> bool {
        if !self.can_place(position) {
            return false;
        }

        self.cells.index_mut(position.as_index()).assign_elem(Cell::Placed(kind));
        true
    }

    /// Remove the movable block at `position`, restoring the open cell.
    /// Fixed blocks and blocked cells are left untouched.
    pub fn remove(&mut self, position: Location) {
        if let Some(cell) = self.cells.get_mut(position.as_index()) {
            if matches!(cell, Cell::Placed(_)) {
                *cell = Cell::Empty;
            }
        }
    }

    /// Every cell center still open for placement, in row-major order
    /// (increasing y, then increasing x). The search relies on this order
    /// being deterministic.
    pub fn open_cells(&self) -> Vec<Location> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// Whether `position` is a target coordinate.
    pub fn is_target(&self, position: Location) -> bool {
        self.targets.contains(&position)
    }

    /// The coordinates every solution must illuminate.
    pub fn targets(&self) -> &HashSet<Location> {
        &self.targets
    }

    /// Solves this lattice, deferring to a [`Solver`] and returning `self`
    /// with the found placements applied, alongside the placements
    /// themselves.
    ///
    /// `None` is the normal outcome of an exhausted search, not an error.
    pub fn solve(mut self, inventory: Inventory, sources: &[Ray]) -> Option<(Self, Vec<Placement>)> {
        let placements = Solver::new(&mut self, inventory, sources).solve()?;
        for placement in &placements {
            self.place(placement.location, placement.kind);
        }

        Some((self, placements))
    }
}

impl Display for Lattice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.dims.1 * (self.dims.0 + 1));

        for y in 0..self.dims.1 {
            for x in 0..self.dims.0 {
                out.push(if self.targets.contains(&Location(x, y)) {
                    '?'
                } else {
                    match (x % 2, y % 2) {
                        (1, 1) => match self.cells[(y, x)] {
                            Cell::Empty => 'o',
                            Cell::Blocked => 'x',
                            Cell::Fixed(kind) => kind.display(true),
                            Cell::Placed(kind) => kind.display(false),
                        },
                        (0, 0) => '+',
                        (1, 0) => '-',
                        (0, 1) => '|',
                        _ => unreachable!(),
                    }
                });
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
