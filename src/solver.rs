use strum::VariantArray;

use crate::element::ElementKind;
use crate::inventory::Inventory;
use crate::lattice::Lattice;
use crate::location::Location;
use crate::tracer::{Ray, Tracer};

/// One movable block assignment in a solution.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// Which block to place.
    pub kind: ElementKind,
    /// The cell center it goes on.
    pub location: Location,
}

/// Depth-first backtracking search over movable block placements, with a
/// [`Tracer`] as its oracle.
///
/// Open cells are decided in the lattice's deterministic row-major order;
/// at each cell the kinds are tried in [`ElementKind`] declaration order,
/// then the cell is left empty. Only fully decided candidates that exhaust
/// the inventory are traced, so the first solution returned is the least in
/// lexicographic (cell order × kind order) terms. The tracer runs only at
/// those leaves; pulling coverage checks further up the tree would be an
/// optimization, not a behavior change.
pub struct Solver<'a> {
    lattice: &'a mut Lattice,
    sources: &'a [Ray],
    inventory: Inventory,
}

impl<'a> Solver<'a> {
    /// A solver for `lattice`, placing blocks drawn from `inventory` so that
    /// the rays from `sources` cover every target.
    pub fn new(lattice: &'a mut Lattice, inventory: Inventory, sources: &'a [Ray]) -> Self {
        Self { lattice, sources, inventory }
    }

    /// Find the first satisfying full assignment, or `None` once the whole
    /// placement space is exhausted. `None` is an expected outcome, not an
    /// error.
    ///
    /// Every placement is undone on the way back regardless of outcome: the
    /// lattice is returned to its pre-search state even when a solution is
    /// found (the solution is captured before unwinding).
    pub fn solve(mut self) -> Option<Vec<Placement>> {
        let open_cells = self.lattice.open_cells();
        let mut trail = Vec::with_capacity(self.inventory.remaining());
        let solution = self.descend(&open_cells, &mut trail);

        match &solution {
            Some(placements) => log::debug!("satisfying assignment of {} block(s)", placements.len()),
            None => log::debug!("placement space exhausted without a solution"),
        }

        solution
    }

    fn descend(&mut self, open_cells: &[Location], trail: &mut Vec<Placement>) -> Option<Vec<Placement>> {
        let Some((&at, rest)) = open_cells.split_first() else {
            // fully decided; only candidates that used the whole inventory count
            if !self.inventory.is_exhausted() {
                return None;
            }

            log::trace!("tracing candidate {:?}", trail);
            let report = Tracer::from(&*self.lattice).run(self.sources);
            return report.covers(self.lattice.targets()).then(|| trail.clone());
        };

        // a branch whose open cells cannot absorb the remaining inventory is dead
        if self.inventory.remaining() > open_cells.len() {
            return None;
        }

        for &kind in ElementKind::VARIANTS {
            if !self.inventory.take(kind) {
                continue;
            }

            self.lattice.place(at, kind);
            trail.push(Placement { kind, location: at });

            let solution = self.descend(rest, trail);

            trail.pop();
            self.lattice.remove(at);
            self.inventory.put_back(kind);

            if solution.is_some() {
                return solution;
            }
        }

        // leave this cell empty
        self.descend(rest, trail)
    }
}
