use crate::element::ElementKind;

/// Remaining movable block counts, one per [`ElementKind`].
///
/// Only the placement search mutates an inventory, decrementing on placement
/// and restoring on backtrack; the tracer never touches it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Inventory {
    reflect: usize,
    opaque: usize,
    refract: usize,
}

impl Inventory {
    /// An inventory holding the given number of reflect, opaque, and refract
    /// blocks.
    pub fn new(reflect: usize, opaque: usize, refract: usize) -> Self {
        Self { reflect, opaque, refract }
    }

    /// Remaining count of `kind`.
    pub fn count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Reflect => self.reflect,
            ElementKind::Opaque => self.opaque,
            ElementKind::Refract => self.refract,
        }
    }

    /// Total blocks still unplaced.
    pub fn remaining(&self) -> usize {
        self.reflect + self.opaque + self.refract
    }

    /// True once every block has been placed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn take(&mut self, kind: ElementKind) -> bool {
        let slot = self.slot(kind);
        if *slot == 0 {
            return false;
        }

        *slot -= 1;
        true
    }

    pub(crate) fn put_back(&mut self, kind: ElementKind) {
        *self.slot(kind) += 1;
    }

    fn slot(&mut self, kind: ElementKind) -> &mut usize {
        match kind {
            ElementKind::Reflect => &mut self.reflect,
            ElementKind::Opaque => &mut self.opaque,
            ElementKind::Refract => &mut self.refract,
        }
    }
}
