use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for a cube cell in the lattice arena.
    pub struct CellId;
}

/// Classification state of a cube cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not yet classified; sitting on (or headed for) the worklist.
    Unclassified,
    /// Every sample of the solid's predicate was inside. Terminal.
    Inside,
    /// Every sample was outside; the cell is hollow. Terminal.
    Outside,
    /// Replaced by its eight children and no longer a leaf. Terminal.
    Split,
}

/// An axis-aligned cube cell of the lattice.
///
/// `corners` are indexed by offset bit pattern: bit 0 set means the +x
/// side, bit 1 the +y side, bit 2 the +z side. So `corners[0]` is the
/// origin corner, `corners[0b011]` the +xy corner and `corners[0b111]`
/// the far +xyz corner. Corner coordinates strictly increase from
/// origin to far corner along every axis, and the chains between
/// matching corner pairs stay consistent with each other.
#[derive(Debug, Clone)]
pub struct CellData {
    /// The eight corner points, indexed by offset bits.
    pub corners: [PointId; 8],
    /// Current classification state.
    pub state: CellState,
    /// Subdivision depth; the seed cell is at depth 0.
    pub depth: u32,
}

impl CellData {
    /// The origin corner (all-zero offset).
    #[must_use]
    pub fn origin(&self) -> PointId {
        self.corners[0]
    }

    /// The far corner (+xyz offset).
    #[must_use]
    pub fn far_corner(&self) -> PointId {
        self.corners[7]
    }
}
