use crate::math::Point3;

use super::cell::CellId;

slotmap::new_key_type! {
    /// Unique identifier for a point in the lattice arena.
    pub struct PointId;
}

/// One grid vertex of the spatial lattice.
///
/// A point sits on up to three axis-aligned chains, one per axis,
/// doubly linked through `next`/`prev`. Chains hold points of one grid
/// line in strictly increasing coordinate order; splitting a cell
/// splices midpoints into them, so two neighboring cells that subdivide
/// independently discover and reuse each other's shared vertices
/// instead of duplicating them.
#[derive(Debug, Clone)]
pub struct LatticePoint {
    /// Position of the vertex.
    pub position: Point3,
    /// Successor on the x, y, z chains.
    pub next: [Option<PointId>; 3],
    /// Predecessor on the x, y, z chains.
    pub prev: [Option<PointId>; 3],
    /// The leaf cell whose origin corner is this point, if any.
    ///
    /// Kept current across splits: when that cell subdivides, the
    /// reference is re-targeted at the child occupying the origin
    /// octant.
    pub cell: Option<CellId>,
}

impl LatticePoint {
    /// Creates an unlinked point at `position`.
    #[must_use]
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            next: [None; 3],
            prev: [None; 3],
            cell: None,
        }
    }
}
