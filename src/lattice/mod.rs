pub mod cell;
pub mod point;
pub mod store;

pub use cell::{CellData, CellId, CellState};
pub use point::{LatticePoint, PointId};
pub use store::Lattice;

/// One of the three coordinate axes of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis into coordinate and link arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}
