mod builder;
mod classify;
mod extract;
mod split;

pub use builder::{build_model, ModelBuilder};

use crate::math::Point3f;

/// Parameters controlling mesh quality.
#[derive(Debug, Clone, Copy)]
pub struct MeshParams {
    /// Minimum cell edge length; an ambiguous cell below this size on
    /// every axis is accepted as solid instead of being subdivided.
    pub tolerance: f64,
    /// Optional cap on subdivision depth. `None` leaves subdivision
    /// bounded only by the tolerance.
    pub max_depth: Option<u32>,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            max_depth: None,
        }
    }
}

/// Triangle-soup output of a mesh build.
///
/// Positions are read three at a time as triangles; there is no index
/// buffer, so vertices shared between triangles appear once per use
/// even though the lattice holds them uniquely.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Flat list of triangle vertices, length a multiple of 3.
    pub positions: Vec<Point3f>,
}

impl Model {
    /// Number of triangles in the model.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns true if the model holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub(crate) fn push_triangle(&mut self, a: Point3f, b: Point3f, c: Point3f) {
        self.positions.push(a);
        self.positions.push(b);
        self.positions.push(c);
    }
}
