use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{MeshError, Result};
use crate::lattice::{Axis, CellId, CellState, Lattice, PointId};
use crate::math::{Aabb, Point3};
use crate::solid::Solid;

use super::classify::{classify_span, Classification};
use super::extract::extract_surface;
use super::split::split_cell;
use super::{MeshParams, Model};

/// Builds a triangle-soup [`Model`] approximating the boundary of an
/// implicit solid.
///
/// One cube cell spanning the solid's bounding box is subdivided
/// adaptively: a cell whose samples disagree about being inside the
/// solid is split into eight children until every cell is uniformly
/// classified or smaller than the tolerance. Faces are then emitted
/// wherever a solid cell meets empty space.
pub struct ModelBuilder<'a> {
    solid: &'a Solid,
    params: MeshParams,
}

impl<'a> ModelBuilder<'a> {
    /// Creates a builder for `solid` with default parameters.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self {
            solid,
            params: MeshParams::default(),
        }
    }

    /// Replaces the mesh parameters.
    #[must_use]
    pub fn with_params(mut self, params: MeshParams) -> Self {
        self.params = params;
        self
    }

    /// Runs the build to completion and returns the extracted surface.
    ///
    /// The whole build is synchronous and single-threaded; the lattice
    /// lives only for this call. The solid is never mutated, so one
    /// tree may serve several concurrent builds.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive or the solid's
    /// bounding box is degenerate; lattice errors beyond that indicate
    /// a bug rather than bad input.
    pub fn build(&self) -> Result<Model> {
        let lattice = self.build_lattice()?;
        let model = extract_surface(&lattice)?;
        debug!(
            "meshed solid: {} lattice points, {} cells, {} triangles",
            lattice.point_count(),
            lattice.cell_count(),
            model.triangle_count()
        );
        Ok(model)
    }

    /// Runs classification and subdivision to a fixed point, leaving
    /// every cell Inside, Outside or Split.
    fn build_lattice(&self) -> Result<Lattice> {
        if self.params.tolerance <= 0.0 {
            return Err(MeshError::InvalidTolerance(self.params.tolerance).into());
        }
        let bbox = self.solid.bbox();
        if bbox.is_degenerate() {
            return Err(MeshError::DegenerateBoundingBox {
                min: bbox.min.coords.into(),
                max: bbox.max.coords.into(),
            }
            .into());
        }

        let mut lattice = Lattice::new();
        let root = seed_cell(&mut lattice, &bbox)?;

        // Worklist of unclassified cells. Splitting pushes the eight
        // children; each split halves every edge, so the queue drains
        // after at most log2(extent / tolerance) generations.
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            let (min, max, depth) = {
                let cell = lattice.cell(id)?;
                if cell.state != CellState::Unclassified {
                    continue;
                }
                (
                    lattice.point(cell.origin())?.position,
                    lattice.point(cell.far_corner())?.position,
                    cell.depth,
                )
            };

            match classify_span(self.solid, &min, &max) {
                Classification::Inside => lattice.cell_mut(id)?.state = CellState::Inside,
                Classification::Outside => lattice.cell_mut(id)?.state = CellState::Outside,
                Classification::Mixed => {
                    let extent = max - min;
                    let below_tolerance = (0..3).all(|i| extent[i] < self.params.tolerance);
                    let at_depth_cap = self.params.max_depth.is_some_and(|cap| depth >= cap);
                    if below_tolerance || at_depth_cap {
                        // Termination guard: accept the ambiguous cell
                        // as solid rather than subdividing forever.
                        lattice.cell_mut(id)?.state = CellState::Inside;
                    } else {
                        trace!("splitting cell at depth {depth}, min {min:?}");
                        let children = split_cell(&mut lattice, id)?;
                        queue.extend(children);
                    }
                }
            }
        }

        Ok(lattice)
    }
}

/// Seeds the lattice with one cell spanning `bbox`: eight corner points
/// linked along all twelve edges.
fn seed_cell(lattice: &mut Lattice, bbox: &Aabb) -> Result<CellId> {
    let mut corners = [PointId::default(); 8];
    for (i, corner) in corners.iter_mut().enumerate() {
        let pick = |bit: usize| {
            if i >> bit & 1 == 1 {
                bbox.max[bit]
            } else {
                bbox.min[bit]
            }
        };
        *corner = lattice.add_point(Point3::new(pick(0), pick(1), pick(2)));
    }
    for (axis, bit) in [(Axis::X, 1usize), (Axis::Y, 2), (Axis::Z, 4)] {
        for i in 0..8 {
            if i & bit == 0 {
                lattice.link_next(axis, corners[i], corners[i | bit])?;
            }
        }
    }
    Ok(lattice.add_cell(corners, 0)?)
}

/// Builds a triangle-soup model of `solid` with default parameters.
///
/// This is the single entry point for callers that do not need to tune
/// the tolerance; the solid is taken by reference and read only.
///
/// # Errors
///
/// Returns an error if the solid's bounding box is degenerate.
pub fn build_model(solid: &Solid) -> Result<Model> {
    ModelBuilder::new(solid).build()
}
