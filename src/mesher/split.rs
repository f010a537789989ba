use crate::error::LatticeError;
use crate::lattice::{Axis, CellId, CellState, Lattice, PointId};

/// Subdivides a cell into its eight octant children.
///
/// Builds the 3x3x3 sub-grid over the cell: the eight corners are
/// reused as-is, while the twelve edge midpoints, six face centers and
/// the cell center are obtained through
/// [`Lattice::find_or_insert_midpoint`], so any of them already created
/// by a previously split neighbor is shared rather than duplicated.
/// Every adjacent pair of the sub-grid ends up linked on its axis.
///
/// The parent is marked [`CellState::Split`]; the child covering the
/// origin octant takes over the origin point's leaf-cell back-reference.
/// Returns the eight children in octant-bit order.
///
/// # Errors
///
/// Returns an error if the cell or one of its points is missing from
/// the arena, or if a chain the midpoint search depends on is broken.
pub(crate) fn split_cell(
    lattice: &mut Lattice,
    cell_id: CellId,
) -> Result<[CellId; 8], LatticeError> {
    let (corners, depth) = {
        let cell = lattice.cell(cell_id)?;
        (cell.corners, cell.depth)
    };

    // Sub-grid point IDs, indexed [x][y][z] with 0 = near face,
    // 1 = midplane, 2 = far face.
    let mut grid = [[[PointId::default(); 3]; 3]; 3];
    for (i, &corner) in corners.iter().enumerate() {
        grid[(i & 1) * 2][(i >> 1 & 1) * 2][(i >> 2 & 1) * 2] = corner;
    }

    // Edge midpoints, found along the cell's existing edge chains.
    for gy in [0, 2] {
        for gz in [0, 2] {
            grid[1][gy][gz] =
                lattice.find_or_insert_midpoint(Axis::X, grid[0][gy][gz], grid[2][gy][gz])?;
        }
    }
    for gx in [0, 2] {
        for gz in [0, 2] {
            grid[gx][1][gz] =
                lattice.find_or_insert_midpoint(Axis::Y, grid[gx][0][gz], grid[gx][2][gz])?;
        }
    }
    for gx in [0, 2] {
        for gy in [0, 2] {
            grid[gx][gy][1] =
                lattice.find_or_insert_midpoint(Axis::Z, grid[gx][gy][0], grid[gx][gy][2])?;
        }
    }

    // Face centers, found between opposite edge midpoints. The chain
    // between two freshly created midpoints does not exist yet, while
    // on a face shared with an already-split neighbor it does, center
    // included; `ensure_linked` bridges only the former case.
    for gz in [0, 2] {
        lattice.ensure_linked(Axis::Y, grid[1][0][gz], grid[1][2][gz])?;
        grid[1][1][gz] = lattice.find_or_insert_midpoint(Axis::Y, grid[1][0][gz], grid[1][2][gz])?;
    }
    for gy in [0, 2] {
        lattice.ensure_linked(Axis::Z, grid[1][gy][0], grid[1][gy][2])?;
        grid[1][gy][1] = lattice.find_or_insert_midpoint(Axis::Z, grid[1][gy][0], grid[1][gy][2])?;
    }
    for gx in [0, 2] {
        lattice.ensure_linked(Axis::Z, grid[gx][1][0], grid[gx][1][2])?;
        grid[gx][1][1] = lattice.find_or_insert_midpoint(Axis::Z, grid[gx][1][0], grid[gx][1][2])?;
    }

    // Cell center, between the two x-face centers. Always fresh: it
    // lies strictly inside this cell, which no neighbor has touched.
    lattice.ensure_linked(Axis::X, grid[0][1][1], grid[2][1][1])?;
    grid[1][1][1] = lattice.find_or_insert_midpoint(Axis::X, grid[0][1][1], grid[2][1][1])?;

    // Wire every remaining adjacent pair of the sub-grid.
    for a in 0..3 {
        for b in 0..3 {
            for i in 0..2 {
                lattice.ensure_linked(Axis::X, grid[i][a][b], grid[i + 1][a][b])?;
                lattice.ensure_linked(Axis::Y, grid[a][i][b], grid[a][i + 1][b])?;
                lattice.ensure_linked(Axis::Z, grid[a][b][i], grid[a][b][i + 1])?;
            }
        }
    }

    // Eight children, octant bits matching the corner-bit convention.
    let mut children = [CellId::default(); 8];
    for (octant, child) in children.iter_mut().enumerate() {
        let (ox, oy, oz) = (octant & 1, octant >> 1 & 1, octant >> 2 & 1);
        let mut child_corners = [PointId::default(); 8];
        for (i, corner) in child_corners.iter_mut().enumerate() {
            *corner = grid[ox + (i & 1)][oy + (i >> 1 & 1)][oz + (i >> 2 & 1)];
        }
        *child = lattice.add_cell(child_corners, depth + 1)?;
    }

    lattice.cell_mut(cell_id)?.state = CellState::Split;
    Ok(children)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    /// Seeds a unit cell spanning `min..min + size` and links its edges.
    fn seed_cell(lattice: &mut Lattice, min: Point3, size: f64) -> CellId {
        let mut corners = [PointId::default(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            let offset = |bit: usize| {
                if i >> bit & 1 == 1 {
                    size
                } else {
                    0.0
                }
            };
            *corner = lattice.add_point(Point3::new(
                min.x + offset(0),
                min.y + offset(1),
                min.z + offset(2),
            ));
        }
        for (axis, bit) in [(Axis::X, 1), (Axis::Y, 2), (Axis::Z, 4)] {
            for i in 0..8 {
                if i & bit == 0 {
                    lattice.link_next(axis, corners[i], corners[i | bit]).unwrap();
                }
            }
        }
        lattice.add_cell(corners, 0).unwrap()
    }

    #[test]
    fn split_produces_27_points_and_8_children() {
        let mut lat = Lattice::new();
        let root = seed_cell(&mut lat, Point3::new(0.0, 0.0, 0.0), 2.0);
        assert_eq!(lat.point_count(), 8);

        let children = split_cell(&mut lat, root).unwrap();

        assert_eq!(lat.point_count(), 27);
        assert_eq!(lat.cell_count(), 9);
        assert_eq!(lat.cell(root).unwrap().state, CellState::Split);
        for child in children {
            assert_eq!(lat.cell(child).unwrap().state, CellState::Unclassified);
            assert_eq!(lat.cell(child).unwrap().depth, 1);
        }
    }

    #[test]
    fn origin_octant_child_reuses_the_parent_origin_point() {
        let mut lat = Lattice::new();
        let root = seed_cell(&mut lat, Point3::new(0.0, 0.0, 0.0), 2.0);
        let parent_origin = lat.cell(root).unwrap().origin();

        let children = split_cell(&mut lat, root).unwrap();

        let first = lat.cell(children[0]).unwrap();
        assert_eq!(first.origin(), parent_origin);
        // The origin point's leaf-cell back-reference moved to the child.
        assert_eq!(lat.point(parent_origin).unwrap().cell, Some(children[0]));
        // The child covers the origin octant only.
        let far = lat.point(first.far_corner()).unwrap().position;
        assert_eq!(far, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn children_have_consistent_extents() {
        let mut lat = Lattice::new();
        let root = seed_cell(&mut lat, Point3::new(-1.0, -1.0, -1.0), 2.0);
        let children = split_cell(&mut lat, root).unwrap();

        for (octant, child) in children.iter().enumerate() {
            let cell = lat.cell(*child).unwrap();
            let min = lat.point(cell.origin()).unwrap().position;
            let max = lat.point(cell.far_corner()).unwrap().position;
            for axis in 0..3 {
                assert!(max[axis] > min[axis]);
                assert!((max[axis] - min[axis] - 1.0).abs() < 1e-12);
                let expect_min = if octant >> axis & 1 == 1 { 0.0 } else { -1.0 };
                assert!((min[axis] - expect_min).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn neighboring_splits_share_midpoints_by_identity() {
        let mut lat = Lattice::new();
        let root = seed_cell(&mut lat, Point3::new(0.0, 0.0, 0.0), 4.0);
        let children = split_cell(&mut lat, root).unwrap();
        assert_eq!(lat.point_count(), 27);

        // Splitting the origin-octant child adds the 19 points of its
        // sub-grid that do not exist yet (its 8 corners do).
        split_cell(&mut lat, children[0]).unwrap();
        assert_eq!(lat.point_count(), 46);

        // Splitting the +x neighbor finds the whole shared face (its 4
        // edge midpoints and center) already present: only 14 new points.
        split_cell(&mut lat, children[1]).unwrap();
        assert_eq!(lat.point_count(), 60);
    }

    #[test]
    fn shared_face_points_are_the_same_handles() {
        let mut lat = Lattice::new();
        let root = seed_cell(&mut lat, Point3::new(0.0, 0.0, 0.0), 4.0);
        let children = split_cell(&mut lat, root).unwrap();
        let left = split_cell(&mut lat, children[0]).unwrap();
        let right = split_cell(&mut lat, children[1]).unwrap();

        // The +x face corners of each left sub-cell are the -x face
        // corners of the matching right sub-cell: same IDs, not copies.
        for octant in [0, 2, 4, 6] {
            let l = lat.cell(left[octant | 1]).unwrap().corners;
            let r = lat.cell(right[octant]).unwrap().corners;
            for i in 0..8 {
                if i & 1 == 1 {
                    assert_eq!(l[i], r[i & !1]);
                }
            }
        }
    }
}
