use crate::error::LatticeError;
use crate::lattice::{CellData, CellState, Lattice};
use crate::math::{Point3, Point3f};

use super::Model;

/// One of the six faces of a cube cell: the axis it is perpendicular
/// to, whether it is the far side, and its two triangles as corner
/// indices wound counter-clockwise seen from outside the cell.
struct Face {
    axis: usize,
    positive: bool,
    triangles: [usize; 6],
}

const FACES: [Face; 6] = [
    // -x
    Face {
        axis: 0,
        positive: false,
        triangles: [0, 4, 6, 0, 6, 2],
    },
    // +x
    Face {
        axis: 0,
        positive: true,
        triangles: [1, 3, 7, 1, 7, 5],
    },
    // -y
    Face {
        axis: 1,
        positive: false,
        triangles: [0, 1, 5, 0, 5, 4],
    },
    // +y
    Face {
        axis: 1,
        positive: true,
        triangles: [2, 6, 7, 2, 7, 3],
    },
    // -z
    Face {
        axis: 2,
        positive: false,
        triangles: [0, 2, 3, 0, 3, 1],
    },
    // +z
    Face {
        axis: 2,
        positive: true,
        triangles: [4, 5, 7, 4, 7, 6],
    },
];

/// Walks the finished lattice and emits two triangles for every face
/// where a solid cell borders empty space.
///
/// A neighbor is looked up through the lattice topology: on the
/// negative side via the origin corner's `prev` chain link, on the
/// positive side via the corner point spanning that face. A missing
/// neighbor (the lattice boundary) counts as empty, as does any cell
/// not classified solid. Faces between two solid cells are never
/// emitted; hollow cells are never visited.
pub(crate) fn extract_surface(lattice: &Lattice) -> Result<Model, LatticeError> {
    let mut model = Model::default();
    for (_, cell) in lattice.cells() {
        if cell.state != CellState::Inside {
            continue;
        }
        let mut corners = [Point3::origin(); 8];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner = lattice.point(cell.corners[i])?.position;
        }
        for face in &FACES {
            if neighbor_is_solid(lattice, cell, face)? {
                continue;
            }
            for triangle in face.triangles.chunks_exact(3) {
                model.push_triangle(
                    to_f32(&corners[triangle[0]]),
                    to_f32(&corners[triangle[1]]),
                    to_f32(&corners[triangle[2]]),
                );
            }
        }
    }
    Ok(model)
}

fn neighbor_is_solid(
    lattice: &Lattice,
    cell: &CellData,
    face: &Face,
) -> Result<bool, LatticeError> {
    let neighbor = if face.positive {
        // The corner on the far side of this face is the neighbor's
        // origin; its back-reference names the leaf cell there.
        lattice.point(cell.corners[1 << face.axis])?.cell
    } else {
        match lattice.point(cell.origin())?.prev[face.axis] {
            Some(prev) => lattice.point(prev)?.cell,
            None => None,
        }
    };
    match neighbor {
        Some(id) => Ok(lattice.cell(id)?.state == CellState::Inside),
        None => Ok(false),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_f32(point: &Point3) -> Point3f {
    Point3f::new(point.x as f32, point.y as f32, point.z as f32)
}
