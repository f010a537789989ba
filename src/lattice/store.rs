use slotmap::SlotMap;

use crate::error::LatticeError;
use crate::math::Point3;

use super::cell::{CellData, CellId, CellState};
use super::point::{LatticePoint, PointId};
use super::Axis;

/// Central arena that owns all lattice points and cube cells.
///
/// Entities reference each other via generational keys, so the
/// neighbor/corner graph carries no raw references. Points are
/// append-only: they are never removed until the whole lattice is
/// dropped after surface extraction.
#[derive(Debug, Default)]
pub struct Lattice {
    points: SlotMap<PointId, LatticePoint>,
    cells: SlotMap<CellId, CellData>,
}

impl Lattice {
    /// Creates a new, empty lattice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an unlinked point at `position` and returns its ID.
    pub fn add_point(&mut self, position: Point3) -> PointId {
        self.points.insert(LatticePoint::new(position))
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn point(&self, id: PointId) -> Result<&LatticePoint, LatticeError> {
        self.points
            .get(id)
            .ok_or(LatticeError::EntityNotFound("point"))
    }

    /// Returns a mutable reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn point_mut(&mut self, id: PointId) -> Result<&mut LatticePoint, LatticeError> {
        self.points
            .get_mut(id)
            .ok_or(LatticeError::EntityNotFound("point"))
    }

    /// Inserts a cell over the given corner points and returns its ID.
    ///
    /// The new cell starts [`CellState::Unclassified`] and becomes the
    /// leaf cell of its origin corner (re-targeting any previous
    /// back-reference, which is exactly what a split wants for the
    /// origin octant child).
    ///
    /// # Errors
    ///
    /// Returns an error if the origin corner is not in the arena.
    pub fn add_cell(&mut self, corners: [PointId; 8], depth: u32) -> Result<CellId, LatticeError> {
        let id = self.cells.insert(CellData {
            corners,
            state: CellState::Unclassified,
            depth,
        });
        self.point_mut(corners[0])?.cell = Some(id);
        Ok(id)
    }

    /// Returns a reference to the cell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn cell(&self, id: CellId) -> Result<&CellData, LatticeError> {
        self.cells
            .get(id)
            .ok_or(LatticeError::EntityNotFound("cell"))
    }

    /// Returns a mutable reference to the cell data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the arena.
    pub fn cell_mut(&mut self, id: CellId) -> Result<&mut CellData, LatticeError> {
        self.cells
            .get_mut(id)
            .ok_or(LatticeError::EntityNotFound("cell"))
    }

    /// Iterates over all cells with their IDs.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &CellData)> {
        self.cells.iter()
    }

    /// Number of points currently in the arena.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cells currently in the arena, split cells included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Splices `to` into the `axis` chain immediately after `from`,
    /// re-wiring `from`'s existing successor (if any) to follow `to`.
    ///
    /// `to` must be unlinked on `axis` and its coordinate must fall
    /// strictly between `from` and `from`'s successor, keeping the
    /// chain strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in the arena.
    pub fn link_next(&mut self, axis: Axis, from: PointId, to: PointId) -> Result<(), LatticeError> {
        let i = axis.index();
        let old_next = self.point(from)?.next[i];
        debug_assert!(self.point(to)?.position[i] > self.point(from)?.position[i]);

        self.point_mut(from)?.next[i] = Some(to);
        {
            let target = self.point_mut(to)?;
            target.prev[i] = Some(from);
            target.next[i] = old_next;
        }
        if let Some(next) = old_next {
            self.point_mut(next)?.prev[i] = Some(to);
        }
        Ok(())
    }

    /// Splices `to` into the `axis` chain immediately before `from`,
    /// re-wiring `from`'s existing predecessor (if any) to precede `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in the arena.
    pub fn link_prev(&mut self, axis: Axis, from: PointId, to: PointId) -> Result<(), LatticeError> {
        let i = axis.index();
        let old_prev = self.point(from)?.prev[i];
        debug_assert!(self.point(to)?.position[i] < self.point(from)?.position[i]);

        self.point_mut(from)?.prev[i] = Some(to);
        {
            let target = self.point_mut(to)?;
            target.next[i] = Some(from);
            target.prev[i] = old_prev;
        }
        if let Some(prev) = old_prev {
            self.point_mut(prev)?.next[i] = Some(to);
        }
        Ok(())
    }

    /// Connects `a -> b` on `axis` if `a` has no successor there yet.
    ///
    /// Unlike [`Lattice::link_next`] this never touches `b`'s far-side
    /// links: `b` may already continue into a previously subdivided
    /// neighbor, and that chain must survive. If `a` already has a
    /// successor, the chain between `a` and `b` exists (possibly
    /// through finer points) and nothing is done.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is not in the arena.
    pub fn ensure_linked(&mut self, axis: Axis, a: PointId, b: PointId) -> Result<(), LatticeError> {
        let i = axis.index();
        if self.point(a)?.next[i].is_none() {
            debug_assert!(self.point(b)?.prev[i].is_none());
            self.point_mut(a)?.next[i] = Some(b);
            self.point_mut(b)?.prev[i] = Some(a);
        }
        Ok(())
    }

    /// Walks the `axis` chain from `start` toward `end` and returns the
    /// point whose `axis` coordinate equals the midpoint of the two,
    /// inserting a fresh one immediately after `start` if no point on
    /// the chain has it.
    ///
    /// Matching uses exact floating-point equality: both sides of a
    /// shared edge or face compute the midpoint from the same two
    /// endpoint coordinates, so reuse sees bit-identical values.
    ///
    /// # Errors
    ///
    /// Returns an error if a point is missing from the arena or the
    /// chain runs off the end before reaching `end`.
    #[allow(clippy::float_cmp)]
    pub fn find_or_insert_midpoint(
        &mut self,
        axis: Axis,
        start: PointId,
        end: PointId,
    ) -> Result<PointId, LatticeError> {
        let i = axis.index();
        let start_pos = self.point(start)?.position;
        let end_coord = self.point(end)?.position[i];
        let mid_coord = start_pos[i] + (end_coord - start_pos[i]) / 2.0;

        let mut cur = start;
        while cur != end {
            let point = self.point(cur)?;
            if point.position[i] == mid_coord {
                return Ok(cur);
            }
            cur = point.next[i].ok_or(LatticeError::BrokenChain { axis })?;
        }

        let mut position = start_pos;
        position[i] = mid_coord;
        let id = self.add_point(position);
        self.link_next(axis, start, id)?;
        Ok(id)
    }
}
