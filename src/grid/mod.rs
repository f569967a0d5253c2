use crate::bounds::BoundingBox;
use crate::error::SamplingError;

pub mod d2;
pub mod d3;

/// Background grid used to reject candidates without pairwise distance checks.
///
/// Cells are `separation / sqrt(2)` wide, so two samples that are at least
/// `separation` apart never share a cell. Each cell therefore stores at most one
/// sample index, and a cell is written at most once per sampling run.
pub trait SpatialGrid<const D: usize>: Sized {
    /// Allocates an empty grid covering `bounds` for the given separation distance.
    fn new(bounds: &BoundingBox<D>, separation: f64) -> Result<Self, SamplingError>;

    /// Side length of a cell.
    fn cell_size(&self) -> f64;

    /// Number of cells along each axis.
    fn resolution(&self) -> [usize; D];

    /// Number of cells that hold a sample.
    fn occupied(&self) -> usize;

    /// Maps a position inside the bounds to the coordinates of its cell.
    ///
    /// The position must already be bounds-checked by the caller.
    fn world_to_cell(&self, pos: &[f64; D]) -> [usize; D];

    /// Returns the sample index stored in `cell`, if any. Panics when `cell` is out of range.
    fn get(&self, cell: [usize; D]) -> Option<usize>;

    /// Registers sample `index` in `cell`, which must still be empty.
    fn set(&mut self, index: usize, cell: [usize; D]);

    /// Empties every cell, ready for a new run.
    fn clear(&mut self);

    /// Visits the occupants of all cells within `reach` cells of `cell` along every axis,
    /// skipping `cell` itself and anything outside the grid. Returns `true` as soon as
    /// `predicate` does.
    fn any_neighbor<F>(&self, cell: [usize; D], reach: usize, predicate: F) -> bool
    where
        F: FnMut(usize) -> bool;

    /// Total number of cells.
    fn len(&self) -> usize {
        self.resolution().iter().product()
    }

    /// Number of cells on each side of a cell that can hold a sample closer than `distance`.
    fn neighbor_reach(&self, distance: f64) -> usize {
        (distance / self.cell_size()).ceil() as usize
    }
}

/// Cell side length guaranteeing at most one sample per cell for the given separation.
pub fn cell_size_for(separation: f64) -> f64 {
    separation / std::f64::consts::SQRT_2
}

/// Resolution of a grid over `bounds` with cells of side `cell_size`, together with the
/// total cell count.
pub(crate) fn grid_resolution<const D: usize>(
    bounds: &BoundingBox<D>,
    cell_size: f64,
) -> Result<([usize; D], usize), SamplingError> {
    let extent = bounds.extent();
    let mut res = [1usize; D];
    let mut total = 1usize;
    for a in 0..D {
        let cells = (extent[a] / cell_size).ceil();
        if !cells.is_finite() || cells >= usize::MAX as f64 {
            return Err(SamplingError::GridTooLarge);
        }
        res[a] = (cells as usize).max(1);
        total = total.checked_mul(res[a]).ok_or(SamplingError::GridTooLarge)?;
    }
    let bytes = total
        .checked_mul(std::mem::size_of::<Option<usize>>())
        .ok_or(SamplingError::GridTooLarge)?;
    if bytes > isize::MAX as usize {
        return Err(SamplingError::GridTooLarge);
    }
    Ok((res, total))
}

/// Allocates `total` empty cells, reporting a failed allocation as `GridTooLarge`.
pub(crate) fn empty_cells(total: usize) -> Result<Vec<Option<usize>>, SamplingError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(total)
        .map_err(|_| SamplingError::GridTooLarge)?;
    cells.resize(total, None);
    Ok(cells)
}

/// Cell coordinate along one axis, clamped to the last cell to absorb rounding at the
/// open upper boundary.
#[inline]
pub(crate) fn axis_cell(offset: f64, cell_size: f64, res: usize) -> usize {
    ((offset / cell_size).floor().max(0.0) as usize).min(res - 1)
}

/// Inclusive range of cell indices within `reach` of `center` along an axis of `res` cells.
#[inline]
pub(crate) fn axis_span(center: usize, reach: usize, res: usize) -> std::ops::RangeInclusive<usize> {
    center.saturating_sub(reach)..=(center + reach).min(res - 1)
}
