use crate::bounds::BoundingBox;
use crate::error::SamplingError;
use crate::grid::{axis_cell, axis_span, cell_size_for, empty_cells, grid_resolution, SpatialGrid};

/// A background grid for 2D sampling.
///
/// Cells are stored row-major: cell `(x, y)` lives at `x + y * grid_res_x`.
pub struct Grid2D {
    /// Number of cells along the X axis.
    pub grid_res_x: usize,
    /// Number of cells along the Y axis.
    pub grid_res_y: usize,
    /// Side length of a cell.
    pub cell_size: f64,
    /// Minimum X coordinate of the grid bounds.
    pub min_x: f64,
    /// Minimum Y coordinate of the grid bounds.
    pub min_y: f64,
    /// The cells, each holding the index of at most one sample.
    pub cells: Vec<Option<usize>>,
    occupied: usize,
}

impl Grid2D {
    #[inline]
    fn cell_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.grid_res_x && y < self.grid_res_y, "cell ({}, {}) out of range", x, y);
        x + y * self.grid_res_x
    }
}

impl SpatialGrid<2> for Grid2D {
    fn new(bounds: &BoundingBox<2>, separation: f64) -> Result<Self, SamplingError> {
        let cell_size = cell_size_for(separation);
        let ([nx, ny], total) = grid_resolution(bounds, cell_size)?;

        Ok(Grid2D {
            grid_res_x: nx,
            grid_res_y: ny,
            cell_size,
            min_x: bounds.min[0],
            min_y: bounds.min[1],
            cells: empty_cells(total)?,
            occupied: 0,
        })
    }

    fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn resolution(&self) -> [usize; 2] {
        [self.grid_res_x, self.grid_res_y]
    }

    fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    fn world_to_cell(&self, pos: &[f64; 2]) -> [usize; 2] {
        [
            axis_cell(pos[0] - self.min_x, self.cell_size, self.grid_res_x),
            axis_cell(pos[1] - self.min_y, self.cell_size, self.grid_res_y),
        ]
    }

    #[inline]
    fn get(&self, cell: [usize; 2]) -> Option<usize> {
        self.cells[self.cell_index(cell[0], cell[1])]
    }

    fn set(&mut self, index: usize, cell: [usize; 2]) {
        let i = self.cell_index(cell[0], cell[1]);
        debug_assert!(self.cells[i].is_none(), "cell {:?} already holds sample {:?}", cell, self.cells[i]);
        self.cells[i] = Some(index);
        self.occupied += 1;
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.occupied = 0;
    }

    fn any_neighbor<F>(&self, cell: [usize; 2], reach: usize, mut predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        for y in axis_span(cell[1], reach, self.grid_res_y) {
            let row = y * self.grid_res_x;
            for x in axis_span(cell[0], reach, self.grid_res_x) {
                if x == cell[0] && y == cell[1] {
                    continue;
                }
                if let Some(j) = self.cells[row + x] {
                    if predicate(j) {
                        return true;
                    }
                }
            }
        }
        false
    }
}
