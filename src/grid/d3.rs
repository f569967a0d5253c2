use crate::bounds::BoundingBox;
use crate::error::SamplingError;
use crate::grid::{axis_cell, axis_span, cell_size_for, empty_cells, grid_resolution, SpatialGrid};

/// A background grid for 3D sampling.
///
/// Cell `(x, y, z)` lives at `x + y * grid_res_x + z * grid_res_x * grid_res_y`.
/// Cells are `separation / sqrt(2)` wide like the 2D grid, so their diagonal exceeds the
/// separation distance; the one-sample-per-cell rule still holds because an occupied cell
/// rejects every further candidate.
pub struct Grid3D {
    /// Number of cells along the X axis.
    pub grid_res_x: usize,
    /// Number of cells along the Y axis.
    pub grid_res_y: usize,
    /// Number of cells along the Z axis.
    pub grid_res_z: usize,
    /// Side length of a cell.
    pub cell_size: f64,
    /// Minimum X coordinate of the grid bounds.
    pub min_x: f64,
    /// Minimum Y coordinate of the grid bounds.
    pub min_y: f64,
    /// Minimum Z coordinate of the grid bounds.
    pub min_z: f64,
    /// The cells, each holding the index of at most one sample.
    pub cells: Vec<Option<usize>>,
    occupied: usize,
}

impl Grid3D {
    #[inline]
    fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(
            x < self.grid_res_x && y < self.grid_res_y && z < self.grid_res_z,
            "cell ({}, {}, {}) out of range",
            x,
            y,
            z
        );
        x + y * self.grid_res_x + z * self.grid_res_x * self.grid_res_y
    }
}

impl SpatialGrid<3> for Grid3D {
    fn new(bounds: &BoundingBox<3>, separation: f64) -> Result<Self, SamplingError> {
        let cell_size = cell_size_for(separation);
        let ([nx, ny, nz], total) = grid_resolution(bounds, cell_size)?;

        Ok(Grid3D {
            grid_res_x: nx,
            grid_res_y: ny,
            grid_res_z: nz,
            cell_size,
            min_x: bounds.min[0],
            min_y: bounds.min[1],
            min_z: bounds.min[2],
            cells: empty_cells(total)?,
            occupied: 0,
        })
    }

    fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn resolution(&self) -> [usize; 3] {
        [self.grid_res_x, self.grid_res_y, self.grid_res_z]
    }

    fn occupied(&self) -> usize {
        self.occupied
    }

    #[inline]
    fn world_to_cell(&self, pos: &[f64; 3]) -> [usize; 3] {
        [
            axis_cell(pos[0] - self.min_x, self.cell_size, self.grid_res_x),
            axis_cell(pos[1] - self.min_y, self.cell_size, self.grid_res_y),
            axis_cell(pos[2] - self.min_z, self.cell_size, self.grid_res_z),
        ]
    }

    #[inline]
    fn get(&self, cell: [usize; 3]) -> Option<usize> {
        self.cells[self.cell_index(cell[0], cell[1], cell[2])]
    }

    fn set(&mut self, index: usize, cell: [usize; 3]) {
        let i = self.cell_index(cell[0], cell[1], cell[2]);
        debug_assert!(self.cells[i].is_none(), "cell {:?} already holds sample {:?}", cell, self.cells[i]);
        self.cells[i] = Some(index);
        self.occupied += 1;
    }

    fn clear(&mut self) {
        self.cells.fill(None);
        self.occupied = 0;
    }

    fn any_neighbor<F>(&self, cell: [usize; 3], reach: usize, mut predicate: F) -> bool
    where
        F: FnMut(usize) -> bool,
    {
        let slab = self.grid_res_x * self.grid_res_y;
        for z in axis_span(cell[2], reach, self.grid_res_z) {
            for y in axis_span(cell[1], reach, self.grid_res_y) {
                let row = z * slab + y * self.grid_res_x;
                for x in axis_span(cell[0], reach, self.grid_res_x) {
                    if x == cell[0] && y == cell[1] && z == cell[2] {
                        continue;
                    }
                    if let Some(j) = self.cells[row + x] {
                        if predicate(j) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
