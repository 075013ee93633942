//! Pheromone matrix — the colony's shared memory.
//!
//! One row per pixel (raster order), one column per live cluster. The
//! colony owns the matrix across iterations; ants only read and write
//! individual cells. Evaporation and reinforcement are the colony's job.

use crate::error::{Result, SegmentationError};
use crate::grid::PixelGrid;

/// Dense `rows × cols` matrix of trail values, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Create a matrix with every cell set to `initial`.
    pub fn new(rows: usize, cols: usize, initial: f64) -> Self {
        Self {
            rows,
            cols,
            values: vec![initial; rows * cols],
        }
    }

    /// Matrix sized for `grid` with `clusters` columns.
    pub fn for_grid(grid: &PixelGrid, clusters: usize, initial: f64) -> Self {
        Self::new(grid.pixel_count(), clusters, initial)
    }

    /// Build from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut values = Vec::with_capacity(row_count * cols);
        for row in rows {
            if row.len() != cols {
                return Err(SegmentationError::dimension_mismatch(
                    "pheromone row length",
                    cols,
                    row.len(),
                ));
            }
            values.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "pheromone cell ({}, {}) outside {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Raw cell value.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[self.offset(row, col)]
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let offset = self.offset(row, col);
        self.values[offset] = value;
    }

    /// All trail values for one pixel.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.values[start..start + self.cols]
    }
}
