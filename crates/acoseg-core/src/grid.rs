//! Pixel grid — the read-only image every ant walks.
//!
//! The grid is indexed `[x][y]`. `width` is the extent of `x` (outer index)
//! and `height` the extent of `y` (inner index). Raster order visits `y`
//! first, so the raster index of a cell is `x * height + y`; the same index
//! addresses the solution slot and the pheromone row of that cell.

use crate::error::{Result, SegmentationError};

/// Intensity value marking a cell as absent (masked out of segmentation).
pub const ABSENT_PIXEL_FLAG: f64 = -1.0;

/// Immutable grey-level image, stored flat in raster order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    intensities: Vec<f64>,
}

impl PixelGrid {
    /// Build a grid from nested cells, `cells[x][y]`.
    ///
    /// Every column must have the same length and every intensity must be
    /// finite. Cells equal to [`ABSENT_PIXEL_FLAG`] are absent.
    pub fn new(cells: Vec<Vec<f64>>) -> Result<Self> {
        let width = cells.len();
        let height = cells.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(SegmentationError::EmptyGrid);
        }

        let mut intensities = Vec::with_capacity(width * height);
        for (x, column) in cells.into_iter().enumerate() {
            if column.len() != height {
                return Err(SegmentationError::RaggedGrid {
                    x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, value) in column.into_iter().enumerate() {
                if !value.is_finite() {
                    return Err(SegmentationError::InvalidIntensity { x, y, value });
                }
                intensities.push(value);
            }
        }

        Ok(Self {
            width,
            height,
            intensities,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, absent ones included.
    pub fn pixel_count(&self) -> usize {
        self.intensities.len()
    }

    /// Raster index of `(x, y)`: `x * height + y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    pub fn raster_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        x * self.height + y
    }

    /// Inverse of [`raster_index`](Self::raster_index).
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.height, index % self.height)
    }

    pub fn intensity(&self, x: usize, y: usize) -> f64 {
        self.intensities[self.raster_index(x, y)]
    }

    pub fn is_absent(&self, x: usize, y: usize) -> bool {
        self.intensity(x, y) == ABSENT_PIXEL_FLAG
    }

    /// Number of absent cells.
    pub fn absent_count(&self) -> usize {
        self.intensities
            .iter()
            .filter(|&&v| v == ABSENT_PIXEL_FLAG)
            .count()
    }

    /// The in-bounds 4-neighbours of `(x, y)`.
    pub fn neighbours(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let candidates = [
            x.checked_sub(1).map(|nx| (nx, y)),
            Some((x + 1, y)),
            y.checked_sub(1).map(|ny| (x, ny)),
            Some((x, y + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(move |&(nx, ny)| nx < self.width && ny < self.height)
    }
}
