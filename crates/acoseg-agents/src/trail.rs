//! Pheromone accessor — guarded reads and writes of single trail cells.
//!
//! The row is the pixel's raster index, the column its cluster. Absent
//! labels have no column: reads return `None` without touching the matrix
//! and writes are dropped.

use acoseg_core::grid::PixelGrid;
use acoseg_core::pheromone::PheromoneMatrix;
use acoseg_core::types::ClusteredPixel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailAccessor {
    delta: f64,
}

impl TrailAccessor {
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }

    /// Trail value for `pixel` under its label, offset by `delta`.
    pub fn get(&self, pixel: &ClusteredPixel, matrix: &PheromoneMatrix, grid: &PixelGrid) -> Option<f64> {
        let cluster = pixel.label.cluster()?;
        let row = grid.raster_index(pixel.x, pixel.y);
        Some(matrix.get(row, cluster) + self.delta)
    }

    /// Store `value` for `pixel` under its label. Absent pixels are ignored.
    pub fn set(&self, pixel: &ClusteredPixel, matrix: &mut PheromoneMatrix, grid: &PixelGrid, value: f64) {
        if let Some(cluster) = pixel.label.cluster() {
            let row = grid.raster_index(pixel.x, pixel.y);
            matrix.set(row, cluster, value);
        }
    }
}
