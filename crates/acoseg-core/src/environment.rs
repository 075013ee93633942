//! Segmentation environment — what every ant works against.
//!
//! Holds the read-only grid and the shared pheromone matrix, and checks
//! once, up front, that their shapes agree. Several ants may read the same
//! environment concurrently through `&SegmentationEnvironment`; writes go
//! through `&mut`, so the caller decides how pheromone updates from
//! different ants are serialized.

use crate::error::{Result, SegmentationError};
use crate::grid::PixelGrid;
use crate::pheromone::PheromoneMatrix;

/// The image plus the colony's pheromone matrix.
#[derive(Debug, Clone)]
pub struct SegmentationEnvironment {
    grid: PixelGrid,
    pheromone: PheromoneMatrix,
}

impl SegmentationEnvironment {
    /// Pair a grid with an existing matrix.
    ///
    /// The matrix needs one row per pixel and at least one column.
    pub fn new(grid: PixelGrid, pheromone: PheromoneMatrix) -> Result<Self> {
        if pheromone.rows() != grid.pixel_count() {
            return Err(SegmentationError::dimension_mismatch(
                "pheromone rows",
                grid.pixel_count(),
                pheromone.rows(),
            ));
        }
        if pheromone.cols() == 0 {
            return Err(SegmentationError::dimension_mismatch(
                "pheromone columns",
                1,
                0,
            ));
        }
        Ok(Self { grid, pheromone })
    }

    /// Environment with a fresh matrix, every cell at `initial`.
    pub fn with_initial_pheromone(grid: PixelGrid, clusters: usize, initial: f64) -> Self {
        let pheromone = PheromoneMatrix::for_grid(&grid, clusters, initial);
        Self { grid, pheromone }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    pub fn pheromone_mut(&mut self) -> &mut PheromoneMatrix {
        &mut self.pheromone
    }

    /// Borrow the grid and the matrix at once, the matrix mutably.
    pub fn split_mut(&mut self) -> (&PixelGrid, &mut PheromoneMatrix) {
        (&self.grid, &mut self.pheromone)
    }

    pub fn number_of_pixels(&self) -> usize {
        self.grid.pixel_count()
    }

    /// Number of live clusters the matrix has columns for.
    pub fn number_of_clusters(&self) -> usize {
        self.pheromone.cols()
    }

    pub fn into_parts(self) -> (PixelGrid, PheromoneMatrix) {
        (self.grid, self.pheromone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> PixelGrid {
        PixelGrid::new(vec![vec![10.0, 10.0], vec![200.0, 200.0]]).unwrap()
    }

    #[test]
    fn accepts_matching_shapes() {
        let env = SegmentationEnvironment::new(grid(), PheromoneMatrix::new(4, 2, 1.0)).unwrap();
        assert_eq!(env.number_of_pixels(), 4);
        assert_eq!(env.number_of_clusters(), 2);
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let err = SegmentationEnvironment::new(grid(), PheromoneMatrix::new(3, 2, 1.0)).unwrap_err();
        assert_eq!(err, SegmentationError::dimension_mismatch("pheromone rows", 4, 3));
    }

    #[test]
    fn rejects_matrix_without_columns() {
        assert!(SegmentationEnvironment::new(grid(), PheromoneMatrix::new(4, 0, 1.0)).is_err());
    }

    #[test]
    fn split_mut_writes_through() {
        let mut env = SegmentationEnvironment::with_initial_pheromone(grid(), 2, 0.0);
        let (g, m) = env.split_mut();
        let row = g.raster_index(1, 1);
        m.set(row, 1, 3.0);
        assert_eq!(env.pheromone().get(3, 1), 3.0);
    }

    #[test]
    fn pheromone_mut_updates_are_kept_in_parts() {
        let mut env = SegmentationEnvironment::with_initial_pheromone(grid(), 2, 1.0);
        env.pheromone_mut().set(0, 1, 0.25);

        let (g, m) = env.into_parts();
        assert_eq!(g, grid());
        assert_eq!(m.row(0), &[1.0, 0.25]);
    }
}
