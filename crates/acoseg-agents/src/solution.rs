//! Solution — the partition an ant is building.
//!
//! A fixed-size slot per grid cell, in raster order. Slots are filled
//! front to back, each exactly once, so the filled prefix is always the
//! set of pixels already decided.

use acoseg_core::types::{ClusterLabel, ClusteredPixel};

#[derive(Debug, Clone)]
pub struct Solution {
    height: usize,
    slots: Vec<Option<ClusteredPixel>>,
    placed: usize,
}

impl Solution {
    /// Empty solution for a `width × height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            height,
            slots: vec![None; width * height],
            placed: 0,
        }
    }

    /// Total number of slots (the grid's pixel count).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots filled so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn is_complete(&self) -> bool {
        self.placed == self.slots.len()
    }

    /// Coordinates of the next slot to fill, or `None` when complete.
    pub fn next_position(&self) -> Option<(usize, usize)> {
        if self.is_complete() {
            None
        } else {
            Some((self.placed / self.height, self.placed % self.height))
        }
    }

    /// Fill the next slot with `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if the solution is complete or `pixel` is not the next cell
    /// in raster order.
    pub fn place(&mut self, pixel: ClusteredPixel) {
        let expected = self.next_position();
        assert_eq!(
            expected,
            Some((pixel.x, pixel.y)),
            "pixel ({}, {}) placed out of raster order",
            pixel.x,
            pixel.y
        );
        self.slots[self.placed] = Some(pixel);
        self.placed += 1;
    }

    /// The pixel at `(x, y)` if it has been decided.
    pub fn get(&self, x: usize, y: usize) -> Option<&ClusteredPixel> {
        self.slots.get(x * self.height + y)?.as_ref()
    }

    /// Decided pixels, in raster order.
    pub fn iter(&self) -> impl Iterator<Item = &ClusteredPixel> {
        self.slots.iter().flatten()
    }

    /// Label of every slot in raster order; `None` for undecided slots.
    pub fn labels(&self) -> Vec<Option<ClusterLabel>> {
        self.slots.iter().map(|slot| slot.map(|p| p.label)).collect()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.placed = 0;
    }
}
