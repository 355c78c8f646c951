//! Grid shape validation.
//!
//! A drawing is a `rows` x `cols` matrix of color strings. The editor allows
//! at most [`MAX_DIMENSION`] cells on either axis.

use serde::Serialize;

use crate::error::{GalleryError, Result};

pub const MAX_DIMENSION: usize = 100;

/// A validated pixel matrix. Construct through [`PixelGrid::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl PixelGrid {
    pub fn new(rows: usize, cols: usize, cells: Vec<Vec<String>>) -> Result<Self> {
        validate_grid(rows, cols, &cells)?;
        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Color at `(row, col)`, if inside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }
}

/// Check that `cells` has exactly `rows` rows of exactly `cols` cells each and
/// that both dimensions are within `1..=MAX_DIMENSION`.
pub fn validate_grid(rows: usize, cols: usize, cells: &[Vec<String>]) -> Result<()> {
    if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
        return Err(GalleryError::InvalidGrid(format!(
            "dimensions {rows}x{cols} outside 1..={MAX_DIMENSION}"
        )));
    }
    if cells.len() != rows {
        return Err(GalleryError::InvalidGrid(format!(
            "expected {rows} rows, got {}",
            cells.len()
        )));
    }
    if let Some((index, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(GalleryError::InvalidGrid(format!(
            "row {index} has {} cells, expected {cols}",
            row.len()
        )));
    }
    Ok(())
}
