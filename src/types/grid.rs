//! Fixed-size 2D buffer.

use crate::error::{PalswapError, Result};

/// A rectangular grid of values stored row-major.
///
/// Dimensions are fixed at construction and always non-zero. Cells are
/// addressed by `(x, y)` with `x < width` and `y < height`; every accessor
/// checks bounds and reports [`PalswapError::OutOfRange`] instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a grid by copying a row-major buffer.
    ///
    /// `buffer[y * width + x]` becomes cell `(x, y)`. Elements beyond
    /// `width * height` are ignored.
    pub fn from_buffer(width: usize, height: usize, buffer: &[T]) -> Result<Self> {
        let required = cell_count(width, height)?;
        if buffer.len() < required {
            return Err(PalswapError::BufferTooSmall {
                len: buffer.len(),
                required,
            });
        }

        Ok(Self {
            width,
            height,
            cells: buffer[..required].to_vec(),
        })
    }

    /// Create a grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self> {
        let count = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![value; count],
        })
    }

    /// Copy the grid out as a row-major buffer.
    pub fn export(&self) -> Vec<T> {
        self.cells.clone()
    }
}

impl<T> Grid<T> {
    /// Create a grid that takes ownership of a row-major vector.
    ///
    /// Validates like [`from_buffer`](Grid::from_buffer) and drops any
    /// elements past `width * height`.
    pub fn from_vec(width: usize, height: usize, mut cells: Vec<T>) -> Result<Self> {
        let required = cell_count(width, height)?;
        if cells.len() < required {
            return Err(PalswapError::BufferTooSmall {
                len: cells.len(),
                required,
            });
        }
        cells.truncate(required);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from an owned row-major vector whose length is already known to fit.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the value at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        let offset = self.offset(x, y)?;
        Ok(&self.cells[offset])
    }

    /// Set the value at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.cells[offset] = value;
        Ok(())
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterate over `(x, y, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (i % width, i / width, value))
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(PalswapError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }
}

/// Validate dimensions and return `width * height`.
fn cell_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(PalswapError::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PalswapError::InvalidDimension { width, height })
}
