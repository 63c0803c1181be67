//! Indexed bitmaps bound to a shared palette.

use std::rc::Rc;

use crate::error::{PalswapError, Result};
use crate::types::{Colour, Grid, Palette};

use super::{ColourBitmap, ColourLookup};

/// A grid of palette indices plus the palette they resolve against.
///
/// The palette is shared: several bitmaps may hold the same `Rc<Palette>`,
/// and [`set_palette`](IndexedBitmap::set_palette) swaps the handle without
/// touching any index. Indices are not checked against the palette when they
/// are stored; an index past the end of the bound palette is reported by
/// [`dereference_at`](IndexedBitmap::dereference_at) and
/// [`dereference`](IndexedBitmap::dereference).
#[derive(Debug, Clone)]
pub struct IndexedBitmap {
    indices: Grid<usize>,
    palette: Rc<Palette>,
}

impl IndexedBitmap {
    /// Create a bitmap with every pixel set to `index`.
    pub fn filled(width: usize, height: usize, palette: Rc<Palette>, index: usize) -> Result<Self> {
        Ok(Self {
            indices: Grid::filled(width, height, index)?,
            palette,
        })
    }

    /// Create a bitmap from a row-major index buffer.
    pub fn from_buffer(
        width: usize,
        height: usize,
        palette: Rc<Palette>,
        buffer: &[usize],
    ) -> Result<Self> {
        Ok(Self {
            indices: Grid::from_buffer(width, height, buffer)?,
            palette,
        })
    }

    /// Index a colour bitmap against `palette`.
    ///
    /// Pixels are visited row by row. The first colour missing from the
    /// palette fails with [`PalswapError::ColourNotFound`]; there is no
    /// nearest-colour fallback. Duplicate palette colours resolve to their
    /// lowest index.
    pub fn from_colour_bitmap(bitmap: &ColourBitmap, palette: Rc<Palette>) -> Result<Self> {
        let lookup = ColourLookup::new(&palette);

        let indices = bitmap
            .cells()
            .map(|(x, y, &colour)| {
                lookup
                    .get(colour)
                    .ok_or(PalswapError::ColourNotFound { colour, x, y })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(Self {
            indices: Grid::from_cells(bitmap.width(), bitmap.height(), indices),
            palette,
        })
    }

    pub fn width(&self) -> usize {
        self.indices.width()
    }

    pub fn height(&self) -> usize {
        self.indices.height()
    }

    /// Get the stored index at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<usize> {
        self.indices.get(x, y).copied()
    }

    /// Store an index at `(x, y)`. The index is not checked against the palette.
    pub fn set(&mut self, x: usize, y: usize, index: usize) -> Result<()> {
        self.indices.set(x, y, index)
    }

    /// The index grid.
    pub fn indices(&self) -> &Grid<usize> {
        &self.indices
    }

    /// Copy the indices out as a row-major buffer.
    pub fn export(&self) -> Vec<usize> {
        self.indices.export()
    }

    /// The bound palette.
    pub fn palette(&self) -> &Rc<Palette> {
        &self.palette
    }

    /// Bind a different palette and return the previous one.
    pub fn set_palette(&mut self, palette: Rc<Palette>) -> Rc<Palette> {
        std::mem::replace(&mut self.palette, palette)
    }

    /// Resolve the pixel at `(x, y)` to a colour.
    pub fn dereference_at(&self, x: usize, y: usize) -> Result<Colour> {
        let index = *self.indices.get(x, y)?;
        self.resolve(x, y, index)
    }

    /// Resolve every pixel to a colour.
    ///
    /// Fails on the first out-of-range index in row-major order.
    pub fn dereference(&self) -> Result<ColourBitmap> {
        let colours = self
            .indices
            .cells()
            .map(|(x, y, &index)| self.resolve(x, y, index))
            .collect::<Result<Vec<Colour>>>()?;

        Ok(Grid::from_cells(self.width(), self.height(), colours))
    }

    fn resolve(&self, x: usize, y: usize, index: usize) -> Result<Colour> {
        self.palette
            .get(index)
            .map_err(|_| PalswapError::IndexOutOfRange {
                x,
                y,
                index,
                len: self.palette.len(),
            })
    }
}
