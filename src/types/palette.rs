//! Palette type for ordered colour tables.

use crate::error::{PalswapError, Result};

use super::Colour;

/// An ordered, fixed-length table of colours.
///
/// Two palettes are equal when they have the same length and the same colour
/// at every index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from an ordered list of colours.
    pub fn new(colours: &[Colour]) -> Self {
        Self {
            colours: colours.to_vec(),
        }
    }

    /// Create a palette of `len` fully transparent colours.
    pub fn with_len(len: usize) -> Self {
        Self {
            colours: vec![Colour::TRANSPARENT; len],
        }
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Get the colour at `index`.
    pub fn get(&self, index: usize) -> Result<Colour> {
        self.colours
            .get(index)
            .copied()
            .ok_or(PalswapError::PaletteIndexOutOfRange {
                index,
                len: self.colours.len(),
            })
    }

    /// Replace the colour at `index`.
    pub fn set(&mut self, index: usize, colour: Colour) -> Result<()> {
        let len = self.colours.len();
        let slot = self
            .colours
            .get_mut(index)
            .ok_or(PalswapError::PaletteIndexOutOfRange { index, len })?;
        *slot = colour;
        Ok(())
    }

    /// Iterate over colours in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Colour> {
        self.colours.iter()
    }

    /// All colours as a slice.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Colour;
    type IntoIter = std::slice::Iter<'a, Colour>;

    fn into_iter(self) -> Self::IntoIter {
        self.colours.iter()
    }
}

impl FromIterator<Colour> for Palette {
    fn from_iter<I: IntoIterator<Item = Colour>>(iter: I) -> Self {
        Self {
            colours: iter.into_iter().collect(),
        }
    }
}
