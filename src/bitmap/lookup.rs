//! Reverse colour lookup for palettes.

use std::collections::HashMap;

use crate::types::{Colour, Palette};

/// Maps each colour in a palette back to its index.
///
/// When a palette holds the same colour more than once, the lowest index wins.
#[derive(Debug, Clone)]
pub struct ColourLookup {
    table: HashMap<Colour, usize>,
}

impl ColourLookup {
    /// Build the lookup for `palette`.
    pub fn new(palette: &Palette) -> Self {
        let mut table = HashMap::with_capacity(palette.len());

        // Walk high to low; the last write for a colour is its lowest index.
        for (index, &colour) in palette.iter().enumerate().rev() {
            table.insert(colour, index);
        }

        Self { table }
    }

    /// Find the index for `colour`, if the palette contains it.
    pub fn get(&self, colour: Colour) -> Option<usize> {
        self.table.get(&colour).copied()
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
