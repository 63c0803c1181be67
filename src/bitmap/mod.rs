//! Colour and indexed bitmaps.
//!
//! A [`ColourBitmap`] holds one RGBA colour per pixel. An [`IndexedBitmap`]
//! holds one palette index per pixel and a shared handle to the palette it
//! resolves against. Converting between the two is exact: every colour must
//! be present in the palette, and every index must be inside it.

mod indexed;
mod lookup;

pub use indexed::IndexedBitmap;
pub use lookup::ColourLookup;

use crate::types::{Colour, Grid};

/// A dense true-colour image.
pub type ColourBitmap = Grid<Colour>;
