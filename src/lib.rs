//! palswap - Palette swapping for indexed-colour images
//!
//! Indexes a true-colour image against one palette and re-renders it with
//! another. Colours are matched exactly; a colour missing from the source
//! palette is an error, never an approximation.

pub mod bitmap;
pub mod cli;
pub mod codec;
pub mod error;
pub mod manifest;
pub mod output;
pub mod swap;
pub mod types;

pub use bitmap::{ColourBitmap, ColourLookup, IndexedBitmap};
pub use codec::{
    bitmap_from_image, image_from_bitmap, load_colour_bitmap, load_palettes, palettes_from_table,
    save_colour_bitmap,
};
pub use error::{PalswapError, Result};
pub use manifest::Manifest;
pub use swap::palette_swap;
pub use types::{Colour, Grid, Palette};
