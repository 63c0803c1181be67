//! Image file glue.
//!
//! Reads and writes [`ColourBitmap`]s through the `image` crate, and reads
//! palette tables: images where each column is one palette and each row is
//! one colour slot.

mod bitmap;
mod table;

pub use bitmap::{bitmap_from_image, image_from_bitmap, load_colour_bitmap, save_colour_bitmap};
pub use table::{load_palettes, palettes_from_table};

use std::path::Path;

use image::ImageError;

use crate::error::PalswapError;

/// Map an `image` error onto the codec error kinds.
fn codec_error(path: &Path, err: ImageError) -> PalswapError {
    let path = path.to_path_buf();
    let message = err.to_string();
    match err {
        ImageError::Unsupported(_) => PalswapError::UnknownFormat { path, message },
        ImageError::Decoding(_) | ImageError::Limits(_) | ImageError::Parameter(_) => {
            PalswapError::InvalidContent { path, message }
        }
        _ => PalswapError::Io { path, message },
    }
}
