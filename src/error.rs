use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Colour;

/// Main error type for palswap operations
#[derive(Error, Diagnostic, Debug)]
pub enum PalswapError {
    #[error("Invalid dimensions {width}x{height}")]
    #[diagnostic(
        code(palswap::dimension),
        help("Width and height must both be at least 1")
    )]
    InvalidDimension { width: usize, height: usize },

    #[error("Buffer too small: got {len} elements, need {required}")]
    #[diagnostic(code(palswap::buffer))]
    BufferTooSmall { len: usize, required: usize },

    #[error("Coordinate ({x}, {y}) is outside a {width}x{height} grid")]
    #[diagnostic(code(palswap::range))]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Palette index {index} is out of range for a palette of {len} colours")]
    #[diagnostic(code(palswap::range))]
    PaletteIndexOutOfRange { index: usize, len: usize },

    #[error("Colour {colour} at ({x}, {y}) is not in the palette")]
    #[diagnostic(
        code(palswap::colour_not_found),
        help("Every colour in the source image must appear in the source palette")
    )]
    ColourNotFound { colour: Colour, x: usize, y: usize },

    #[error("Index {index} at ({x}, {y}) is out of range for a palette of {len} colours")]
    #[diagnostic(
        code(palswap::index_out_of_range),
        help("The target palette has fewer colours than the source palette")
    )]
    IndexOutOfRange {
        x: usize,
        y: usize,
        index: usize,
        len: usize,
    },

    #[error("Palette {index} not found: the table has {count} palettes")]
    #[diagnostic(
        code(palswap::palette_not_found),
        help("Palette numbers are column positions in the palette table, starting at 0")
    )]
    PaletteNotFound { index: usize, count: usize },

    #[error("Expected 4 or 5 arguments, got {count}")]
    #[diagnostic(
        code(palswap::usage),
        help("Usage: palswap <SOURCE> <PALETTES> [SOURCE_INDEX] <TARGET_INDEX> <DEST>")
    )]
    Usage { count: usize },

    #[error("Invalid palette number: {token}")]
    #[diagnostic(
        code(palswap::format),
        help("Palette numbers must be non-negative integers")
    )]
    Format { token: String },

    #[error("Unknown image format for {path}: {message}")]
    #[diagnostic(code(palswap::codec))]
    UnknownFormat { path: PathBuf, message: String },

    #[error("Invalid image content in {path}: {message}")]
    #[diagnostic(code(palswap::codec))]
    InvalidContent { path: PathBuf, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(palswap::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(palswap::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Destination already exists: {path}")]
    #[diagnostic(
        code(palswap::overwrite),
        help("Set `overwrite: true` in palswap.yaml or choose another destination")
    )]
    DestinationExists { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, PalswapError>;
