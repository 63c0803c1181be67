//! Positional argument parsing.

use std::path::PathBuf;

use crate::error::{PalswapError, Result};

/// A parsed swap invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapArgs {
    /// Image to recolour.
    pub source: PathBuf,
    /// Palette table image; each column is one palette.
    pub palette_table: PathBuf,
    /// Column of the palette the source image is drawn in.
    pub source_palette: usize,
    /// Column of the palette to render with.
    pub target_palette: usize,
    /// Output image.
    pub destination: PathBuf,
}

impl SwapArgs {
    /// Parse `SOURCE PALETTES [SOURCE_INDEX] TARGET_INDEX DEST`.
    ///
    /// With four tokens the source palette defaults to 0. Any other count is
    /// a usage error; index tokens that are not non-negative integers are a
    /// format error.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

        let (source, palette_table, source_palette, target_palette, destination) =
            match tokens[..] {
                [source, table, target, dest] => (source, table, "0", target, dest),
                [source, table, from, target, dest] => (source, table, from, target, dest),
                _ => return Err(PalswapError::Usage { count: tokens.len() }),
            };

        Ok(Self {
            source: PathBuf::from(source),
            palette_table: PathBuf::from(palette_table),
            source_palette: parse_index(source_palette)?,
            target_palette: parse_index(target_palette)?,
            destination: PathBuf::from(destination),
        })
    }
}

fn parse_index(token: &str) -> Result<usize> {
    token.parse().map_err(|_| PalswapError::Format {
        token: token.to_string(),
    })
}
