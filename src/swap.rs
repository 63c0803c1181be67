//! Palette swapping.

use std::rc::Rc;

use crate::bitmap::{ColourBitmap, IndexedBitmap};
use crate::error::{PalswapError, Result};
use crate::types::Palette;

/// Re-render `source` by moving it from palette `from` to palette `to`.
///
/// The image is indexed against `palettes[from]`, rebound to `palettes[to]`,
/// and dereferenced. Colours are substituted by position, so slot `i` of the
/// source palette becomes slot `i` of the target palette.
pub fn palette_swap(
    source: &ColourBitmap,
    palettes: &[Rc<Palette>],
    from: usize,
    to: usize,
) -> Result<ColourBitmap> {
    let source_palette = select(palettes, from)?;
    let target_palette = select(palettes, to)?;

    let mut indexed = IndexedBitmap::from_colour_bitmap(source, source_palette)?;
    indexed.set_palette(target_palette);
    indexed.dereference()
}

fn select(palettes: &[Rc<Palette>], index: usize) -> Result<Rc<Palette>> {
    palettes
        .get(index)
        .cloned()
        .ok_or(PalswapError::PaletteNotFound {
            index,
            count: palettes.len(),
        })
}
