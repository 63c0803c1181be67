//! Palette tables.

use std::path::Path;

use crate::bitmap::ColourBitmap;
use crate::error::Result;
use crate::types::Palette;

use super::load_colour_bitmap;

/// Load every palette from a palette table image.
pub fn load_palettes(path: &Path) -> Result<Vec<Palette>> {
    let table = load_colour_bitmap(path)?;
    Ok(palettes_from_table(&table))
}

/// Split a table into palettes, one per column.
///
/// Palette `x` holds the column's colours top to bottom, so every palette has
/// `table.height()` colours.
pub fn palettes_from_table(table: &ColourBitmap) -> Vec<Palette> {
    (0..table.width())
        .map(|x| table.rows().map(|row| row[x]).collect::<Palette>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::save_colour_bitmap;
    use crate::types::Colour;
    use tempfile::tempdir;

    /// Two palettes side by side, four colours each.
    #[rustfmt::skip]
    fn table() -> ColourBitmap {
        ColourBitmap::from_buffer(
            2,
            4,
            &[
                Colour::WHITE, Colour::BLACK,
                Colour::RED, Colour::BLUE,
                Colour::GREEN, Colour::RED,
                Colour::BLUE, Colour::GREEN,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_palettes_from_table() {
        let palettes = palettes_from_table(&table());
        assert_eq!(palettes.len(), 2);
        assert_eq!(
            palettes[0],
            Palette::new(&[Colour::WHITE, Colour::RED, Colour::GREEN, Colour::BLUE])
        );
        assert_eq!(
            palettes[1],
            Palette::new(&[Colour::BLACK, Colour::BLUE, Colour::RED, Colour::GREEN])
        );
    }

    #[test]
    fn test_single_row_table() {
        let table =
            ColourBitmap::from_buffer(3, 1, &[Colour::RED, Colour::GREEN, Colour::BLUE]).unwrap();
        let palettes = palettes_from_table(&table);
        assert_eq!(palettes.len(), 3);
        assert!(palettes.iter().all(|p| p.len() == 1));
        assert_eq!(palettes[2].get(0).unwrap(), Colour::BLUE);
    }

    #[test]
    fn test_load_palettes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palettes.png");
        save_colour_bitmap(&table(), &path).unwrap();

        let palettes = load_palettes(&path).unwrap();
        assert_eq!(palettes, palettes_from_table(&table()));
    }
}
