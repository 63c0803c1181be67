//! Loading and saving colour bitmaps.

use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::bitmap::ColourBitmap;
use crate::error::{PalswapError, Result};
use crate::types::Colour;

use super::codec_error;

/// Decode an image file into a colour bitmap.
///
/// Any format the `image` crate can read is accepted. The format is detected
/// from the file contents; the extension is only a fallback. Pixels are
/// converted to 8-bit RGBA.
pub fn load_colour_bitmap(path: &Path) -> Result<ColourBitmap> {
    let io_error = |e: std::io::Error| PalswapError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let img = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?
        .decode()
        .map_err(|e| codec_error(path, e))?
        .to_rgba8();

    bitmap_from_image(&img)
}

/// Encode a colour bitmap to an image file.
///
/// The format is chosen from the file extension.
pub fn save_colour_bitmap(bitmap: &ColourBitmap, path: &Path) -> Result<()> {
    let img = image_from_bitmap(bitmap)?;
    img.save(path).map_err(|e| codec_error(path, e))
}

/// Convert an RGBA image into a colour bitmap.
pub fn bitmap_from_image(img: &RgbaImage) -> Result<ColourBitmap> {
    let colours: Vec<Colour> = img.pixels().map(|p| Colour::from(p.0)).collect();
    ColourBitmap::from_vec(img.width() as usize, img.height() as usize, colours)
}

/// Convert a colour bitmap into an RGBA image.
pub fn image_from_bitmap(bitmap: &ColourBitmap) -> Result<RgbaImage> {
    let too_large = || PalswapError::InvalidDimension {
        width: bitmap.width(),
        height: bitmap.height(),
    };

    let width = u32::try_from(bitmap.width()).map_err(|_| too_large())?;
    let height = u32::try_from(bitmap.height()).map_err(|_| too_large())?;

    let bytes: Vec<u8> = bitmap
        .as_slice()
        .iter()
        .flat_map(|colour| colour.to_rgba())
        .collect();

    RgbaImage::from_raw(width, height, bytes).ok_or_else(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn rgbw() -> ColourBitmap {
        ColourBitmap::from_buffer(
            2,
            2,
            &[Colour::WHITE, Colour::RED, Colour::GREEN, Colour::BLUE],
        )
        .unwrap()
    }

    #[test]
    fn test_image_from_bitmap() {
        let img = image_from_bitmap(&rgbw()).unwrap();
        assert_eq!((img.width(), img.height()), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_bitmap_from_image() {
        let mut img = RgbaImage::from_pixel(3, 1, image::Rgba([0, 0, 0, 0]));
        img.put_pixel(2, 0, image::Rgba([1, 2, 3, 4]));

        let bitmap = bitmap_from_image(&img).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 1);
        assert_eq!(*bitmap.get(2, 0).unwrap(), Colour::new(1, 2, 3, 4));
        assert_eq!(*bitmap.get(0, 0).unwrap(), Colour::TRANSPARENT);
    }

    #[test]
    fn test_bitmap_from_empty_image() {
        let img = RgbaImage::new(0, 4);
        assert!(matches!(
            bitmap_from_image(&img),
            Err(PalswapError::InvalidDimension { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_save_and_load_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bitmap.png");

        let mut bitmap = rgbw();
        bitmap.set(1, 1, Colour::new(10, 20, 30, 128)).unwrap();
        save_colour_bitmap(&bitmap, &path).unwrap();

        let loaded = load_colour_bitmap(&path).unwrap();
        assert_eq!(loaded, bitmap);
    }

    #[test]
    fn test_load_ignores_extension() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("table.png");
        let dat = dir.path().join("palettes.dat");
        save_colour_bitmap(&rgbw(), &png).unwrap();
        std::fs::copy(&png, &dat).unwrap();

        assert_eq!(load_colour_bitmap(&dat).unwrap(), rgbw());
    }

    #[test]
    fn test_load_content_overrides_extension() {
        let dir = tempdir().unwrap();
        let bmp = dir.path().join("sprite.bmp");
        let mislabelled = dir.path().join("sprite.png");
        save_colour_bitmap(&rgbw(), &bmp).unwrap();
        std::fs::copy(&bmp, &mislabelled).unwrap();

        let loaded = load_colour_bitmap(&mislabelled).unwrap();
        assert_eq!(loaded.width(), 2);
        assert_eq!(*loaded.get(1, 0).unwrap(), Colour::RED);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.png");
        assert!(matches!(
            load_colour_bitmap(&path),
            Err(PalswapError::Io { .. })
        ));
    }

    #[test]
    fn test_load_unknown_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();
        assert!(matches!(
            load_colour_bitmap(&path),
            Err(PalswapError::UnknownFormat { .. })
        ));
    }

    #[test]
    fn test_load_invalid_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_colour_bitmap(&path),
            Err(PalswapError::InvalidContent { .. })
        ));
    }

    #[test]
    fn test_save_unknown_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.nope");
        assert!(matches!(
            save_colour_bitmap(&rgbw(), &path),
            Err(PalswapError::UnknownFormat { .. })
        ));
        assert!(!path.exists());
    }
}
