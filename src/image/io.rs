//! I/O helpers bridging disk containers and the pipeline's owned buffers.
//!
//! - `load_color_image`: read a BMP/PNG/JPEG/etc. into an interleaved RGB buffer.
//! - `save_color_image`: write an RGB buffer to the container named by the path extension.
//! - `save_grayscale_u8` / `save_grayscale_f32`: dump intermediate stage grids to PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageRgb8, ImageU8, ImageView};
use crate::error::{Error, Result};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to interleaved 8-bit RGB.
///
/// The decoder normalizes whatever channel order and depth the container uses,
/// so downstream stages always see red, green, blue.
pub fn load_color_image(path: &Path) -> Result<ImageRgb8> {
    let img = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let w = img.width() as usize;
    let h = img.height() as usize;
    Ok(ImageRgb8::from_raw(w, h, img.into_raw()))
}

/// Save an interleaved RGB buffer to the container selected by the path extension.
pub fn save_color_image(image: &ImageRgb8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let out = RgbImage::from_fn(image.w as u32, image.h as u32, |x, y| {
        Rgb(image.pixel(x as usize, y as usize))
    });
    out.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save an 8-bit grayscale grid to a PNG.
///
/// Contiguous grids hand their bytes to the encoder in one copy; anything
/// else is written pixel by pixel.
pub fn save_grayscale_u8(image: &ImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let out = image
        .as_slice()
        .and_then(|data| GrayImage::from_raw(image.w as u32, image.h as u32, data.to_vec()))
        .unwrap_or_else(|| {
            GrayImage::from_fn(image.w as u32, image.h as u32, |x, y| {
                Luma([image.get(x as usize, y as usize)])
            })
        });
    out.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a float grid to a grayscale PNG, clamping values into [0, 255].
///
/// Gradient magnitudes above 255 render as white; directions map their
/// degree value directly to a gray level.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
