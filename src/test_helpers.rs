//! Shared test utilities: synthetic images written to disk.

use image::{ImageEncoder, Rgba, RgbImage, RgbaImage};
use std::path::Path;

/// Create a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create an RGBA PNG whose left half is fully transparent and right half
/// is opaque red.
pub fn create_test_png_with_transparency(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 0, 0, 255])
        }
    });
    img.save(path).unwrap();
}

/// Create an 8-bit indexed PNG with a `tRNS` chunk: palette entry 0 is opaque
/// red, entry 1 is fully transparent. The left half uses entry 1.
pub fn create_test_indexed_png_with_transparency(path: &Path, width: u32, height: u32) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(vec![255, 0, 0, 0, 0, 0]);
    encoder.set_trns(vec![255, 0]);
    let indices: Vec<u8> = (0..height)
        .flat_map(|_| (0..width).map(move |x| u8::from(x < width / 2)))
        .collect();
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&indices).unwrap();
}

/// Create a single-frame GIF with the same layout as
/// [`create_test_png_with_transparency`].
pub fn create_test_gif_with_transparency(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 0, 0, 255])
        }
    });
    let file = std::fs::File::create(path).unwrap();
    image::codecs::gif::GifEncoder::new(std::io::BufWriter::new(file))
        .encode(img.as_raw(), width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
}
