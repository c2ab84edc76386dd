//! End-to-end tests that drive the `fixed-resize` binary.
//!
//! Each test builds synthetic inputs in a temp directory, runs the binary and
//! checks exit status, stdout and the written file.

use image::{ColorType, GenericImageView, Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fixed-resize"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn write_opaque_png(path: &Path, width: u32, height: u32) {
    image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 90])
    })
    .save(path)
    .unwrap();
}

/// 128x128 RGBA: transparent border ring, opaque blue core.
fn write_emoji_png(path: &Path) {
    RgbaImage::from_fn(128, 128, |x, y| {
        if (32..96).contains(&x) && (32..96).contains(&y) {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
    .save(path)
    .unwrap();
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &[]);

    assert_eq!(out.status.code(), Some(1));
    let text = stdout(&out);
    assert!(text.contains("Usage: fixed-resize <input_image> [output_image]"));
    assert!(text.contains("fixed-resize emoji.png emoji_resized.png"));
}

#[test]
fn missing_input_fails_without_writing() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["ghost.png"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("❌ Error: File 'ghost.png' not found"));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn opaque_input_gets_derived_output_at_512() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 300, 200);

    let out = run(tmp.path(), &["photo.png"]);

    assert!(out.status.success(), "{}", stdout(&out));
    let text = stdout(&out);
    assert!(text.contains("✅ Successfully resized image to 512x512"));
    assert!(text.contains("📁 Saved as: photo_512x512.png"));
    assert!(text.contains("📊 Original size: "));
    assert!(text.contains("📊 New size: "));
    assert_eq!(
        image::image_dimensions(tmp.path().join("photo_512x512.png")).unwrap(),
        (512, 512)
    );
}

#[test]
fn emoji_png_is_flattened_by_default() {
    let tmp = TempDir::new().unwrap();
    write_emoji_png(&tmp.path().join("emoji.png"));

    let out = run(tmp.path(), &["emoji.png"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let img = image::open(tmp.path().join("emoji_512x512.png")).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    assert_eq!(img.color(), ColorType::Rgb8);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(256, 256).0, [0, 0, 255, 255]);
}

#[test]
fn keep_alpha_preserves_transparency_in_png() {
    let tmp = TempDir::new().unwrap();
    write_emoji_png(&tmp.path().join("emoji.png"));

    let out = run(tmp.path(), &["emoji.png", "--keep-alpha"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let img = image::open(tmp.path().join("emoji_512x512.png")).unwrap();
    assert_eq!(img.color(), ColorType::Rgba8);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn transparent_source_to_jpeg_has_white_background() {
    let tmp = TempDir::new().unwrap();
    write_emoji_png(&tmp.path().join("emoji.png"));

    let out = run(tmp.path(), &["emoji.png", "emoji.jpg", "--keep-alpha"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let img = image::open(tmp.path().join("emoji.jpg")).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    assert_eq!(img.color(), ColorType::Rgb8);
    let [r, g, b, _] = img.get_pixel(10, 10).0;
    assert!(r > 245 && g > 245 && b > 245, "expected white, got {r},{g},{b}");
}

#[test]
fn explicit_output_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("in.png"), 40, 40);
    std::fs::write(tmp.path().join("out.png"), b"stale contents").unwrap();

    let out = run(tmp.path(), &["in.png", "out.png", "extra", "args"]);

    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("📁 Saved as: out.png"));
    assert_eq!(
        image::image_dimensions(tmp.path().join("out.png")).unwrap(),
        (512, 512)
    );
    assert!(!tmp.path().join("in_512x512.png").exists());
}

#[test]
fn repeated_runs_produce_identical_pixels() {
    let tmp = TempDir::new().unwrap();
    write_emoji_png(&tmp.path().join("emoji.png"));

    assert!(run(tmp.path(), &["emoji.png", "a.png"]).status.success());
    let first = image::open(tmp.path().join("a.png")).unwrap();
    assert!(run(tmp.path(), &["emoji.png", "a.png"]).status.success());
    let second = image::open(tmp.path().join("a.png")).unwrap();

    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.color(), second.color());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn corrupt_input_is_processing_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("broken.png"), b"not an image").unwrap();

    let out = run(tmp.path(), &["broken.png"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("❌ Error resizing image: "));
}

#[test]
fn size_flags_change_dimensions_and_suffix() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 50, 50);

    let out = run(tmp.path(), &["photo.png", "--width", "64", "--height", "32"]);

    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("resized image to 64x32"));
    assert_eq!(
        image::image_dimensions(tmp.path().join("photo_64x32.png")).unwrap(),
        (64, 32)
    );
}

#[test]
fn config_file_is_applied() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 50, 50);
    std::fs::write(tmp.path().join("resize.toml"), "[size]\nwidth = 20\nheight = 10").unwrap();

    let out = run(tmp.path(), &["photo.png", "small.png", "--config", "resize.toml"]);

    assert!(out.status.success(), "{}", stdout(&out));
    assert_eq!(
        image::image_dimensions(tmp.path().join("small.png")).unwrap(),
        (20, 10)
    );
}

#[test]
fn invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 50, 50);

    let out = run(tmp.path(), &["photo.png", "--quality", "0"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("❌ Error loading config: "));
    assert!(!tmp.path().join("photo_512x512.png").exists());
}

#[test]
fn print_config_succeeds_without_input() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["--print-config"]);

    assert!(out.status.success());
    assert!(stdout(&out).contains("[transparency]"));
}

#[test]
fn transparent_gif_input_is_flattened_to_white_jpeg() {
    let tmp = TempDir::new().unwrap();
    let emoji = RgbaImage::from_fn(64, 64, |x, _| {
        if x < 32 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([0, 0, 255, 255])
        }
    });
    let file = std::fs::File::create(tmp.path().join("emoji.gif")).unwrap();
    image::codecs::gif::GifEncoder::new(file)
        .encode(emoji.as_raw(), 64, 64, image::ExtendedColorType::Rgba8)
        .unwrap();

    let out = run(tmp.path(), &["emoji.gif", "emoji.jpg"]);
    assert!(out.status.success(), "{}", stdout(&out));

    let img = image::open(tmp.path().join("emoji.jpg")).unwrap();
    assert_eq!(img.dimensions(), (512, 512));
    let [r, g, b, _] = img.get_pixel(10, 256).0;
    assert!(r > 245 && g > 245 && b > 245, "expected white, got {r},{g},{b}");
}

#[test]
fn gif_input_gets_derived_gif_output() {
    let tmp = TempDir::new().unwrap();
    image::RgbImage::from_pixel(30, 30, image::Rgb([10, 200, 10]))
        .save(tmp.path().join("icon.gif"))
        .unwrap();

    let out = run(tmp.path(), &["icon.gif"]);

    assert!(out.status.success(), "{}", stdout(&out));
    assert!(stdout(&out).contains("📁 Saved as: icon_512x512.gif"));
    assert_eq!(
        image::image_dimensions(tmp.path().join("icon_512x512.gif")).unwrap(),
        (512, 512)
    );
}

#[test]
fn bmp_output_is_written() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 60, 40);

    let out = run(tmp.path(), &["photo.png", "photo.bmp"]);

    assert!(out.status.success(), "{}", stdout(&out));
    assert_eq!(
        image::image_dimensions(tmp.path().join("photo.bmp")).unwrap(),
        (512, 512)
    );
}

#[test]
fn jfif_output_is_written_as_jpeg() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 60, 40);

    let out = run(tmp.path(), &["photo.png", "photo.jfif"]);

    assert!(out.status.success(), "{}", stdout(&out));
    let bytes = std::fs::read(tmp.path().join("photo.jfif")).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
}

#[test]
fn oversized_target_is_rejected_without_writing() {
    let tmp = TempDir::new().unwrap();
    write_opaque_png(&tmp.path().join("photo.png"), 20, 20);

    let out = run(tmp.path(), &["photo.png", "--width", "100000", "--height", "100000"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("❌ Error loading config: "));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[cfg(unix)]
#[test]
fn non_utf8_input_name_is_preserved_in_derived_output() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().unwrap();
    let input = OsStr::from_bytes(b"caf\xE9.png");
    let source = tmp.path().join(input);
    if std::fs::File::create(&source).is_err() {
        // Filesystem refuses non-UTF-8 names.
        return;
    }
    write_opaque_png(&source, 20, 20);

    let out = Command::new(env!("CARGO_BIN_EXE_fixed-resize"))
        .current_dir(tmp.path())
        .arg(input)
        .output()
        .unwrap();

    assert!(out.status.success(), "{}", stdout(&out));
    assert!(tmp.path().join(OsStr::from_bytes(b"caf\xE9_512x512.png")).exists());
    assert!(!tmp.path().join("caf\u{FFFD}_512x512.png").exists());
}
