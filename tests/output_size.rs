use std::path::PathBuf;

use covergen::output::{MAX_OUTPUT_BYTES, save_with_size_limit};
use image::{ImageBuffer, Rgb};

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[test]
fn oversized_png_falls_back_to_jpeg() {
    let dir = PathBuf::from("target").join("output_size");
    std::fs::create_dir_all(&dir).unwrap();
    let png = dir.join("noise.png");
    let jpg = dir.join("noise.jpg");
    let _ = std::fs::remove_file(&png);
    let _ = std::fs::remove_file(&jpg);

    // Deterministic per-pixel noise is incompressible, so the full-size PNG
    // cannot dip under the ceiling.
    let img = ImageBuffer::from_fn(covergen::WIDTH, covergen::HEIGHT, |x, y| {
        let h = mix64((u64::from(x) << 32) | u64::from(y));
        Rgb([h as u8, (h >> 8) as u8, (h >> 16) as u8])
    });

    let written = save_with_size_limit(&img, &png).unwrap();
    assert_eq!(written, jpg);
    assert!(jpg.exists());
    assert!(!png.exists(), "oversized png should have been removed");
}

#[test]
fn flat_cover_stays_under_the_ceiling_as_png() {
    let dir = PathBuf::from("target").join("output_size");
    std::fs::create_dir_all(&dir).unwrap();
    let png = dir.join("flat.png");
    let _ = std::fs::remove_file(&png);

    let img = ImageBuffer::from_pixel(covergen::WIDTH, covergen::HEIGHT, Rgb([245, 245, 245]));
    let written = save_with_size_limit(&img, &png).unwrap();
    assert_eq!(written, png);
    assert!(std::fs::metadata(&png).unwrap().len() <= MAX_OUTPUT_BYTES);
}
