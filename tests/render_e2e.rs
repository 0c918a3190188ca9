//! End-to-end tests for image to ASCII rendering.
//!
//! These tests cover:
//! - Grid shape (row count, row width, row stride)
//! - Determinism
//! - Solid colors, inversion and the binary policy
//! - Decoding PNG and JPEG files from disk and rendering them

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use artgen::ascii::{
    render, CharSet, LuminancePolicy, PixelBuffer, QuantizePolicy, RenderConfig, RenderError,
    STANDARD_CHARSET,
};
use artgen::image_source::{load_image, ImageSourceError};

/// Helper to create a buffer with the specified pattern.
fn make_buffer(pattern: &str, width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = match pattern {
                "black" => 0,
                "white" => 255,
                // Horizontal gradient: left dark, right bright
                "gradient_h" => ((x as f32 / (width - 1).max(1) as f32) * 255.0) as u8,
                "checker" => {
                    if (x + y) % 2 == 0 {
                        0
                    } else {
                        255
                    }
                }
                other => panic!("unknown pattern {}", other),
            };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    PixelBuffer::new(width, height, data).unwrap()
}

fn config(width: u32) -> RenderConfig {
    RenderConfig {
        output_width: width,
        ..RenderConfig::default()
    }
}

fn rows(art: &str) -> Vec<&str> {
    art.split('\n').collect()
}

fn save_image(dir: &Path, name: &str, img: image::RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

// === Grid shape ===

#[test]
fn test_grid_shape_follows_aspect() {
    let buffer = make_buffer("gradient_h", 200, 100);
    let art = render(&buffer, &config(40)).unwrap();
    let lines = rows(&art);
    // floor(40 * 100/200 * 0.5) = 10
    assert_eq!(lines.len(), 10);
    for line in &lines {
        assert_eq!(line.chars().count(), 40);
    }
    assert!(!art.ends_with('\n'));
}

#[test]
fn test_row_stride_keeps_every_nth_row() {
    let buffer = make_buffer("gradient_h", 100, 100);
    let full = render(&buffer, &config(20)).unwrap();
    let strided = render(
        &buffer,
        &RenderConfig {
            row_stride: 3,
            ..config(20)
        },
    )
    .unwrap();

    let expected: Vec<&str> = rows(&full).into_iter().step_by(3).collect();
    assert_eq!(rows(&strided), expected);
    // 10 grid rows -> rows 0, 3, 6, 9
    assert_eq!(rows(&strided).len(), 4);
}

#[test]
fn test_upsampling_small_image() {
    let buffer = make_buffer("checker", 2, 2);
    let art = render(
        &buffer,
        &RenderConfig {
            aspect_correction: 1.0,
            ramp: vec!['@', ' '],
            ..config(4)
        },
    )
    .unwrap();
    assert_eq!(art, "@@  \n@@  \n  @@\n  @@");
}

#[test]
fn test_too_flat_image_is_an_error() {
    let buffer = make_buffer("white", 100, 1);
    let result = render(&buffer, &config(10));
    assert!(matches!(result, Err(RenderError::InvalidDimensions(_))));
}

// === Glyph selection ===

#[test]
fn test_render_is_deterministic() {
    let buffer = make_buffer("gradient_h", 64, 48);
    let cfg = RenderConfig {
        ramp: CharSet::Detailed.chars(),
        ..config(32)
    };
    assert_eq!(render(&buffer, &cfg).unwrap(), render(&buffer, &cfg).unwrap());
}

#[test]
fn test_solid_colors_use_ramp_ends() {
    let ramp: Vec<char> = STANDARD_CHARSET.to_vec();
    let black = render(&make_buffer("black", 8, 8), &config(8)).unwrap();
    let white = render(&make_buffer("white", 8, 8), &config(8)).unwrap();

    assert!(black.chars().filter(|&c| c != '\n').all(|c| c == ramp[0]));
    assert!(white
        .chars()
        .filter(|&c| c != '\n')
        .all(|c| c == ramp[ramp.len() - 1]));
}

#[test]
fn test_invert_swaps_solid_colors() {
    let inverted = RenderConfig {
        invert: true,
        ..config(8)
    };
    let black = render(&make_buffer("black", 8, 8), &inverted).unwrap();
    let white = render(&make_buffer("white", 8, 8), &config(8)).unwrap();
    assert_eq!(black, white);
}

#[test]
fn test_gradient_rows_walk_the_ramp_in_order() {
    let ramp = CharSet::Standard.chars();
    let buffer = make_buffer("gradient_h", 256, 128);
    let art = render(&buffer, &config(64)).unwrap();

    for line in rows(&art) {
        let indices: Vec<usize> = line
            .chars()
            .map(|c| ramp.iter().position(|&r| r == c).unwrap())
            .collect();
        assert!(indices.windows(2).all(|w| w[0] <= w[1]), "{}", line);
        assert_eq!(indices[0], 0);
        assert!(indices[indices.len() - 1] >= ramp.len() - 2);
    }
}

#[test]
fn test_binary_policy_uses_only_two_glyphs() {
    let cfg = RenderConfig {
        quantize: QuantizePolicy::Binary { threshold: 128.0 },
        ..config(32)
    };
    let art = render(&make_buffer("gradient_h", 64, 64), &cfg).unwrap();
    let used: HashSet<char> = art.chars().filter(|&c| c != '\n').collect();
    let expected: HashSet<char> = ['@', ' '].into_iter().collect();
    assert_eq!(used, expected);
}

#[test]
fn test_output_only_contains_ramp_glyphs() {
    for charset in CharSet::ALL {
        let cfg = RenderConfig {
            ramp: charset.chars(),
            luminance: LuminancePolicy::Uniform,
            ..config(24)
        };
        let art = render(&make_buffer("gradient_h", 48, 48), &cfg).unwrap();
        let ramp: HashSet<char> = charset.chars().into_iter().collect();
        assert!(
            art.chars().filter(|&c| c != '\n').all(|c| ramp.contains(&c)),
            "{}",
            charset.name()
        );
    }
}

// === Files on disk ===

#[test]
fn test_png_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = image::RgbImage::from_pixel(4, 2, image::Rgb([255, 255, 255]));
    img.put_pixel(0, 0, image::Rgb([0, 0, 0]));
    img.put_pixel(1, 0, image::Rgb([0, 0, 0]));
    img.put_pixel(0, 1, image::Rgb([0, 0, 0]));
    img.put_pixel(1, 1, image::Rgb([0, 0, 0]));
    let path = save_image(dir.path(), "half.png", img);

    let buffer = load_image(&path).unwrap();
    assert_eq!((buffer.width(), buffer.height()), (4, 2));

    let cfg = RenderConfig {
        ramp: vec!['#', '.'],
        aspect_correction: 1.0,
        ..config(4)
    };
    assert_eq!(render(&buffer, &cfg).unwrap(), "##..\n##..");
}

#[test]
fn test_jpeg_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_image(
        dir.path(),
        "dark.jpeg",
        image::RgbImage::from_pixel(16, 16, image::Rgb([0, 0, 0])),
    );

    let buffer = load_image(&path).unwrap();
    let art = render(&buffer, &config(8)).unwrap();
    assert_eq!(art, "@@@@@@@@\n@@@@@@@@\n@@@@@@@@\n@@@@@@@@");
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("art.gif");
    std::fs::write(&path, b"GIF89a").unwrap();
    assert!(matches!(
        load_image(&path),
        Err(ImageSourceError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_corrupt_png_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(matches!(load_image(&path), Err(ImageSourceError::Decode(_))));
}
