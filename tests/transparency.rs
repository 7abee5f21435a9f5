use std::fs;

use favforge::{TransparencyParams, make_paths_transparent, make_transparent};
use image::{Rgb, RgbImage, Rgba, RgbaImage};

fn logo() -> RgbaImage {
    RgbaImage::from_fn(8, 8, |x, _| {
        if x < 4 {
            Rgba([250, 248, 245, 255])
        } else {
            Rgba([30, 30, 30, 255])
        }
    })
}

#[test]
fn rewrites_only_near_white_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo-transparent.png");
    logo().save(&input).unwrap();

    let stats = make_transparent(&input, Some(&output), 240).unwrap();
    assert_eq!(stats.pixels, 64);
    assert_eq!(stats.replaced, 32);

    let out = image::open(&output).unwrap().to_rgba8();
    for (x, _, px) in out.enumerate_pixels() {
        if x < 4 {
            assert_eq!(px, &Rgba([255, 255, 255, 0]));
        } else {
            assert_eq!(px, &Rgba([30, 30, 30, 255]));
        }
    }
    // Input untouched when an output path is given
    let original = image::open(&input).unwrap().to_rgba8();
    assert_eq!(original, logo());
}

#[test]
fn rgb_input_gains_an_alpha_channel() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.png");
    RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]))
        .save(&input)
        .unwrap();

    make_transparent(&input, None, 240).unwrap();

    let out = image::open(&input).unwrap();
    assert!(out.color().has_alpha());
    assert!(out.to_rgba8().pixels().all(|p| p.0[3] == 0));
}

#[test]
fn mixed_files_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    let main_logo = dir.path().join("nbacd.png");
    logo().save(&main_logo).unwrap();

    let icons = dir.path().join("icons");
    fs::create_dir(&icons).unwrap();
    logo().save(icons.join("favicon-16x16.png")).unwrap();
    logo().save(icons.join("favicon-32x32.png")).unwrap();
    fs::write(icons.join("site.webmanifest"), "{}").unwrap();

    let paths = vec![main_logo, icons, dir.path().join("missing.png")];
    let report = make_paths_transparent(&paths, &TransparencyParams::default()).unwrap();

    assert_eq!(report.processed, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 1);
    assert_eq!(report.stats.replaced, 3 * 32);
}

#[test]
fn content_decides_the_decoder_not_the_extension() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("logo.png");
    logo().save(&saved).unwrap();
    let bare = dir.path().join("logo");
    fs::rename(&saved, &bare).unwrap();

    let stats = make_transparent(&bare, None, 240).unwrap();
    assert_eq!(stats.replaced, 32);
}
