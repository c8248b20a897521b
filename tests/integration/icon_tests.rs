//! Icon generation tests against a real output directory

use std::fs;
use tempfile::TempDir;
use toko_scout::config::Config;
use toko_scout::{generate_icons, IconFormat};

#[test]
fn test_generate_default_svg_icon_set() {
    let temp = TempDir::new().unwrap();
    let out_dir = temp.path().join("chrome-extension").join("icons");
    let sizes = Config::default().icons.sizes;

    let paths = generate_icons(&out_dir, &sizes, IconFormat::Svg).expect("Icon generation failed");

    assert_eq!(paths.len(), 3);
    for size in [16, 48, 128] {
        let svg = fs::read_to_string(out_dir.join(format!("icon{}.svg", size))).unwrap();
        assert!(svg.contains(&format!("viewBox=\"0 0 {} {}\"", size, size)));
        assert!(svg.contains("linearGradient"));
    }
}

#[test]
fn test_regenerating_overwrites() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("icon48.svg");
    fs::write(&target, "stale").unwrap();

    generate_icons(temp.path(), &[48], IconFormat::Svg).unwrap();

    let svg = fs::read_to_string(&target).unwrap();
    assert!(svg.starts_with("<?xml"));
}

#[cfg(feature = "raster")]
#[test]
fn test_generate_default_png_icon_set() {
    let temp = TempDir::new().unwrap();
    let paths = generate_icons(temp.path(), &[16, 48, 128], IconFormat::preferred()).unwrap();

    for (path, size) in paths.iter().zip([16u32, 48, 128]) {
        assert_eq!(path, &temp.path().join(format!("icon{}.png", size)));
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }
}
