//! Extension icon generator
//!
//! Draws a placeholder icon (a gradient circle with a simplified building)
//! at each requested size. With the `raster` feature the icons are PNG files;
//! without it, or when SVG is requested explicitly, the same composition is
//! written as SVG markup.

#[cfg(feature = "raster")]
mod raster;
mod svg;

#[cfg(feature = "raster")]
pub use raster::{render_png, render_raster};
pub use svg::{render_svg, SvgLayout};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while generating icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "raster")]
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for icon operations
pub type IconResult<T> = Result<T, IconError>;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` notation
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Gradient start, also used for the windows
pub const PRIMARY: Rgb = Rgb(103, 126, 234);

/// Gradient end, also used for outlines
pub const SECONDARY: Rgb = Rgb(118, 75, 162);

/// Smallest size that gets the detailed building glyph
pub const BUILDING_MIN_SIZE: u32 = 48;

/// Foreground symbol drawn over the circle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Building outline with a 2x2 window grid
    Building,
    /// Plain white square, for sizes too small for detail
    Block,
}

/// Parameters of one icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub background: (Rgb, Rgb),
    pub glyph: Glyph,
}

impl IconSpec {
    /// The standard icon at `size` pixels
    pub fn for_size(size: u32) -> Self {
        let glyph = if size >= BUILDING_MIN_SIZE {
            Glyph::Building
        } else {
            Glyph::Block
        };

        Self {
            size,
            background: (PRIMARY, SECONDARY),
            glyph,
        }
    }
}

/// Output format of the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconFormat {
    Png,
    Svg,
}

impl IconFormat {
    /// PNG when raster drawing is compiled in, SVG otherwise
    pub fn preferred() -> Self {
        if cfg!(feature = "raster") {
            Self::Png
        } else {
            Self::Svg
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// File name used for an icon of the given size and format
pub fn icon_filename(size: u32, format: IconFormat) -> String {
    format!("icon{}.{}", size, format.extension())
}

/// Generates one icon per size into `out_dir`, overwriting existing files
///
/// Requesting PNG from a build without the `raster` feature falls back to SVG.
///
/// # Returns
///
/// The paths of the written files, in `sizes` order
pub fn generate_icons(out_dir: &Path, sizes: &[u32], format: IconFormat) -> IconResult<Vec<PathBuf>> {
    let format = if format == IconFormat::Png && IconFormat::preferred() == IconFormat::Svg {
        tracing::warn!("Raster drawing is not available in this build; writing SVG icons instead");
        IconFormat::Svg
    } else {
        format
    };

    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let spec = IconSpec::for_size(size);
        let path = out_dir.join(icon_filename(size, format));
        write_icon(&spec, &path, format)?;
        tracing::info!("Icon created: {} ({}x{})", path.display(), size, size);
        written.push(path);
    }

    Ok(written)
}

fn write_icon(spec: &IconSpec, path: &Path, format: IconFormat) -> IconResult<()> {
    match format {
        #[cfg(feature = "raster")]
        IconFormat::Png => raster::save_png(spec, path),
        _ => {
            fs::write(path, render_svg(spec.size))?;
            Ok(())
        }
    }
}
