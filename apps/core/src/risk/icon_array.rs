//! Icon array rendering.
//!
//! Renders a risk probability as a 10x10 pictograph: `round(value)` squares
//! in the affected color, the remainder in gray, saved as a PNG.

use std::path::Path;

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use tracing::{info, warn};

use crate::error::Result;

const GRID: u32 = 10;
const CELL_SIZE: u32 = 30;
const SQUARE_SIZE: u32 = 24;
const IMAGE_SIZE: u32 = GRID * CELL_SIZE;

const COLOR_AFFECTED: Rgb<u8> = Rgb([0x00, 0x72, 0xb2]);
const COLOR_UNAFFECTED: Rgb<u8> = Rgb([0xd3, 0xd3, 0xd3]);
const COLOR_BACKGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Render the icon array for `risk_value` (a 0-100 percentage) to `path`.
///
/// Values outside [0, 100] are clamped before rendering.
pub fn render(risk_value: f64, path: &Path) -> Result<()> {
    let value = if (0.0..=100.0).contains(&risk_value) {
        risk_value
    } else {
        warn!("Risk value {} is outside the 0-100 range. Clamping.", risk_value);
        risk_value.clamp(0.0, 100.0)
    };

    let num_affected = value.round() as u32;
    let margin = (CELL_SIZE - SQUARE_SIZE) / 2;

    let mut img = RgbImage::from_pixel(IMAGE_SIZE, IMAGE_SIZE, COLOR_BACKGROUND);
    for i in 0..GRID * GRID {
        let col = i % GRID;
        let row = i / GRID;
        let color = if i < num_affected {
            COLOR_AFFECTED
        } else {
            COLOR_UNAFFECTED
        };
        let rect = Rect::at(
            (col * CELL_SIZE + margin) as i32,
            (row * CELL_SIZE + margin) as i32,
        )
        .of_size(SQUARE_SIZE, SQUARE_SIZE);
        draw_filled_rect_mut(&mut img, rect, color);
    }

    img.save(path)?;
    info!("Generated icon array at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_renders_png_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("risk_0_icon.png");
        render(25.0, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (IMAGE_SIZE, IMAGE_SIZE));

        // Center of the first cell is affected, center of the last is not.
        let mid = CELL_SIZE / 2;
        assert_eq!(*img.get_pixel(mid, mid), COLOR_AFFECTED);
        let last = IMAGE_SIZE - CELL_SIZE / 2;
        assert_eq!(*img.get_pixel(last, last), COLOR_UNAFFECTED);
    }

    #[test]
    fn test_out_of_range_value_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clamped.png");
        render(250.0, &path).unwrap();

        // Fully affected grid: the last cell is colored too.
        let img = image::open(&path).unwrap().to_rgb8();
        let last = IMAGE_SIZE - CELL_SIZE / 2;
        assert_eq!(*img.get_pixel(last, last), COLOR_AFFECTED);
    }

    #[test]
    fn test_zero_risk_renders_all_gray() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");
        render(0.0, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        let mid = CELL_SIZE / 2;
        assert_eq!(*img.get_pixel(mid, mid), COLOR_UNAFFECTED);
    }
}
