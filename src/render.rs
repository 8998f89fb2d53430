//! Rasterize raw module grids into images the decoder can read.
//!
//! The decoder only consumes pixel data, so a caller holding a bare boolean
//! grid (one entry per module) gets it scaled up and wrapped in a quiet zone
//! here before going through the same path as a loaded image file.

use image::{GrayImage, Luma};

use crate::models::{ModuleGrid, ScanOutcome};
use crate::reader::{self, ScanOptions};

/// Quiet-zone width in modules on every side of the symbol
pub const QUIET_ZONE: u32 = 4;
/// Rendered pixel width of a single module
pub const MODULE_SIZE: u32 = 10;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

/// Render a module grid as a grayscale image.
///
/// Dark modules become `MODULE_SIZE`-pixel black squares on a white
/// background with a `QUIET_ZONE`-module border, so each output axis is
/// `(modules + 2 * QUIET_ZONE) * MODULE_SIZE` pixels.
pub fn rasterize(grid: &ModuleGrid) -> GrayImage {
    let width = (grid.width() as u32 + 2 * QUIET_ZONE) * MODULE_SIZE;
    let height = (grid.height() as u32 + 2 * QUIET_ZONE) * MODULE_SIZE;
    let mut img = GrayImage::from_pixel(width, height, LIGHT);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.get(x, y) {
                continue;
            }
            let px = (QUIET_ZONE + x as u32) * MODULE_SIZE;
            let py = (QUIET_ZONE + y as u32) * MODULE_SIZE;
            for dy in 0..MODULE_SIZE {
                for dx in 0..MODULE_SIZE {
                    img.put_pixel(px + dx, py + dy, DARK);
                }
            }
        }
    }

    img
}

/// Rasterize a module grid and run it through the Aztec decoder.
///
/// Same contract as [`crate::decode_image`]: failures come back inside the
/// outcome, never as `Err`.
pub fn decode_modules(grid: &ModuleGrid, options: ScanOptions) -> ScanOutcome {
    let img = rasterize(grid);
    if options.verbose {
        eprintln!(
            "Rendered {}x{} modules to {}x{} image",
            grid.width(),
            grid.height(),
            img.width(),
            img.height()
        );
    }
    let (width, height) = img.dimensions();
    reader::decode_luma(img.into_raw(), width, height, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterized_dimensions() {
        let grid = ModuleGrid::new(23, 23);
        let img = rasterize(&grid);
        let expected = (23 + 2 * QUIET_ZONE) * MODULE_SIZE;
        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
    }

    #[test]
    fn test_quiet_zone_only_for_empty_grid() {
        let img = rasterize(&ModuleGrid::new(0, 0));
        assert_eq!(img.width(), 2 * QUIET_ZONE * MODULE_SIZE);
        assert!(img.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_module_placement() {
        let mut grid = ModuleGrid::new(3, 3);
        grid.set(1, 2, true);
        let img = rasterize(&grid);

        // center pixel of the lit module
        let px = (QUIET_ZONE + 1) * MODULE_SIZE + MODULE_SIZE / 2;
        let py = (QUIET_ZONE + 2) * MODULE_SIZE + MODULE_SIZE / 2;
        assert_eq!(img.get_pixel(px, py)[0], 0);

        // neighbors and quiet zone stay white
        assert_eq!(img.get_pixel(px - MODULE_SIZE, py)[0], 255);
        assert_eq!(img.get_pixel(0, 0)[0], 255);

        // exactly one module's worth of dark pixels
        let dark = img.pixels().filter(|p| p[0] == 0).count();
        assert_eq!(dark, (MODULE_SIZE * MODULE_SIZE) as usize);
    }
}
