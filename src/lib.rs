//! aztec-scan - Aztec barcode scanning via the `rxing` decoder
//!
//! A thin library around an external barcode decoder: it loads images (or
//! rasterizes raw module grids), hands them to `rxing` configured for the
//! Aztec symbology, and packages whatever comes back into a flat result
//! record suitable for text, hex, or JSON output.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Value types (scan outcome, bounding box, module grid)
pub mod models;
/// Bridge to the external decoder
pub mod reader;
/// Module-grid rasterization
pub mod render;

pub use models::{ModuleGrid, Position, ScanOutcome};
pub use reader::{decode_image, ScanError, ScanOptions};
pub use render::{decode_modules, rasterize, MODULE_SIZE, QUIET_ZONE};
