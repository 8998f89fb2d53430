//! Bridge to the external `rxing` decoder.
//!
//! Everything hard about Aztec decoding (finder location, error correction,
//! bit-stream parsing) happens inside `rxing`; this module only prepares the
//! image, sets the reader hints, and flattens the library's result or error
//! into a [`ScanOutcome`].

use std::collections::HashMap;
use std::path::Path;

use image::DynamicImage;
use rxing::{BarcodeFormat, DecodeHintType, DecodeHintValue, DecodingHintDictionary, RXingResult};
use thiserror::Error;

use crate::models::{Position, ScanOutcome};

/// Failures on the way into the decoder.
///
/// These never escape the public entry points; they exist so every failure
/// is flattened into [`ScanOutcome::failure`] at exactly one place with a
/// consistent message.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The image file could not be opened or parsed
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),
    /// The decoder found no Aztec symbol
    #[error("No Aztec barcode detected in image")]
    NoBarcode,
}

/// Options shared by all decode entry points
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Print diagnostic output to stderr while decoding
    pub verbose: bool,
}

impl ScanOptions {
    /// Options with the verbose flag set as given
    pub fn verbose(enabled: bool) -> Self {
        Self { verbose: enabled }
    }
}

/// Decode an Aztec barcode from an image file.
///
/// Never returns `Err`: load and decode failures come back as a
/// [`ScanOutcome`] with `success == false` and a message in `error`.
pub fn decode_image<P: AsRef<Path>>(path: P, options: ScanOptions) -> ScanOutcome {
    let img = match image::open(path.as_ref()) {
        Ok(img) => img,
        Err(err) => return ScanOutcome::failure(ScanError::from(err).to_string()),
    };
    if options.verbose {
        eprintln!(
            "Image loaded: {}x{}, mode={:?}",
            img.width(),
            img.height(),
            img.color()
        );
    }
    decode_dynamic(&img, options)
}

/// Decode an Aztec barcode from an already-loaded image
pub fn decode_dynamic(img: &DynamicImage, options: ScanOptions) -> ScanOutcome {
    let luma = img.to_luma8();
    if options.verbose && img.color() != image::ColorType::L8 {
        eprintln!("Converted to 8-bit luma");
    }
    let (width, height) = luma.dimensions();
    decode_luma(luma.into_raw(), width, height, options)
}

/// Run the decoder over a raw 8-bit luma buffer
pub(crate) fn decode_luma(
    luma: Vec<u8>,
    width: u32,
    height: u32,
    options: ScanOptions,
) -> ScanOutcome {
    if options.verbose {
        eprintln!("Scanning for Aztec codes...");
    }

    // Kept around only for the verbose any-format rescan on failure
    let rescan = if options.verbose {
        Some(luma.clone())
    } else {
        None
    };

    let mut hints = try_harder_hints();
    match rxing::helpers::detect_in_luma_with_hints(
        luma,
        height,
        width,
        Some(BarcodeFormat::AZTEC),
        &mut hints,
    ) {
        Ok(result) => {
            if options.verbose {
                eprintln!("Format: {}", result.getBarcodeFormat());
            }
            outcome_from_result(&result)
        }
        Err(err) => {
            if options.verbose {
                eprintln!("Decoder reported: {err}");
                if let Some(buffer) = rescan {
                    report_other_formats(buffer, width, height);
                }
            }
            ScanOutcome::failure(ScanError::NoBarcode.to_string())
        }
    }
}

fn try_harder_hints() -> DecodingHintDictionary {
    let mut hints: DecodingHintDictionary = HashMap::new();
    hints.insert(DecodeHintType::TRY_HARDER, DecodeHintValue::TryHarder(true));
    hints
}

/// Rescan without the format restriction so verbose output can name every
/// other symbology present in the image.
fn report_other_formats(luma: Vec<u8>, width: u32, height: u32) {
    match rxing::helpers::detect_multiple_in_luma(luma, height, width) {
        Ok(results) if !results.is_empty() => {
            let formats: Vec<String> = results
                .iter()
                .map(|result| result.getBarcodeFormat().to_string())
                .collect();
            eprintln!("Other barcodes found: {formats:?}");
        }
        _ => eprintln!("No barcodes of any type detected"),
    }
}

fn outcome_from_result(result: &RXingResult) -> ScanOutcome {
    ScanOutcome {
        success: true,
        text: Some(result.getText().to_string()),
        bytes: Some(result.getRawBytes().to_vec()),
        format: Some(result.getBarcodeFormat().to_string()),
        position: position_from_points(result.getPoints()),
        error: None,
    }
}

/// Label the four reported corners geometrically. The decoder does not
/// guarantee any reporting order, so each field is picked by diagonal
/// extremes: x+y splits top-left from bottom-right, x-y splits top-right
/// from bottom-left.
fn position_from_points(points: &[rxing::Point]) -> Option<Position> {
    if points.len() < 4 {
        return None;
    }
    let corners = &points[..4];
    let corner = |p: &rxing::Point| (p.x.round() as i32, p.y.round() as i32);

    let top_left = corners.iter().min_by(|a, b| (a.x + a.y).total_cmp(&(b.x + b.y)))?;
    let bottom_right = corners.iter().max_by(|a, b| (a.x + a.y).total_cmp(&(b.x + b.y)))?;
    let top_right = corners.iter().max_by(|a, b| (a.x - a.y).total_cmp(&(b.x - b.y)))?;
    let bottom_left = corners.iter().min_by(|a, b| (a.x - a.y).total_cmp(&(b.x - b.y)))?;

    Some(Position {
        top_left: corner(top_left),
        top_right: corner(top_right),
        bottom_right: corner(bottom_right),
        bottom_left: corner(bottom_left),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_is_flat_failure() {
        let outcome = decode_image("/definitely/not/here.png", ScanOptions::default());
        assert!(!outcome.success);
        let message = outcome.error.expect("error message");
        assert!(message.starts_with("Failed to load image:"), "{message}");
    }

    #[test]
    fn test_blank_image_has_no_barcode() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(
            64,
            64,
            image::Luma([255u8]),
        ));
        let outcome = decode_dynamic(&img, ScanOptions::default());
        assert!(!outcome.success);
        assert_eq!(
            outcome.error.as_deref(),
            Some("No Aztec barcode detected in image")
        );
    }

    #[test]
    fn test_position_needs_four_points() {
        let points = vec![rxing::Point { x: 1.4, y: 2.6 }];
        assert!(position_from_points(&points).is_none());

        let square: Vec<rxing::Point> = [(0.0, 0.0), (9.6, 0.0), (9.6, 9.6), (0.0, 9.6)]
            .into_iter()
            .map(|(x, y)| rxing::Point { x, y })
            .collect();
        let position = position_from_points(&square).expect("position");
        assert_eq!(position.top_left, (0, 0));
        assert_eq!(position.bottom_right, (10, 10));
    }

    #[test]
    fn test_corner_labels_ignore_report_order() {
        // same square in every rotation of the reporting order
        let corners = [(40.0, 40.0), (190.0, 40.0), (190.0, 190.0), (40.0, 190.0)];
        for shift in 0..4 {
            let points: Vec<rxing::Point> = (0..4)
                .map(|i| corners[(i + shift) % 4])
                .map(|(x, y)| rxing::Point { x, y })
                .collect();
            let position = position_from_points(&points).expect("position");
            assert_eq!(position.top_left, (40, 40), "shift {shift}");
            assert_eq!(position.top_right, (190, 40), "shift {shift}");
            assert_eq!(position.bottom_right, (190, 190), "shift {shift}");
            assert_eq!(position.bottom_left, (40, 190), "shift {shift}");
        }
    }
}
