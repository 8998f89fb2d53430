use serde::Serialize;

/// Bounding box of a detected symbol, as reported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Top-left corner in image pixels
    pub top_left: (i32, i32),
    /// Top-right corner in image pixels
    pub top_right: (i32, i32),
    /// Bottom-right corner in image pixels
    pub bottom_right: (i32, i32),
    /// Bottom-left corner in image pixels
    pub bottom_left: (i32, i32),
}

/// Result of a single decode attempt.
///
/// Every decode entry point returns one of these rather than an `Err`:
/// failures carry a human-readable message in `error` and leave the payload
/// fields unset. The JSON rendering always contains all six keys.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Whether a symbol was decoded
    pub success: bool,
    /// Decoded text content
    pub text: Option<String>,
    /// Raw byte payload
    pub bytes: Option<Vec<u8>>,
    /// Symbology name reported by the decoder
    pub format: Option<String>,
    /// Bounding box, when the decoder reported corner points
    pub position: Option<Position>,
    /// Failure message
    pub error: Option<String>,
}

impl ScanOutcome {
    /// A failed outcome carrying only an error message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: None,
            bytes: None,
            format: None,
            position: None,
            error: Some(message.into()),
        }
    }

    /// Raw bytes as lowercase two-digit hex pairs separated by spaces
    pub fn bytes_hex(&self) -> Option<String> {
        self.bytes.as_ref().map(|bytes| {
            bytes
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}
