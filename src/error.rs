//! Structured error types for the rendering engine.
//!
//! The shaping, ordering and segmentation core is total and never fails;
//! errors only arise at the edges: parsing record JSON and loading the
//! header logo.

use thiserror::Error;

/// The unified error type returned by the fallible public API.
#[derive(Debug, Error)]
pub enum RencanaError {
    /// JSON input failed to parse as a lesson record.
    #[error("failed to parse record JSON: {source}{}", display_hint(.hint))]
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// The logo could not be read or decoded.
    #[error("image error: {0}")]
    Image(String),
}

fn display_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl From<serde_json::Error> for RencanaError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the record schema. Check field names and types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input, is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        RencanaError::Parse { source: e, hint }
    }
}
