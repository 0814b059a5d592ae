//! Error types for structured extraction.

use super::ResponseShape;
use thiserror::Error;

/// Why a model reply could not be turned into the expected structure.
///
/// Parse failures are never shown to users: the advisor substitutes the
/// operation's fallback payload.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The reply contains no opening bracket of the expected kind.
    #[error("no {expected} found in model output")]
    NoStructure { expected: ResponseShape },

    /// An opening bracket was found but never closed.
    #[error("unbalanced {expected} in model output")]
    Unbalanced { expected: ResponseShape },

    /// A balanced span was found but it is not valid JSON.
    #[error("invalid JSON in model output: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that does not match the payload type.
    #[error("JSON does not match {target}: {message}")]
    Mismatch { target: &'static str, message: String },

    /// The shape asks for no structure at all.
    #[error("free text has no JSON structure to extract")]
    FreeText,

    /// Nothing left after markdown stripping.
    #[error("model output is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_shape() {
        let e = ParseError::NoStructure {
            expected: ResponseShape::JsonArray,
        };
        assert_eq!(e.to_string(), "no JSON array found in model output");
        let e = ParseError::Unbalanced {
            expected: ResponseShape::JsonObject,
        };
        assert_eq!(e.to_string(), "unbalanced JSON object in model output");
    }
}
