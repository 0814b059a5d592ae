//! Output normalization for model replies.
//!
//! Two composable steps applied to a successful raw reply:
//! - [`normalize`] strips markdown so the text reads cleanly in the UI and
//!   through speech synthesis.
//! - [`extract_json`] / [`extract_as`] pull the first balanced JSON array or
//!   object out of the *raw* reply for operations that expect structure.

pub mod error;
pub mod extract;
pub mod markdown;

pub use error::ParseError;
pub use extract::{extract_as, extract_json};
pub use markdown::{format_for_display, normalize};

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an operation expects the model to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    FreeText,
    JsonArray,
    JsonObject,
}

impl ResponseShape {
    /// Opening and closing bracket for structured shapes.
    pub fn brackets(&self) -> Option<(char, char)> {
        match self {
            ResponseShape::FreeText => None,
            ResponseShape::JsonArray => Some(('[', ']')),
            ResponseShape::JsonObject => Some(('{', '}')),
        }
    }

    pub fn is_structured(&self) -> bool {
        self.brackets().is_some()
    }
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResponseShape::FreeText => "free text",
            ResponseShape::JsonArray => "JSON array",
            ResponseShape::JsonObject => "JSON object",
        })
    }
}
