//! Prompt and image types.

use std::fmt;

use crate::error::{DesignError, DesignResult};
use serde::{Deserialize, Serialize};

/// A trimmed, non-empty design prompt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignPrompt(String);

impl DesignPrompt {
    pub fn new(text: &str) -> DesignResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DesignError::EmptyPrompt);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DesignPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A generated design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignImage {
    /// Prompt the image was generated from.
    pub prompt: DesignPrompt,
    /// Image URI; becomes the cart line's custom design.
    pub url: String,
}
