//! Mutation acknowledgements
//!
//! The employee backend answers create, update and delete with a plain-text
//! body rather than JSON. The text is kept verbatim but typed, so it is not
//! confused with other strings on the client side.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Plain-text confirmation returned by a successful mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confirmation(String);

impl Confirmation {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the backend sent no usable text
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The confirmation text, or `fallback` when the backend sent none
    pub fn message_or(&self, fallback: &str) -> String {
        if self.is_blank() {
            fallback.to_string()
        } else {
            self.0.trim().to_string()
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Confirmation {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for Confirmation {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
