//! Move-quality annotations
//!
//! The closed set of markers a user can attach to a played move from the
//! annotation buttons. Kept as an enum rather than a free-form string so the
//! data model stays closed and testable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality marker attached to a timeline entry after the fact
///
/// Serializes as the conventional glyph ("!", "?", "!!") so the history panel
/// and any exported notation can append it directly to the move label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// Good move ("!")
    #[serde(rename = "!")]
    Good,
    /// Mistake ("?")
    #[serde(rename = "?")]
    Mistake,
    /// Brilliant move ("!!")
    #[serde(rename = "!!")]
    Brilliant,
}

impl Annotation {
    /// The display glyph for this marker
    pub fn glyph(self) -> &'static str {
        match self {
            Annotation::Good => "!",
            Annotation::Mistake => "?",
            Annotation::Brilliant => "!!",
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
