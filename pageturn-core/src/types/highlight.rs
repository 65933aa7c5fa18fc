//! Headline figures shown in hero sections

use serde::Serialize;

/// A large value with a caption, e.g. "24/7" / "Access"
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

impl Highlight {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}
