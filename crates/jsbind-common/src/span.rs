//! Source spans for translator diagnostics.
//!
//! A span is a byte-offset range into whatever host-language source file the
//! translator is currently lowering. The protocol engine never reads source
//! text itself; spans exist so every fatal diagnostic can point at the
//! construct that triggered it.

use serde::Serialize;

/// A byte-offset range in the current source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default)]
pub struct Span {
    /// Start position (byte offset)
    pub start: u32,
    /// Length in bytes
    pub length: u32,
}

impl Span {
    /// The empty span, used for constructs with no source location
    /// (e.g. graph-level validation findings).
    pub const EMPTY: Span = Span {
        start: 0,
        length: 0,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, length: u32) -> Self {
        Span { start, length }
    }

    /// End position (byte offset one past the last byte).
    #[inline]
    pub const fn end(self) -> u32 {
        self.start + self.length
    }

    /// Whether this span carries no location information.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.length == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_end() {
        let span = Span::new(10, 5);
        assert_eq!(span.end(), 15);
        assert!(!span.is_empty());
        assert!(Span::EMPTY.is_empty());
    }
}
