//! Erasure classification markers.
//!
//! Every declared type, member field owner, and constructor carries a
//! marker telling the translator how to treat it when lowering. The marker
//! is the authoritative classification; the directive channel
//! (`crate::directive`) restates it in annotation form and is validated
//! against it.

use serde::Serialize;
use std::fmt;

/// How the translator must treat a declared construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Marker {
    /// Stands in for a real target-runtime object category. Its instances'
    /// members may be resolved to expressions, but the type itself must
    /// never be materialized in output.
    Opaque,
    /// Exists only for the host type checker or to carry protocol metadata
    /// (names, members). Must never be referenced from erasable code.
    Internal,
    /// A constructor whose only job is to re-view a value at zero cost.
    /// The translator deletes the call, keeping the single argument.
    TransparentCast,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Marker::Opaque => "opaque",
            Marker::Internal => "internal",
            Marker::TransparentCast => "transparent-cast",
        };
        f.write_str(text)
    }
}
