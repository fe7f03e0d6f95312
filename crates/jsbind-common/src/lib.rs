//! Common types and utilities for the jsbind binding protocol.
//!
//! This crate provides the foundational types used across all jsbind crates:
//! - Name interning (`Name`, `NameTable`, process-wide registry)
//! - Source spans (`Span`)
//! - Erased target-language expressions (`Erased`)
//! - Diagnostic types with stable numeric codes

// Name interning for property-name identity
pub mod name;
pub use name::{Name, NameTable, global_names, intern, resolve};

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Erased dotted-path / JavaScript expressions
pub mod erased;
pub use erased::Erased;

// Translator diagnostics
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage};
