//! jsbind: a static-type-to-dynamic-property binding protocol.
//!
//! Declare, in Rust, a catalogue of object types and members that exist
//! only in a separately executed JavaScript runtime, such that an external
//! source-to-source translator can erase every declaration into a plain
//! property-access expression — leaving no trace of the host type system
//! in the generated output.
//!
//! The protocol engine lives in three crates, re-exported here:
//!
//! - [`common`] — name interning, spans, erased expressions, diagnostics
//! - [`decl`] — qualified members, markers, directives, the declaration
//!   graph and its validator
//! - [`erase`] — the translator-facing erasure engine
//!
//! [`catalog`] holds a representative declaration catalog for the core
//! JavaScript object model; real deployments supply their own, typically
//! far larger, catalogs as pure data.

pub use jsbind_catalog as catalog;
pub use jsbind_common as common;
pub use jsbind_decl as decl;
pub use jsbind_erase as erase;

// Convenience re-exports of the types nearly every consumer touches.
pub use jsbind_common::{Diagnostic, Erased, Name, Span, intern, resolve};
pub use jsbind_decl::{DeclGraph, Directive, Marker, Member, WrapperKind, validate};
pub use jsbind_erase::{Construct, EraseError, Eraser};

mod tracing_config;
pub use tracing_config::init_tracing;
