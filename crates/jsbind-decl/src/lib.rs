//! Declaration model for the jsbind binding protocol.
//!
//! A declaration graph is built once, at host-program load time, by
//! composing interned names into qualified members and tagging declared
//! types with erasure markers. Nothing in this crate executes against the
//! dynamic runtime; the graph exists to be walked by a translator and
//! lowered into dotted-path expressions.

// Qualified members and their evaluator
pub mod member;
pub use member::Member;

// Opaque / internal / transparent-cast classification
pub mod marker;
pub use marker::Marker;

// The machine-checkable documentation directive channel
pub mod directive;
pub use directive::{Directive, DirectiveError};

// Wrapper categories and prototype modeling
pub mod wrapper;
pub use wrapper::WrapperKind;

// The declaration graph: types, member fields, casting constructors
pub mod graph;
pub use graph::{CtorDecl, CtorId, DeclGraph, FieldDecl, FieldId, Placement, TypeDecl, TypeId};

// Build-time graph validation (naming invariant, qualifier placement,
// prototype shape, directive agreement)
pub mod validate;
pub use validate::{find_directive_mismatch, find_naming_violation, validate};
