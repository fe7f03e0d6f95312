//! Translator-facing erasure engine for the jsbind binding protocol.
//!
//! The engine consumes the host constructs the protocol defines rules for
//! and rewrites each into an expression in the dynamic runtime's own
//! syntax. The relation is pure: it branches only on the static syntactic
//! shape of a construct, never on runtime values, so it is deterministic
//! and total over the permitted construct set. Anything outside that set
//! is a fatal diagnostic, never a silent miscompile.

// The host constructs the protocol defines erasure rules for
pub mod construct;
pub use construct::Construct;

// The error taxonomy (all build-time; the protocol never executes)
pub mod error;
pub use error::EraseError;

// The rewriting relation itself
pub mod erase;
pub use erase::Eraser;
