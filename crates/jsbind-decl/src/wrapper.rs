//! Wrapper categories and prototype modeling.
//!
//! Each declared type stands in for one conceptual category of
//! target-runtime object. Prototype wrappers are the one place host
//! subtyping deliberately mirrors the runtime's dynamic inheritance: a
//! prototype wrapper records which type it wraps and extends the prototype
//! wrapper of that type's conceptual supertype, one level at a time. The
//! relationship is an explicit embedded reference, not implementation
//! inheritance.

use serde::Serialize;
use std::fmt;

use crate::graph::TypeId;

/// The conceptual target-runtime category a wrapper type stands in for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WrapperKind {
    /// A generic runtime object.
    Object,
    /// A callable object.
    Callable,
    /// A class-like object (constructible, carries statics).
    ClassLike,
    /// A collection-like object. Element typing is a host-side phantom
    /// parameter and never affects erased output.
    Collection,
    /// The member set inherited along the runtime prototype chain of the
    /// wrapped type.
    Prototype {
        /// The type whose prototype this wrapper models.
        of: TypeId,
    },
}

impl WrapperKind {
    /// Whether this is a prototype wrapper.
    #[inline]
    pub fn is_prototype(self) -> bool {
        matches!(self, WrapperKind::Prototype { .. })
    }
}

impl fmt::Display for WrapperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WrapperKind::Object => "object",
            WrapperKind::Callable => "callable",
            WrapperKind::ClassLike => "class-like",
            WrapperKind::Collection => "collection",
            WrapperKind::Prototype { .. } => "prototype",
        };
        f.write_str(text)
    }
}
