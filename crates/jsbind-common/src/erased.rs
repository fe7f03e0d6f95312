//! Erased target-language expressions.
//!
//! An `Erased` value is a fragment of the dynamic runtime's own syntax — a
//! dotted property path like `Object.prototype.valueOf`, a receiver-rooted
//! access like `x.valueOf`, or a literal. It is what every protocol
//! construct ultimately lowers to. Once a value is `Erased`, no trace of
//! the host type system remains, and erasing it again is a no-op.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An already-lowered expression in the target runtime's syntax.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Erased(String);

impl Erased {
    /// Wrap an expression string.
    pub fn new(expr: impl Into<String>) -> Self {
        Erased(expr.into())
    }

    /// The boolean literal `true` (statically-decided instance checks).
    pub fn true_literal() -> Self {
        Erased("true".to_string())
    }

    /// A bare global reference: resolves against the implicit global object.
    pub fn global(name: &str) -> Self {
        Erased(name.to_string())
    }

    /// A property access on this expression: `self.name`.
    #[must_use]
    pub fn property(&self, name: &str) -> Self {
        let mut expr = String::with_capacity(self.0.len() + 1 + name.len());
        expr.push_str(&self.0);
        expr.push('.');
        expr.push_str(name);
        Erased(expr)
    }

    /// The expression text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the expression text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Erased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Erased {
    fn from(expr: &str) -> Self {
        Erased(expr.to_string())
    }
}
