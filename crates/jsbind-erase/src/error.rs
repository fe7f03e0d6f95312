//! The erasure error taxonomy.
//!
//! Every variant is a build-time defect in the declaration graph or its
//! use. None is recoverable: the translator must stop and report, never
//! degrade to best-effort output, because a silently mislowered program
//! would not match the dynamic runtime's actual semantics.

use thiserror::Error;

use jsbind_common::diagnostics::codes;
use jsbind_common::{Diagnostic, Span};

/// A fatal translation-time error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EraseError {
    /// A member field's declared name disagrees with its member's name.
    #[error("field `{field}` declares a member named `{member}`; the names must match")]
    NamingInvariantViolation {
        field: String,
        member: String,
        span: Span,
    },

    /// An internal-only construct is referenced from erasable code.
    #[error("internal construct `{construct}` must not be referenced from erasable code")]
    InternalLeakage { construct: String, span: Span },

    /// An opaque type is materialized as a value.
    #[error("opaque type `{ty}` must not be materialized as a value")]
    OpaqueReification { ty: String, span: Span },

    /// A construct used in a position the protocol defines no rule for.
    #[error("no erasure rule for {kind} `{detail}`")]
    UnrecognizedConstruct {
        kind: &'static str,
        detail: String,
        span: Span,
    },

    /// A declaration's directive disagrees with its actual shape.
    #[error("directive `{directive}` does not match the shape of `{decl}`")]
    DirectiveMismatch {
        directive: String,
        decl: String,
        span: Span,
    },

    /// The declaration graph failed validation before any erasure was
    /// attempted. Carries every collected violation.
    #[error("declaration graph is invalid ({} violation(s))", .diagnostics.len())]
    InvalidGraph { diagnostics: Vec<Diagnostic> },
}

impl EraseError {
    /// The stable diagnostic code for this error.
    pub fn code(&self) -> u32 {
        match self {
            EraseError::NamingInvariantViolation { .. } => codes::NAMING_INVARIANT_VIOLATION,
            EraseError::InternalLeakage { .. } => codes::INTERNAL_LEAKAGE,
            EraseError::OpaqueReification { .. } => codes::OPAQUE_REIFICATION,
            EraseError::UnrecognizedConstruct { .. } => codes::UNRECOGNIZED_CONSTRUCT,
            EraseError::DirectiveMismatch { .. } => codes::DIRECTIVE_MISMATCH,
            EraseError::InvalidGraph { diagnostics } => diagnostics
                .first()
                .map(|d| d.code)
                .unwrap_or(codes::UNRECOGNIZED_CONSTRUCT),
        }
    }

    /// The span of the offending construct, if any.
    pub fn span(&self) -> Span {
        match self {
            EraseError::NamingInvariantViolation { span, .. }
            | EraseError::InternalLeakage { span, .. }
            | EraseError::OpaqueReification { span, .. }
            | EraseError::UnrecognizedConstruct { span, .. }
            | EraseError::DirectiveMismatch { span, .. } => *span,
            EraseError::InvalidGraph { .. } => Span::EMPTY,
        }
    }

    /// Render as a translator diagnostic against `file`.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        if let EraseError::InvalidGraph { diagnostics } = self
            && let Some(first) = diagnostics.first()
        {
            return first.clone();
        }
        Diagnostic::error(file.to_string(), self.span(), self.to_string(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let err = EraseError::OpaqueReification {
            ty: "JsObject".to_string(),
            span: Span::new(3, 8),
        };
        assert_eq!(err.code(), codes::OPAQUE_REIFICATION);
        let diag = err.to_diagnostic("bindings.rs");
        assert_eq!(diag.code, codes::OPAQUE_REIFICATION);
        assert_eq!(diag.span, Span::new(3, 8));
        assert!(diag.message_text.contains("JsObject"));
    }
}
