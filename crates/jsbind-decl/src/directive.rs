//! The directive channel: machine-checkable documentation annotations.
//!
//! Each declaration carries an annotation of the form `@erasure <keyword>`
//! stating, in a fixed vocabulary, which erasure rule applies to it. The
//! translator treats this as a contract, not prose: the keyword is parsed
//! strictly, and a directive that disagrees with the declaration's actual
//! marker or shape fails the build.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::marker::Marker;

/// The annotation tag that introduces a directive.
pub const DIRECTIVE_TAG: &str = "@erasure";

/// A parsed erasure directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Directive {
    /// The declaration is an opaque runtime category.
    Opaque,
    /// The declaration is protocol bookkeeping only.
    Internal,
    /// The constructor call must be deleted, keeping its argument.
    TransparentCast,
    /// The member field lowers to its qualifier-chain dotted path.
    ErasedToPath,
    /// Any reference in erasable code must abort the build.
    MustError,
    /// The construct must vanish from output entirely.
    MustIgnore,
}

/// Directive parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectiveError {
    #[error("empty erasure directive")]
    Empty,
    #[error("unknown erasure directive keyword `{0}`")]
    UnknownKeyword(String),
}

impl Directive {
    /// Parse an annotation. Accepts the bare keyword or the full
    /// `@erasure <keyword>` form; anything outside the fixed vocabulary
    /// is an error.
    pub fn parse(text: &str) -> Result<Directive, DirectiveError> {
        let trimmed = text.trim();
        let keyword = trimmed.strip_prefix(DIRECTIVE_TAG).unwrap_or(trimmed).trim();
        if keyword.is_empty() {
            return Err(DirectiveError::Empty);
        }
        match keyword {
            "opaque" => Ok(Directive::Opaque),
            "internal" => Ok(Directive::Internal),
            "transparent-cast" => Ok(Directive::TransparentCast),
            "erased-to-path" => Ok(Directive::ErasedToPath),
            "must-error" => Ok(Directive::MustError),
            "must-ignore" => Ok(Directive::MustIgnore),
            other => Err(DirectiveError::UnknownKeyword(other.to_string())),
        }
    }

    /// The directive's keyword in the fixed vocabulary.
    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Opaque => "opaque",
            Directive::Internal => "internal",
            Directive::TransparentCast => "transparent-cast",
            Directive::ErasedToPath => "erased-to-path",
            Directive::MustError => "must-error",
            Directive::MustIgnore => "must-ignore",
        }
    }

    /// Whether this directive is a valid restatement of `marker` on a type
    /// or constructor declaration.
    ///
    /// `must-error` is accepted as an alias for `internal` (referencing an
    /// internal construct exits with an error) and `must-ignore` for
    /// `transparent-cast` (the call is dropped from output).
    pub fn agrees_with_marker(self, marker: Marker) -> bool {
        matches!(
            (self, marker),
            (Directive::Opaque, Marker::Opaque)
                | (Directive::Internal, Marker::Internal)
                | (Directive::MustError, Marker::Internal)
                | (Directive::TransparentCast, Marker::TransparentCast)
                | (Directive::MustIgnore, Marker::TransparentCast)
        )
    }

    /// Whether this directive is valid on a member field declaration.
    pub fn valid_on_field(self) -> bool {
        matches!(
            self,
            Directive::ErasedToPath | Directive::Internal | Directive::MustError
        )
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIRECTIVE_TAG} {}", self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_and_tagged() {
        assert_eq!(Directive::parse("opaque"), Ok(Directive::Opaque));
        assert_eq!(
            Directive::parse("@erasure transparent-cast"),
            Ok(Directive::TransparentCast)
        );
        assert_eq!(
            Directive::parse("  @erasure   must-error  "),
            Ok(Directive::MustError)
        );
    }

    #[test]
    fn test_parse_rejects_prose() {
        assert_eq!(Directive::parse(""), Err(DirectiveError::Empty));
        assert_eq!(Directive::parse("@erasure"), Err(DirectiveError::Empty));
        assert!(matches!(
            Directive::parse("this type is opaque-ish"),
            Err(DirectiveError::UnknownKeyword(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for d in [
            Directive::Opaque,
            Directive::Internal,
            Directive::TransparentCast,
            Directive::ErasedToPath,
            Directive::MustError,
            Directive::MustIgnore,
        ] {
            assert_eq!(Directive::parse(&d.to_string()), Ok(d));
        }
    }

    #[test]
    fn test_marker_agreement() {
        assert!(Directive::Opaque.agrees_with_marker(Marker::Opaque));
        assert!(Directive::MustError.agrees_with_marker(Marker::Internal));
        assert!(Directive::MustIgnore.agrees_with_marker(Marker::TransparentCast));
        assert!(!Directive::Opaque.agrees_with_marker(Marker::Internal));
        assert!(!Directive::ErasedToPath.agrees_with_marker(Marker::Opaque));
    }
}
