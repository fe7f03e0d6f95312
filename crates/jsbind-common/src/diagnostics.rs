//! Diagnostic types and message lookup for the binding protocol.
//!
//! Every protocol failure is a build-time diagnostic with a stable numeric
//! code; there is no runtime error category because the protocol never
//! executes. The translator is expected to surface these verbatim and abort.

use serde::Serialize;

use crate::span::Span;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Message = 2,
}

/// Stable diagnostic codes for the protocol's error taxonomy.
pub mod codes {
    /// A member field's declared name does not match its member's name.
    pub const NAMING_INVARIANT_VIOLATION: u32 = 2001;
    /// An internal-only construct is referenced from erasable code.
    pub const INTERNAL_LEAKAGE: u32 = 2002;
    /// An opaque type is materialized as a value.
    pub const OPAQUE_REIFICATION: u32 = 2003;
    /// A construct with no defined erasure rule.
    pub const UNRECOGNIZED_CONSTRUCT: u32 = 2004;
    /// A declaration's directive disagrees with its actual shape.
    pub const DIRECTIVE_MISMATCH: u32 = 2005;
    /// An instance member field whose member has no qualifier, or a
    /// static member field whose member has one.
    pub const QUALIFIER_PLACEMENT: u32 = 2006;
    /// A prototype wrapper that does not extend its supertype's prototype.
    pub const PROTOTYPE_SHAPE: u32 = 2007;
}

/// A diagnostic message definition with code, category, and template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// All protocol diagnostic messages. Templates use `{0}`, `{1}`, etc.
pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: codes::NAMING_INVARIANT_VIOLATION,
        category: DiagnosticCategory::Error,
        message: "Field '{0}' declares a member named '{1}'; the declared field name must equal the member name.",
    },
    DiagnosticMessage {
        code: codes::INTERNAL_LEAKAGE,
        category: DiagnosticCategory::Error,
        message: "Internal construct '{0}' must not be referenced from erasable code.",
    },
    DiagnosticMessage {
        code: codes::OPAQUE_REIFICATION,
        category: DiagnosticCategory::Error,
        message: "Opaque type '{0}' must not be materialized as a value; only its members may be accessed.",
    },
    DiagnosticMessage {
        code: codes::UNRECOGNIZED_CONSTRUCT,
        category: DiagnosticCategory::Error,
        message: "No erasure rule is defined for '{0}'.",
    },
    DiagnosticMessage {
        code: codes::DIRECTIVE_MISMATCH,
        category: DiagnosticCategory::Error,
        message: "Directive '{0}' on '{1}' does not match the declaration's actual shape.",
    },
    DiagnosticMessage {
        code: codes::QUALIFIER_PLACEMENT,
        category: DiagnosticCategory::Error,
        message: "Member field '{0}' has the wrong qualifier placement: {1}.",
    },
    DiagnosticMessage {
        code: codes::PROTOTYPE_SHAPE,
        category: DiagnosticCategory::Error,
        message: "Prototype wrapper '{0}' must extend the prototype wrapper of its supertype.",
    },
];

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Format a diagnostic message by replacing `{0}`, `{1}`, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// Related information for a diagnostic (e.g. where a type was declared).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub file: String,
    pub span: Span,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

/// A protocol diagnostic with optional related information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub span: Span,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Related spans (e.g. the declaration a use conflicts with)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub const fn error(file: String, span: Span, message: String, code: u32) -> Self {
        Self {
            file,
            span,
            message_text: message,
            category: DiagnosticCategory::Error,
            code,
            related_information: Vec::new(),
        }
    }

    /// Create an error diagnostic from a registered code and its arguments.
    ///
    /// Falls back to the raw arguments if the code is unregistered, so a
    /// lookup failure can never mask the underlying error.
    #[must_use]
    pub fn from_code(file: impl Into<String>, span: Span, code: u32, args: &[&str]) -> Self {
        let message = match get_diagnostic_message(code) {
            Some(def) => format_message(def.message, args),
            None => args.join(", "),
        };
        Self::error(file.into(), span, message, code)
    }

    /// Add related information to this diagnostic.
    #[must_use]
    pub fn with_related(mut self, file: String, span: Span, message: String) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            file,
            span,
            message_text: message,
            category: DiagnosticCategory::Message,
            code: 0,
        });
        self
    }
}
