//! The host-language constructs the protocol defines erasure rules for.
//!
//! A `Construct` is the translator's view of one use site of the protocol
//! in host source: a cast, an instance check, a constructor call, a member
//! field reference, or a member-evaluator invocation. Each carries a span
//! so every diagnostic can point at the construct that triggered it.

use std::sync::Arc;

use jsbind_common::{Erased, Span};
use jsbind_decl::{CtorId, FieldId, Member, TypeId};

/// One use site of the protocol in host source.
#[derive(Debug, Clone)]
pub enum Construct {
    /// A class-object/type-object reference to a declared type
    /// (the host language's `T.class` / `typeof(T)` equivalent).
    TypeLiteral { ty: TypeId, span: Span },
    /// A cast of `operand` to a declared type.
    Cast {
        ty: TypeId,
        operand: Box<Construct>,
        span: Span,
    },
    /// A runtime type check (`instanceof` equivalent) of `operand`
    /// against a declared type.
    InstanceCheck {
        ty: TypeId,
        operand: Box<Construct>,
        span: Span,
    },
    /// A constructor call on a declared constructor.
    CtorCall {
        ctor: CtorId,
        args: Vec<Construct>,
        span: Span,
    },
    /// A reference to a declared member field.
    FieldRef { field: FieldId, span: Span },
    /// A member-evaluator invocation with no explicit receiver: resolves
    /// against the implicit global object.
    EvalGlobal { member: Arc<Member>, span: Span },
    /// A member-evaluator invocation against an explicit receiver.
    EvalOn {
        member: Arc<Member>,
        receiver: Box<Construct>,
        span: Span,
    },
    /// An expression that is already in the target runtime's syntax.
    /// Erasing it again is a no-op.
    Lowered { expr: Erased, span: Span },
}

impl Construct {
    /// The construct's source span.
    pub fn span(&self) -> Span {
        match self {
            Construct::TypeLiteral { span, .. }
            | Construct::Cast { span, .. }
            | Construct::InstanceCheck { span, .. }
            | Construct::CtorCall { span, .. }
            | Construct::FieldRef { span, .. }
            | Construct::EvalGlobal { span, .. }
            | Construct::EvalOn { span, .. }
            | Construct::Lowered { span, .. } => *span,
        }
    }

    /// A short label for diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Construct::TypeLiteral { .. } => "type literal",
            Construct::Cast { .. } => "cast",
            Construct::InstanceCheck { .. } => "instance check",
            Construct::CtorCall { .. } => "constructor call",
            Construct::FieldRef { .. } => "member field reference",
            Construct::EvalGlobal { .. } => "member evaluation (global)",
            Construct::EvalOn { .. } => "member evaluation (receiver)",
            Construct::Lowered { .. } => "lowered expression",
        }
    }

    /// Wrap an already-lowered expression with no span.
    pub fn lowered(expr: impl Into<Erased>) -> Construct {
        Construct::Lowered {
            expr: expr.into(),
            span: Span::EMPTY,
        }
    }
}
