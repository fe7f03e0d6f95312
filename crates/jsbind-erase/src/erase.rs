//! The erasure rewriting relation.
//!
//! `Eraser` validates a declaration graph once, then rewrites constructs
//! into target-runtime expressions. Each rule branches only on the static
//! shape of the construct and the markers of the declarations it touches:
//!
//! - type literal of an opaque type: fatal (opaque types are resolved,
//!   never reified)
//! - cast to an opaque type: the operand, unchanged
//! - instance check against an opaque type: statically `true`
//! - any reference to an internal construct: fatal
//! - transparent-cast constructor call: its single argument
//! - member field reference: the member's qualifier-chain path
//! - member evaluation: the receiver-rooted access
//! - already-lowered expression: itself (idempotence)
//!
//! There is intentionally no fallback for anything else.

use std::fmt;

use jsbind_common::{Erased, Span, resolve};
use jsbind_decl::{
    DeclGraph, Directive, Marker, find_directive_mismatch, find_naming_violation, validate,
};

use crate::construct::Construct;
use crate::error::EraseError;

/// The translator-facing erasure engine for one declaration graph.
pub struct Eraser<'g> {
    graph: &'g DeclGraph,
}

impl<'g> Eraser<'g> {
    /// Create an eraser over `graph`, validating it first. The naming
    /// invariant (and every other graph-shape rule) is rejected here,
    /// before any erasure is attempted. Naming and directive violations
    /// surface as their own error kinds; the remaining graph-shape
    /// findings ride together in `InvalidGraph`.
    pub fn new(graph: &'g DeclGraph) -> Result<Self, EraseError> {
        if let Some(id) = find_naming_violation(graph) {
            let field = graph.field(id);
            return Err(EraseError::NamingInvariantViolation {
                field: resolve(field.declared_name).to_string(),
                member: resolve(field.member.name()).to_string(),
                span: Span::EMPTY,
            });
        }
        if let Some((directive, name)) = find_directive_mismatch(graph) {
            return Err(EraseError::DirectiveMismatch {
                directive: directive.keyword().to_string(),
                decl: resolve(name).to_string(),
                span: Span::EMPTY,
            });
        }
        validate(graph).map_err(|diagnostics| EraseError::InvalidGraph { diagnostics })?;
        Ok(Eraser { graph })
    }

    /// The validated graph.
    #[inline]
    pub fn graph(&self) -> &DeclGraph {
        self.graph
    }

    /// Rewrite one construct into a target-runtime expression.
    pub fn erase(&self, construct: &Construct) -> Result<Erased, EraseError> {
        tracing::trace!(construct = construct.label(), "erase");
        match construct {
            // Idempotence: an already-lowered expression passes through.
            Construct::Lowered { expr, .. } => Ok(expr.clone()),

            Construct::TypeLiteral { ty, span } => {
                let decl = self.graph.ty(*ty);
                match decl.marker {
                    Marker::Internal => Err(EraseError::InternalLeakage {
                        construct: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                    Marker::Opaque => Err(EraseError::OpaqueReification {
                        ty: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                    Marker::TransparentCast => Err(EraseError::UnrecognizedConstruct {
                        kind: construct.label(),
                        detail: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                }
            }

            Construct::Cast { ty, operand, span } => {
                let decl = self.graph.ty(*ty);
                match decl.marker {
                    Marker::Internal => Err(EraseError::InternalLeakage {
                        construct: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                    // The cast vanishes; only the operand survives.
                    Marker::Opaque => self.erase(operand),
                    Marker::TransparentCast => Err(EraseError::UnrecognizedConstruct {
                        kind: construct.label(),
                        detail: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                }
            }

            Construct::InstanceCheck { ty, operand, span } => {
                let decl = self.graph.ty(*ty);
                match decl.marker {
                    Marker::Internal => Err(EraseError::InternalLeakage {
                        construct: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                    Marker::Opaque => {
                        // Statically true. The operand is still erased so a
                        // violation buried inside it cannot slip through,
                        // but its value is discarded.
                        let _ = self.erase(operand)?;
                        Ok(Erased::true_literal())
                    }
                    Marker::TransparentCast => Err(EraseError::UnrecognizedConstruct {
                        kind: construct.label(),
                        detail: resolve(decl.name).to_string(),
                        span: *span,
                    }),
                }
            }

            Construct::CtorCall { ctor, args, span } => {
                let decl = self.graph.ctor(*ctor);
                let owner = resolve(self.graph.ty(decl.owner).name);
                match decl.marker {
                    Marker::Internal => Err(EraseError::InternalLeakage {
                        construct: format!("{owner} constructor"),
                        span: *span,
                    }),
                    Marker::TransparentCast => match args.as_slice() {
                        // The call is deleted; only the argument survives.
                        [arg] => self.erase(arg),
                        _ => Err(EraseError::UnrecognizedConstruct {
                            kind: construct.label(),
                            detail: format!(
                                "transparent cast `{owner}` takes exactly one argument, got {}",
                                args.len()
                            ),
                            span: *span,
                        }),
                    },
                    Marker::Opaque => Err(EraseError::UnrecognizedConstruct {
                        kind: construct.label(),
                        detail: owner.to_string(),
                        span: *span,
                    }),
                }
            }

            Construct::FieldRef { field, span } => {
                let decl = self.graph.field(*field);
                let owner = self.graph.ty(decl.owner);
                if owner.marker == Marker::Internal {
                    return Err(EraseError::InternalLeakage {
                        construct: format!(
                            "{}.{}",
                            resolve(owner.name),
                            resolve(decl.declared_name)
                        ),
                        span: *span,
                    });
                }
                if matches!(decl.directive, Directive::Internal | Directive::MustError) {
                    return Err(EraseError::InternalLeakage {
                        construct: resolve(decl.declared_name).to_string(),
                        span: *span,
                    });
                }
                Ok(decl.member.path())
            }

            Construct::EvalGlobal { member, .. } => Ok(member.eval_global()),

            Construct::EvalOn {
                member, receiver, ..
            } => {
                let receiver = self.erase(receiver)?;
                Ok(member.eval_on(&receiver))
            }
        }
    }
}

impl fmt::Debug for Eraser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Eraser")
            .field("types", &self.graph.type_count())
            .finish()
    }
}
