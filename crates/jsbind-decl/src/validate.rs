//! Build-time validation of a declaration graph.
//!
//! The original protocol enforced the naming invariant only by documented
//! convention; here it is checked mechanically, together with qualifier
//! placement, prototype-extension shape, and directive/marker agreement.
//! Validation collects every violation rather than stopping at the first,
//! so a declaration author sees the whole picture in one build.

use jsbind_common::diagnostics::{Diagnostic, codes};
use jsbind_common::{Name, Span, resolve};

use crate::directive::Directive;
use crate::graph::{DeclGraph, FieldId, Placement};
use crate::wrapper::WrapperKind;

/// Pseudo-file used for findings that have no source location: the graph
/// is a load-time value, not a text file.
pub const DECLARATIONS_FILE: &str = "<declarations>";

/// Validate a declaration graph, collecting all violations.
pub fn validate(graph: &DeclGraph) -> Result<(), Vec<Diagnostic>> {
    let mut diags = Vec::new();

    for (_, ty) in graph.types() {
        let ty_name = resolve(ty.name);
        if !ty.directive.agrees_with_marker(ty.marker) {
            diags.push(Diagnostic::from_code(
                DECLARATIONS_FILE,
                Span::EMPTY,
                codes::DIRECTIVE_MISMATCH,
                &[ty.directive.keyword(), &ty_name],
            ));
        }

        // A prototype wrapper must extend the prototype wrapper of the
        // wrapped type's conceptual supertype (if it has one).
        if let WrapperKind::Prototype { of } = ty.kind {
            let wrapped = graph.ty(of);
            if let Some(super_id) = wrapped.extends {
                let expected = graph.ty(super_id).prototype;
                if ty.extends.is_none() || ty.extends != expected {
                    diags.push(Diagnostic::from_code(
                        DECLARATIONS_FILE,
                        Span::EMPTY,
                        codes::PROTOTYPE_SHAPE,
                        &[&ty_name],
                    ));
                }
            }
        }
    }

    for (_, field) in graph.fields() {
        let field_name = resolve(field.declared_name);

        if field.declared_name != field.member.name() {
            diags.push(Diagnostic::from_code(
                DECLARATIONS_FILE,
                Span::EMPTY,
                codes::NAMING_INVARIANT_VIOLATION,
                &[&field_name, &resolve(field.member.name())],
            ));
        }

        match field.placement {
            // An instance member must be qualified by the enclosing
            // instance itself, not merely by something.
            Placement::Instance => match field.member.qualifier() {
                None => {
                    diags.push(Diagnostic::from_code(
                        DECLARATIONS_FILE,
                        Span::EMPTY,
                        codes::QUALIFIER_PLACEMENT,
                        &[&field_name, "instance members must carry a qualifier"],
                    ));
                }
                Some(qualifier) if qualifier != graph.ty(field.owner).anchor() => {
                    diags.push(Diagnostic::from_code(
                        DECLARATIONS_FILE,
                        Span::EMPTY,
                        codes::QUALIFIER_PLACEMENT,
                        &[
                            &field_name,
                            "instance members must be qualified by the enclosing instance",
                        ],
                    ));
                }
                _ => {}
            },
            Placement::Static if !field.member.is_root() => {
                diags.push(Diagnostic::from_code(
                    DECLARATIONS_FILE,
                    Span::EMPTY,
                    codes::QUALIFIER_PLACEMENT,
                    &[&field_name, "static members must be unqualified"],
                ));
            }
            Placement::Static => {}
        }

        if !field.directive.valid_on_field() {
            diags.push(Diagnostic::from_code(
                DECLARATIONS_FILE,
                Span::EMPTY,
                codes::DIRECTIVE_MISMATCH,
                &[field.directive.keyword(), &field_name],
            ));
        }
    }

    for (_, ctor) in graph.ctors() {
        if !ctor.directive.agrees_with_marker(ctor.marker) {
            diags.push(Diagnostic::from_code(
                DECLARATIONS_FILE,
                Span::EMPTY,
                codes::DIRECTIVE_MISMATCH,
                &[
                    ctor.directive.keyword(),
                    &resolve(graph.ty(ctor.owner).name),
                ],
            ));
        }
    }

    if diags.is_empty() {
        tracing::debug!(types = graph.type_count(), "declaration graph validated");
        Ok(())
    } else {
        tracing::debug!(violations = diags.len(), "declaration graph rejected");
        Err(diags)
    }
}

/// First naming-invariant violation in the graph, if any. Used by the
/// erasure engine to surface the violation as its own error kind.
pub fn find_naming_violation(graph: &DeclGraph) -> Option<FieldId> {
    graph
        .fields()
        .find(|(_, field)| field.declared_name != field.member.name())
        .map(|(id, _)| id)
}

/// First directive that disagrees with its declaration's marker or shape,
/// returning the offending directive and the declaration's name.
pub fn find_directive_mismatch(graph: &DeclGraph) -> Option<(Directive, Name)> {
    for (_, ty) in graph.types() {
        if !ty.directive.agrees_with_marker(ty.marker) {
            return Some((ty.directive, ty.name));
        }
    }
    for (_, field) in graph.fields() {
        if !field.directive.valid_on_field() {
            return Some((field.directive, field.declared_name));
        }
    }
    for (_, ctor) in graph.ctors() {
        if !ctor.directive.agrees_with_marker(ctor.marker) {
            return Some((ctor.directive, graph.ty(ctor.owner).name));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Directive;
    use crate::marker::Marker;
    use crate::member::Member;
    use jsbind_common::intern;

    fn opaque_object(graph: &mut DeclGraph, name: &str) -> crate::graph::TypeId {
        graph.declare_type(name, WrapperKind::Object, Marker::Opaque, Directive::Opaque, None)
    }

    #[test]
    fn test_well_formed_graph_passes() {
        let mut graph = DeclGraph::new();
        let obj = opaque_object(&mut graph, "Obj1");
        graph.instance_field(obj, "valueOf", Directive::ErasedToPath);
        graph.static_field(obj, "create", Directive::ErasedToPath);
        graph.casting_ctor(obj);
        assert!(validate(&graph).is_ok());
    }

    #[test]
    fn test_naming_invariant_violation_rejected() {
        let mut graph = DeclGraph::new();
        let obj = opaque_object(&mut graph, "Obj2");
        // Field declared as `valueOf` but carrying a member named `toString`.
        let member = Member::qualified(graph.ty(obj).anchor(), intern("toString"));
        graph.field_raw(
            obj,
            intern("valueOf"),
            member,
            Placement::Instance,
            Directive::ErasedToPath,
        );
        let diags = validate(&graph).unwrap_err();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::NAMING_INVARIANT_VIOLATION);
    }

    #[test]
    fn test_qualifier_placement_rules() {
        let mut graph = DeclGraph::new();
        let obj = opaque_object(&mut graph, "Obj3");
        // Instance field with a root member and static field with a
        // qualified member are both placement violations.
        let name_a = intern("instanceish");
        graph.field_raw(
            obj,
            name_a,
            Member::root(name_a),
            Placement::Instance,
            Directive::ErasedToPath,
        );
        let name_b = intern("staticish");
        let qualified = Member::qualified(graph.ty(obj).anchor(), name_b);
        graph.field_raw(obj, name_b, qualified, Placement::Static, Directive::ErasedToPath);

        let diags = validate(&graph).unwrap_err();
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.code == codes::QUALIFIER_PLACEMENT));
    }

    #[test]
    fn test_instance_qualifier_must_be_enclosing_instance() {
        let mut graph = DeclGraph::new();
        let widget = opaque_object(&mut graph, "Widget");
        let gadget = opaque_object(&mut graph, "Gadget");
        // Instance field on Widget whose member hangs off Gadget's anchor:
        // it would erase to Gadget's path, so validation must reject it.
        let name = intern("spin");
        let member = Member::qualified(graph.ty(gadget).anchor(), name);
        graph.field_raw(widget, name, member, Placement::Instance, Directive::ErasedToPath);
        let diags = validate(&graph).unwrap_err();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::QUALIFIER_PLACEMENT);
        assert!(
            diags[0]
                .message_text
                .contains("qualified by the enclosing instance")
        );
    }

    #[test]
    fn test_directive_marker_mismatch_rejected() {
        let mut graph = DeclGraph::new();
        // An opaque type annotated as internal.
        graph.declare_type("Obj4", WrapperKind::Object, Marker::Opaque, Directive::Internal, None);
        let diags = validate(&graph).unwrap_err();
        assert_eq!(diags[0].code, codes::DIRECTIVE_MISMATCH);
    }

    #[test]
    fn test_prototype_must_extend_supertype_prototype() {
        let mut graph = DeclGraph::new();
        let object = opaque_object(&mut graph, "Base5");
        let object_proto = graph.declare_prototype(object, Marker::Opaque, Directive::Opaque, None);
        let func = graph.declare_type(
            "Derived5",
            WrapperKind::Callable,
            Marker::Opaque,
            Directive::Opaque,
            Some(object),
        );
        // Wrong: Derived5.prototype does not extend Base5.prototype.
        graph.declare_prototype(func, Marker::Opaque, Directive::Opaque, None);
        let diags = validate(&graph).unwrap_err();
        assert_eq!(diags[0].code, codes::PROTOTYPE_SHAPE);

        // Right shape passes.
        let mut graph = DeclGraph::new();
        let object = opaque_object(&mut graph, "Base6");
        let object_proto2 = graph.declare_prototype(object, Marker::Opaque, Directive::Opaque, None);
        let func = graph.declare_type(
            "Derived6",
            WrapperKind::Callable,
            Marker::Opaque,
            Directive::Opaque,
            Some(object),
        );
        graph.declare_prototype(func, Marker::Opaque, Directive::Opaque, Some(object_proto2));
        assert!(validate(&graph).is_ok());
        let _ = object_proto;
    }

    #[test]
    fn test_collects_multiple_violations() {
        let mut graph = DeclGraph::new();
        let obj = graph.declare_type(
            "Obj7",
            WrapperKind::Object,
            Marker::Opaque,
            Directive::Internal,
            None,
        );
        let name = intern("wrongly_static");
        let qualified = Member::qualified(graph.ty(obj).anchor(), intern("other"));
        graph.field_raw(obj, name, qualified, Placement::Static, Directive::ErasedToPath);
        let diags = validate(&graph).unwrap_err();
        // Directive mismatch + naming invariant + placement.
        assert_eq!(diags.len(), 3);
    }
}
