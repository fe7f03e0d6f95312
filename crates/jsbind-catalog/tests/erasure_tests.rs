//! End-to-end erasure tests over the catalog: every declaration is built
//! through the protocol, validated, and lowered by the eraser, matching
//! what an external translator would observe.

use jsbind_catalog::catalog;
use jsbind_common::{Erased, Span, intern};
use jsbind_decl::{DeclGraph, Directive, Marker, Member, WrapperKind};
use jsbind_erase::{Construct, EraseError, Eraser};

fn eraser() -> Eraser<'static> {
    Eraser::new(&catalog().graph).expect("catalog must validate")
}

#[test]
fn prototype_member_evaluated_on_receiver_targets_receiver_only() {
    // prototype.valueOf evaluated on Foo is Foo.valueOf: evaluation
    // substitutes the explicit receiver and ignores the qualifier chain.
    let proto = Member::root(intern("prototype"));
    let value_of = Member::qualified(&proto, intern("valueOf"));
    let eraser = eraser();
    let out = eraser
        .erase(&Construct::EvalOn {
            member: value_of,
            receiver: Box::new(Construct::lowered("Foo")),
            span: Span::EMPTY,
        })
        .unwrap();
    assert_eq!(out.as_str(), "Foo.valueOf");
}

#[test]
fn static_member_resolves_against_implicit_global() {
    let cat = catalog();
    let eraser = eraser();
    let member = cat.graph.field(cat.global_parse_int).member.clone();
    let out = eraser
        .erase(&Construct::EvalGlobal {
            member,
            span: Span::EMPTY,
        })
        .unwrap();
    assert_eq!(out.as_str(), "parseInt");
}

#[test]
fn transparent_cast_vanishes() {
    let cat = catalog();
    let eraser = eraser();
    let wrapped = Construct::CtorCall {
        ctor: cat.array_cast,
        args: vec![Construct::lowered("x")],
        span: Span::EMPTY,
    };
    assert_eq!(eraser.erase(&wrapped).unwrap().as_str(), "x");

    // Nested casts collapse to the innermost operand.
    let nested = Construct::CtorCall {
        ctor: cat.object_cast,
        args: vec![Construct::Cast {
            ty: cat.function,
            operand: Box::new(Construct::lowered("f")),
            span: Span::EMPTY,
        }],
        span: Span::EMPTY,
    };
    assert_eq!(eraser.erase(&nested).unwrap().as_str(), "f");
}

#[test]
fn internal_reference_aborts_without_substitution() {
    let cat = catalog();
    let eraser = eraser();
    let err = eraser
        .erase(&Construct::FieldRef {
            field: cat.member_table_entries,
            span: Span::new(40, 7),
        })
        .unwrap_err();
    match err {
        EraseError::InternalLeakage { span, .. } => assert_eq!(span, Span::new(40, 7)),
        other => panic!("expected InternalLeakage, got {other:?}"),
    }

    let err = eraser
        .erase(&Construct::TypeLiteral {
            ty: cat.member_table,
            span: Span::EMPTY,
        })
        .unwrap_err();
    assert!(matches!(err, EraseError::InternalLeakage { .. }));
}

#[test]
fn same_name_under_different_qualifiers_erases_differently() {
    let cat = catalog();
    // `length` is declared both on Function and on Array; the erased
    // expressions follow the distinct qualifier chains.
    let function_length = cat.graph.field(cat.function_length).member.path();
    let array_length = cat.graph.field(cat.array_length).member.path();
    assert_eq!(function_length.as_str(), "Function.length");
    assert_eq!(array_length.as_str(), "Array.length");
    assert_ne!(function_length, array_length);
}

#[test]
fn erasure_is_idempotent() {
    let eraser = eraser();
    let lowered = Construct::lowered("Object.prototype.valueOf");
    let once = eraser.erase(&lowered).unwrap();
    let twice = eraser.erase(&Construct::lowered(once.as_str())).unwrap();
    assert_eq!(once, twice);
    assert_eq!(twice.as_str(), "Object.prototype.valueOf");
}

#[test]
fn field_reference_prints_qualifier_chain() {
    let cat = catalog();
    let eraser = eraser();
    let out = eraser
        .erase(&Construct::FieldRef {
            field: cat.object_value_of,
            span: Span::EMPTY,
        })
        .unwrap();
    assert_eq!(out.as_str(), "Object.prototype.valueOf");

    // Evaluating the same member against a receiver targets the receiver.
    let member = cat.graph.field(cat.object_value_of).member.clone();
    let out = eraser
        .erase(&Construct::EvalOn {
            member,
            receiver: Box::new(Construct::lowered("x")),
            span: Span::EMPTY,
        })
        .unwrap();
    assert_eq!(out.as_str(), "x.valueOf");
}

#[test]
fn opaque_type_reification_is_fatal() {
    let cat = catalog();
    let eraser = eraser();
    let err = eraser
        .erase(&Construct::TypeLiteral {
            ty: cat.object,
            span: Span::EMPTY,
        })
        .unwrap_err();
    assert!(matches!(err, EraseError::OpaqueReification { .. }));
}

#[test]
fn instance_check_against_opaque_is_true() {
    let cat = catalog();
    let eraser = eraser();
    let out = eraser
        .erase(&Construct::InstanceCheck {
            ty: cat.function,
            operand: Box::new(Construct::lowered("maybeFn")),
            span: Span::EMPTY,
        })
        .unwrap();
    assert_eq!(out, Erased::true_literal());
}

#[test]
fn class_like_members_chain_off_the_class_object() {
    let cat = catalog();
    assert_eq!(
        cat.graph.field(cat.math_floor).member.path().as_str(),
        "Math.floor"
    );
}

#[test]
fn diagnostics_serialize_for_external_tooling() {
    let mut graph = DeclGraph::new();
    graph.declare_type(
        "Mislabeled",
        WrapperKind::Object,
        Marker::Opaque,
        Directive::Internal,
        None,
    );
    let err = Eraser::new(&graph).unwrap_err();
    let diag = err.to_diagnostic("<declarations>");
    let json = serde_json::to_value(&diag).unwrap();
    assert_eq!(json["code"], 2005);
    assert!(json["message_text"].as_str().unwrap().contains("Mislabeled"));
}

#[test]
fn catalog_iteration_order_is_declaration_order() {
    let cat = catalog();
    let ids: Vec<_> = cat.graph.types().map(|(id, _)| id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(ids[0], cat.object);
}
