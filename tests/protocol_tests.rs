//! Facade-level tests: drive the whole protocol through the `jsbind`
//! re-exports the way an external translator would.

use anyhow::Result;
use jsbind::{
    Construct, DeclGraph, Directive, Eraser, Marker, Member, Span, WrapperKind, intern,
};

#[test]
fn declare_validate_erase_round_trip() -> Result<()> {
    jsbind::init_tracing();

    let mut graph = DeclGraph::new();
    let node = graph.declare_type(
        "Node",
        WrapperKind::Object,
        Marker::Opaque,
        Directive::Opaque,
        None,
    );
    let cast = graph.casting_ctor(node);
    let proto = graph.declare_prototype(node, Marker::Opaque, Directive::Opaque, None);
    let append = graph.instance_field(proto, "appendChild", Directive::ErasedToPath);

    let eraser = Eraser::new(&graph)?;

    // The field reference prints its qualifier chain.
    let path = eraser.erase(&Construct::FieldRef {
        field: append,
        span: Span::EMPTY,
    })?;
    assert_eq!(path.as_str(), "Node.prototype.appendChild");

    // The cast vanishes around a receiver-rooted evaluation.
    let member = graph.field(append).member.clone();
    let out = eraser.erase(&Construct::CtorCall {
        ctor: cast,
        args: vec![Construct::EvalOn {
            member,
            receiver: Box::new(Construct::lowered("el")),
            span: Span::EMPTY,
        }],
        span: Span::EMPTY,
    })?;
    assert_eq!(out.as_str(), "el.appendChild");
    Ok(())
}

#[test]
fn member_composition_matches_catalog_data() {
    // Hand-composed chains and catalog-declared chains meet in the same
    // interned names and print identically.
    let cat = jsbind::catalog::catalog();
    let object = Member::root(intern("Object"));
    let proto = Member::qualified(&object, intern("prototype"));
    let value_of = Member::qualified(&proto, intern("valueOf"));
    assert_eq!(
        value_of.path(),
        cat.graph.field(cat.object_value_of).member.path()
    );
}
