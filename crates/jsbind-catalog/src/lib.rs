//! A representative declaration catalog for the core JavaScript object
//! model.
//!
//! This crate is data, not engine: every entry is built by mechanically
//! composing the protocol's own pieces — interned names, qualified
//! members, markers, directives — exactly the way a full catalog of
//! thousands of runtime objects would. It covers each wrapper category
//! once (generic object, callable, class-like, collection), the prototype
//! chains between them, casting constructors, statics, and one
//! internal-only bookkeeping type, so the whole protocol surface is
//! exercised by the integration tests that live here.
//!
//! The catalog is built once, on first access, and read-only afterwards.

use once_cell::sync::Lazy;

use jsbind_decl::{CtorId, DeclGraph, Directive, FieldId, Marker, TypeId, WrapperKind};

/// The built catalog: the graph plus handles to every declaration.
pub struct Catalog {
    pub graph: DeclGraph,

    // Generic object wrapper and its prototype
    pub object: TypeId,
    pub object_proto: TypeId,
    pub object_cast: CtorId,
    pub object_value_of: FieldId,
    pub object_to_string: FieldId,
    pub object_has_own_property: FieldId,

    // Callable wrapper
    pub function: TypeId,
    pub function_proto: TypeId,
    pub function_cast: CtorId,
    pub function_call: FieldId,
    pub function_apply: FieldId,
    pub function_length: FieldId,

    // Collection wrapper (element type is a host-side phantom)
    pub array: TypeId,
    pub array_proto: TypeId,
    pub array_cast: CtorId,
    pub array_slice: FieldId,
    pub array_length: FieldId,

    // Class-like wrapper
    pub math: TypeId,
    pub math_floor: FieldId,

    // Global statics (unqualified, resolve against the global object)
    pub globals: TypeId,
    pub global_parse_int: FieldId,
    pub global_is_nan: FieldId,

    // Internal bookkeeping type; must never reach output
    pub member_table: TypeId,
    pub member_table_entries: FieldId,
}

fn build() -> Catalog {
    let mut graph = DeclGraph::new();

    // Object: the root of the wrapper hierarchy.
    let object = graph.declare_type(
        "Object",
        WrapperKind::Object,
        Marker::Opaque,
        Directive::Opaque,
        None,
    );
    let object_cast = graph.casting_ctor(object);
    let object_proto = graph.declare_prototype(object, Marker::Opaque, Directive::Opaque, None);
    let object_value_of = graph.instance_field(object_proto, "valueOf", Directive::ErasedToPath);
    let object_to_string = graph.instance_field(object_proto, "toString", Directive::ErasedToPath);
    let object_has_own_property =
        graph.instance_field(object_proto, "hasOwnProperty", Directive::ErasedToPath);

    // Function: callable, prototype-chained under Object.
    let function = graph.declare_type(
        "Function",
        WrapperKind::Callable,
        Marker::Opaque,
        Directive::Opaque,
        Some(object),
    );
    let function_cast = graph.casting_ctor(function);
    let function_proto =
        graph.declare_prototype(function, Marker::Opaque, Directive::Opaque, Some(object_proto));
    let function_call = graph.instance_field(function_proto, "call", Directive::ErasedToPath);
    let function_apply = graph.instance_field(function_proto, "apply", Directive::ErasedToPath);
    let function_length = graph.instance_field(function, "length", Directive::ErasedToPath);

    // Array: collection-like; the element parameter is phantom and the
    // declarations are identical whatever it is instantiated with.
    let array = graph.declare_collection::<()>(
        "Array",
        Marker::Opaque,
        Directive::Opaque,
        Some(object),
    );
    let array_cast = graph.casting_ctor(array);
    let array_proto =
        graph.declare_prototype(array, Marker::Opaque, Directive::Opaque, Some(object_proto));
    let array_slice = graph.instance_field(array_proto, "slice", Directive::ErasedToPath);
    let array_length = graph.instance_field(array, "length", Directive::ErasedToPath);

    // Math: class-like, members accessed off the class object itself.
    let math = graph.declare_type(
        "Math",
        WrapperKind::ClassLike,
        Marker::Opaque,
        Directive::Opaque,
        Some(object),
    );
    let math_floor = graph.instance_field(math, "floor", Directive::ErasedToPath);

    // Free-standing globals: static member fields are unqualified and
    // resolve against the implicit global object.
    let globals = graph.declare_type(
        "Globals",
        WrapperKind::Object,
        Marker::Opaque,
        Directive::Opaque,
        None,
    );
    let global_parse_int = graph.static_field(globals, "parseInt", Directive::ErasedToPath);
    let global_is_nan = graph.static_field(globals, "isNaN", Directive::ErasedToPath);

    // Protocol bookkeeping: referencing this from erasable code is fatal.
    let member_table = graph.declare_type(
        "MemberTable",
        WrapperKind::Object,
        Marker::Internal,
        Directive::MustError,
        None,
    );
    let member_table_entries = graph.instance_field(member_table, "entries", Directive::Internal);

    Catalog {
        graph,
        object,
        object_proto,
        object_cast,
        object_value_of,
        object_to_string,
        object_has_own_property,
        function,
        function_proto,
        function_cast,
        function_call,
        function_apply,
        function_length,
        array,
        array_proto,
        array_cast,
        array_slice,
        array_length,
        math,
        math_floor,
        globals,
        global_parse_int,
        global_is_nan,
        member_table,
        member_table_entries,
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(build);

/// The process-wide catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsbind_common::{intern, resolve};

    #[test]
    fn test_catalog_builds_and_validates() {
        let cat = catalog();
        assert!(jsbind_decl::validate(&cat.graph).is_ok());
    }

    #[test]
    fn test_prototype_chain_paths() {
        let cat = catalog();
        assert_eq!(
            cat.graph.field(cat.object_value_of).member.path().as_str(),
            "Object.prototype.valueOf"
        );
        assert_eq!(
            cat.graph.field(cat.function_call).member.path().as_str(),
            "Function.prototype.call"
        );
        assert_eq!(
            cat.graph.field(cat.array_slice).member.path().as_str(),
            "Array.prototype.slice"
        );
    }

    #[test]
    fn test_prototype_wrappers_mirror_supertypes() {
        let cat = catalog();
        assert_eq!(cat.graph.ty(cat.function_proto).extends, Some(cat.object_proto));
        assert_eq!(cat.graph.ty(cat.array_proto).extends, Some(cat.object_proto));
        assert_eq!(cat.graph.ty(cat.object).prototype, Some(cat.object_proto));
    }

    #[test]
    fn test_lookup_by_name() {
        let cat = catalog();
        assert_eq!(cat.graph.type_by_name(intern("Array")), Some(cat.array));
        assert_eq!(
            resolve(cat.graph.ty(cat.array_proto).name).as_ref(),
            "Array.prototype"
        );
    }
}
