//! The declaration graph: types, member fields, casting constructors.
//!
//! The graph is the host program's catalogue of dynamic-runtime objects,
//! built once at load time and read-only afterwards. Tables are kept in
//! declaration order so a translator's single pass over the graph is
//! deterministic.
//!
//! Every declared type owns an *anchor* member: the static shape of "an
//! instance of this type" used to qualify its instance member fields. A
//! prototype wrapper's anchor extends the wrapped type's anchor with the
//! `prototype` property, so instance members declared on it print chains
//! like `Object.prototype.valueOf`.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use jsbind_common::{Name, intern, resolve};

use crate::directive::Directive;
use crate::marker::Marker;
use crate::member::Member;
use crate::wrapper::WrapperKind;

/// Handle to a declared type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Handle to a declared member field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct FieldId(pub u32);

/// Handle to a declared constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, PartialOrd, Ord)]
pub struct CtorId(pub u32);

/// Where a member field is declared on its wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Placement {
    /// Declared inside the wrapper; its member must carry a qualifier
    /// pointing at the enclosing instance.
    Instance,
    /// Declared unqualified; resolves against the implicit global object.
    Static,
}

/// A declared wrapper type.
#[derive(Clone, Debug)]
pub struct TypeDecl {
    pub name: Name,
    pub kind: WrapperKind,
    pub marker: Marker,
    pub directive: Directive,
    /// Conceptual supertype (host subtyping mirroring runtime inheritance).
    pub extends: Option<TypeId>,
    /// This type's prototype wrapper, once declared.
    pub prototype: Option<TypeId>,
    anchor: Arc<Member>,
    fields: Vec<FieldId>,
    ctors: Vec<CtorId>,
}

impl TypeDecl {
    /// The static shape of "an instance of this type", used to qualify
    /// instance member fields.
    #[inline]
    pub fn anchor(&self) -> &Arc<Member> {
        &self.anchor
    }

    /// Member fields declared on this type, in declaration order.
    #[inline]
    pub fn fields(&self) -> &[FieldId] {
        &self.fields
    }

    /// Constructors declared on this type, in declaration order.
    #[inline]
    pub fn ctors(&self) -> &[CtorId] {
        &self.ctors
    }
}

/// A declared member field.
#[derive(Clone, Debug)]
pub struct FieldDecl {
    pub owner: TypeId,
    /// The field's own declared name in the host source. Must equal the
    /// member's name; the translator relies on this to avoid carrying
    /// separate metadata.
    pub declared_name: Name,
    pub member: Arc<Member>,
    pub placement: Placement,
    pub directive: Directive,
}

/// A declared constructor.
#[derive(Clone, Copy, Debug)]
pub struct CtorDecl {
    pub owner: TypeId,
    pub marker: Marker,
    pub directive: Directive,
}

/// The declaration graph.
#[derive(Default)]
pub struct DeclGraph {
    types: Vec<TypeDecl>,
    fields: Vec<FieldDecl>,
    ctors: Vec<CtorDecl>,
    by_name: IndexMap<Name, TypeId>,
}

impl DeclGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        DeclGraph::default()
    }

    /// Declare a wrapper type. The type's anchor is a root member carrying
    /// its own name.
    pub fn declare_type(
        &mut self,
        name: &str,
        kind: WrapperKind,
        marker: Marker,
        directive: Directive,
        extends: Option<TypeId>,
    ) -> TypeId {
        let name = intern(name);
        let id = TypeId(self.types.len() as u32);
        tracing::debug!(ty = %resolve(name), %kind, %marker, "declare type");
        self.types.push(TypeDecl {
            name,
            kind,
            marker,
            directive,
            extends,
            prototype: None,
            anchor: Member::root(name),
            fields: Vec::new(),
            ctors: Vec::new(),
        });
        self.by_name.insert(name, id);
        id
    }

    /// Declare a collection-like wrapper. The element parameter is a
    /// host-side phantom: the declared graph and every erased expression
    /// are invariant under `E`.
    pub fn declare_collection<E: ?Sized>(
        &mut self,
        name: &str,
        marker: Marker,
        directive: Directive,
        extends: Option<TypeId>,
    ) -> TypeId {
        self.declare_type(name, WrapperKind::Collection, marker, directive, extends)
    }

    /// Declare the prototype wrapper of `wrapped`, extending `extends`
    /// (which must be the prototype wrapper of `wrapped`'s supertype, a
    /// shape the validator checks). The prototype's anchor extends the
    /// wrapped type's anchor with the `prototype` property.
    pub fn declare_prototype(
        &mut self,
        wrapped: TypeId,
        marker: Marker,
        directive: Directive,
        extends: Option<TypeId>,
    ) -> TypeId {
        let wrapped_decl = &self.types[wrapped.0 as usize];
        let name = intern(&format!("{}.prototype", resolve(wrapped_decl.name)));
        let anchor = Member::qualified(&wrapped_decl.anchor, intern("prototype"));
        let id = TypeId(self.types.len() as u32);
        tracing::debug!(ty = %resolve(name), "declare prototype wrapper");
        self.types.push(TypeDecl {
            name,
            kind: WrapperKind::Prototype { of: wrapped },
            marker,
            directive,
            extends,
            prototype: None,
            anchor,
            fields: Vec::new(),
            ctors: Vec::new(),
        });
        self.by_name.insert(name, id);
        self.types[wrapped.0 as usize].prototype = Some(id);
        id
    }

    /// Declare an instance member field on `owner`. The member is
    /// qualified by the owner's anchor and named after the field, so the
    /// naming invariant holds by construction.
    pub fn instance_field(&mut self, owner: TypeId, name: &str, directive: Directive) -> FieldId {
        let name = intern(name);
        let member = Member::qualified(self.types[owner.0 as usize].anchor(), name);
        self.field_raw(owner, name, member, Placement::Instance, directive)
    }

    /// Declare a static member field on `owner`: unqualified, resolving
    /// against the implicit global object.
    pub fn static_field(&mut self, owner: TypeId, name: &str, directive: Directive) -> FieldId {
        let name = intern(name);
        self.field_raw(owner, name, Member::root(name), Placement::Static, directive)
    }

    /// Declare a member field with an explicit member. This is the escape
    /// hatch under the convenience methods; it performs no validation, so
    /// a declared name that disagrees with the member's name is caught by
    /// `validate`, not here.
    pub fn field_raw(
        &mut self,
        owner: TypeId,
        declared_name: Name,
        member: Arc<Member>,
        placement: Placement,
        directive: Directive,
    ) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        tracing::trace!(
            field = %resolve(declared_name),
            owner = %resolve(self.types[owner.0 as usize].name),
            "declare member field"
        );
        self.fields.push(FieldDecl {
            owner,
            declared_name,
            member,
            placement,
            directive,
        });
        self.types[owner.0 as usize].fields.push(id);
        id
    }

    /// Declare the wrapper's casting constructor: a transparent cast that
    /// accepts any runtime-object value and re-views it as the wrapper.
    pub fn casting_ctor(&mut self, owner: TypeId) -> CtorId {
        self.ctor_raw(owner, Marker::TransparentCast, Directive::TransparentCast)
    }

    /// Declare a constructor with an explicit marker and directive.
    pub fn ctor_raw(&mut self, owner: TypeId, marker: Marker, directive: Directive) -> CtorId {
        let id = CtorId(self.ctors.len() as u32);
        self.ctors.push(CtorDecl {
            owner,
            marker,
            directive,
        });
        self.types[owner.0 as usize].ctors.push(id);
        id
    }

    /// Look up a declared type.
    #[inline]
    pub fn ty(&self, id: TypeId) -> &TypeDecl {
        &self.types[id.0 as usize]
    }

    /// Look up a declared member field.
    #[inline]
    pub fn field(&self, id: FieldId) -> &FieldDecl {
        &self.fields[id.0 as usize]
    }

    /// Look up a declared constructor.
    #[inline]
    pub fn ctor(&self, id: CtorId) -> &CtorDecl {
        &self.ctors[id.0 as usize]
    }

    /// Find a type by its interned name.
    pub fn type_by_name(&self, name: Name) -> Option<TypeId> {
        self.by_name.get(&name).copied()
    }

    /// All declared types, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = (TypeId, &TypeDecl)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (TypeId(i as u32), t))
    }

    /// All declared member fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldId, &FieldDecl)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(i, f)| (FieldId(i as u32), f))
    }

    /// All declared constructors, in declaration order.
    pub fn ctors(&self) -> impl Iterator<Item = (CtorId, &CtorDecl)> {
        self.ctors
            .iter()
            .enumerate()
            .map(|(i, c)| (CtorId(i as u32), c))
    }

    /// Number of declared types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}
