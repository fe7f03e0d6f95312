//! Qualified members and their evaluator.
//!
//! A `Member` pairs an interned property name with an optional qualifying
//! parent member, forming a tree that mirrors a property-access chain like
//! `a.b.c`. The qualifier is a *static* composition device: it lets the
//! next level of declaration build `parent.child` chains, and lets the
//! translator print the full chain. It plays no part in evaluation —
//! evaluating a member always targets one explicit receiver expression (or
//! the implicit global object), never the qualifier.
//!
//! Members are immutable and built bottom-up, so qualifier chains are
//! acyclic and finite by construction.

use std::sync::Arc;

use jsbind_common::{Erased, Name, resolve};

/// A property name qualified by an optional parent member.
///
/// Root members (no qualifier) resolve against the implicit global object;
/// qualified members record the object their property is accessed on at
/// declaration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    name: Name,
    qualifier: Option<Arc<Member>>,
}

impl Member {
    /// Build a root member with no qualifier.
    pub fn root(name: Name) -> Arc<Member> {
        Arc::new(Member {
            name,
            qualifier: None,
        })
    }

    /// Build a member qualified by `qualifier`.
    pub fn qualified(qualifier: &Arc<Member>, name: Name) -> Arc<Member> {
        Arc::new(Member {
            name,
            qualifier: Some(Arc::clone(qualifier)),
        })
    }

    /// The member's property name.
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// The qualifying parent member, if any.
    #[inline]
    pub fn qualifier(&self) -> Option<&Arc<Member>> {
        self.qualifier.as_ref()
    }

    /// Whether this member resolves against the implicit global object.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.qualifier.is_none()
    }

    /// Number of members in the qualifier chain, including this one.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.qualifier.as_deref();
        while let Some(member) = current {
            depth += 1;
            current = member.qualifier.as_deref();
        }
        depth
    }

    /// Evaluate against the implicit global object: `name`.
    pub fn eval_global(&self) -> Erased {
        Erased::global(&resolve(self.name))
    }

    /// Evaluate against an explicit receiver: `receiver.name`.
    ///
    /// The qualifier is deliberately ignored here — a runtime evaluation
    /// always supplies the full receiver directly, whether or not this
    /// member was declared with a qualifying chain.
    pub fn eval_on(&self, receiver: &Erased) -> Erased {
        receiver.property(&resolve(self.name))
    }

    /// Print the full qualifier chain as a dotted path: `a.b.c`.
    ///
    /// This is a translator-internal operation, distinct from evaluation:
    /// it renders the static shape of the chain, not a receiver-rooted
    /// access. Iterative so deep chains cannot overflow the stack.
    pub fn path(&self) -> Erased {
        let mut names = Vec::with_capacity(self.depth());
        names.push(self.name);
        let mut current = self.qualifier.as_deref();
        while let Some(member) = current {
            names.push(member.name);
            current = member.qualifier.as_deref();
        }

        let mut out = String::new();
        for name in names.iter().rev() {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(&resolve(*name));
        }
        Erased::new(out)
    }
}
