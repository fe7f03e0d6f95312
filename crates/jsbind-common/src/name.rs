//! Name interning for property-name identity.
//!
//! Every property name that appears in a declaration graph is interned into
//! a table and passed around as a `Name` (a u32 handle). Two names with
//! equal text are guaranteed to be the identical handle, so identity checks
//! are integer comparisons and the "one canonical instance per name"
//! invariant holds by construction.
//!
//! Interning never rejects: whether a string is a valid property token in
//! the target grammar is the translator's concern at resolution time, not
//! at construction time.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// An interned property name.
///
/// Names are cheap to copy (just a u32) and compare with `==` in O(1).
/// To get the actual string, use `NameTable::resolve` or the process-wide
/// [`resolve`] helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Default, PartialOrd, Ord)]
pub struct Name(pub u32);

impl Name {
    /// A sentinel value representing no name / empty string.
    pub const NONE: Name = Name(0);

    /// Check if this is the empty/none name.
    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Property names that nearly every declaration graph mentions.
/// Pre-interned so the hot handles are stable and cache-friendly.
const COMMON_NAMES: &[&str] = &[
    // Object-protocol members
    "prototype",
    "constructor",
    "valueOf",
    "toString",
    "toLocaleString",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    // Callable-protocol members
    "call",
    "apply",
    "bind",
    "length",
    "name",
    "arguments",
    "caller",
    // Well-known globals
    "Object",
    "Function",
    "Array",
    "String",
    "Number",
    "Boolean",
    "Date",
    "RegExp",
    "Error",
    "Math",
    "JSON",
    "window",
    "document",
    "globalThis",
];

/// Interner that deduplicates name strings and returns `Name` handles.
///
/// # Example
/// ```
/// use jsbind_common::name::NameTable;
/// let mut names = NameTable::new();
/// let a = names.intern("valueOf");
/// let b = names.intern("valueOf");
/// assert_eq!(a, b); // same handle for same text
/// assert_eq!(names.resolve(a), "valueOf");
/// ```
#[derive(Default)]
pub struct NameTable {
    /// Map from string to handle
    map: FxHashMap<Arc<str>, Name>,
    /// All interned strings (index 0 is the empty string)
    strings: Vec<Arc<str>>,
}

impl NameTable {
    /// Create a new table with the empty string pre-interned at index 0.
    pub fn new() -> Self {
        let mut table = NameTable {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Index 0 is reserved for empty/none
        let empty: Arc<str> = Arc::from("");
        table.strings.push(empty.clone());
        table.map.insert(empty, Name::NONE);
        table
    }

    /// Intern a string, returning its `Name` handle.
    /// If the string was already interned, returns the existing handle.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let name = Name(self.strings.len() as u32);
        let owned: Arc<str> = Arc::from(s);
        self.strings.push(owned.clone());
        self.map.insert(owned, name);
        name
    }

    /// Resolve a `Name` back to its string value.
    /// Returns the empty string if the handle is out of bounds.
    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        self.strings
            .get(name.0 as usize)
            .map(|s| s.as_ref())
            .unwrap_or("")
    }

    /// Try to resolve a `Name`, returning `None` if invalid.
    #[inline]
    pub fn try_resolve(&self, name: Name) -> Option<Arc<str>> {
        self.strings.get(name.0 as usize).cloned()
    }

    /// Number of interned strings (including the reserved empty string).
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty (only the empty string).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }

    /// Pre-intern the common property names and globals.
    pub fn intern_common(&mut self) {
        for s in COMMON_NAMES {
            self.intern(s);
        }
    }
}

// Process-wide table, built once during declaration-graph construction and
// read-only thereafter. The mutex makes the table usable from tests without
// threading caveats; the protocol itself is single-threaded build-time work.
static GLOBAL_NAMES: Lazy<Mutex<NameTable>> = Lazy::new(|| {
    let mut table = NameTable::new();
    table.intern_common();
    Mutex::new(table)
});

/// Access the process-wide name table.
pub fn global_names() -> &'static Mutex<NameTable> {
    &GLOBAL_NAMES
}

/// Intern into the process-wide table.
pub fn intern(s: &str) -> Name {
    match GLOBAL_NAMES.lock() {
        Ok(mut table) => table.intern(s),
        Err(poisoned) => poisoned.into_inner().intern(s),
    }
}

/// Resolve against the process-wide table.
pub fn resolve(name: Name) -> Arc<str> {
    let table = match GLOBAL_NAMES.lock() {
        Ok(table) => table,
        Err(poisoned) => poisoned.into_inner(),
    };
    table.try_resolve(name).unwrap_or_else(|| Arc::from(""))
}
