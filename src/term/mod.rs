//! Erlang term documents and the config lookups built on them
//!
//! This module provides the generic term tree ([`Term`]) produced by the
//! parser, plus the three lookups every config consumer in this crate is
//! built from:
//!
//! - [`section`]: find the list bound to a named top-level section of a
//!   `rebar.config`-style document
//! - [`proplist_value`]: find a named property inside a property list, as
//!   used by the `{application, Name, Props}` resource tuple
//! - [`dependency_names`]: interpret a dependency list where entries are
//!   either bare atoms or tuples headed by the dependency name
//!
//! When a section or property name occurs more than once, the first
//! occurrence wins; later bindings are ignored.

pub mod lexer;
pub mod parser;

pub use parser::{TermParseError, parse};

use std::collections::BTreeSet;

/// A parsed Erlang term
///
/// Only the shapes that occur in configuration files are represented.
/// Binaries carry their textual content; maps keep their association pairs
/// in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(String),
    Str(String),
    Int(i64),
    Float(f64),
    Binary(String),
    Tuple(Vec<Term>),
    List(Vec<Term>),
    Map(Vec<(Term, Term)>),
}

impl Term {
    /// Get the atom name if this term is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            _ => None,
        }
    }

    /// Get the string value if this term is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Get the elements if this term is a tuple
    pub fn tuple_elements(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(elements) => Some(elements),
            _ => None,
        }
    }

    /// Get the elements if this term is a list
    pub fn list_elements(&self) -> Option<&[Term]> {
        match self {
            Term::List(elements) => Some(elements),
            _ => None,
        }
    }
}

/// Find the value of a named top-level section
///
/// Sections are flat `{name, Value}` tuples among a document's forms.
/// Comparison is case-sensitive and the first occurrence wins. Returns
/// `None` when the section is absent; absence is never an error.
pub fn section<'a>(forms: &'a [Term], name: &str) -> Option<&'a Term> {
    forms.iter().find_map(|form| binding(form, name))
}

/// Find the value of a named property inside a property list
///
/// Property lists are `[{key, Value}, ...]` terms. Entries that are not
/// two-or-more element tuples headed by an atom are skipped. The first
/// matching key wins.
pub fn proplist_value<'a>(list: &'a Term, key: &str) -> Option<&'a Term> {
    list.list_elements()?
        .iter()
        .find_map(|entry| binding(entry, key))
}

fn binding<'a>(term: &'a Term, name: &str) -> Option<&'a Term> {
    let elements = term.tuple_elements()?;
    match elements {
        [Term::Atom(head), value, ..] if head == name => Some(value),
        _ => None,
    }
}

/// Extract dependency names from a dependency list term
///
/// Both legal entry shapes are covered: a bare atom names the dependency
/// directly, and a tuple headed by an atom names it through its first
/// element (versioned `{dep, "1.0.0"}` and qualified
/// `{dep, {git, Url, Ref}}` forms alike). Entries matching neither shape
/// are silently skipped so that declarations carrying extra metadata do
/// not poison the rest of the list.
pub fn dependency_names(list: &Term) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let Some(elements) = list.list_elements() else {
        return names;
    };
    for entry in elements {
        match entry {
            Term::Atom(name) => {
                names.insert(name.clone());
            }
            Term::Tuple(elements) => {
                if let Some(Term::Atom(name)) = elements.first() {
                    names.insert(name.clone());
                }
            }
            _ => {}
        }
    }
    names
}
