//! Diagnostics for misconfigured comparisons.

use thiserror::Error;

use crate::reflect::Category;

/// A configuration mistake discovered while comparing.
///
/// None of these depend on the data being compared; they mean a type was
/// wired into the engine incorrectly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EqualError {
    #[error(
        "{type_name} must not implement Comparable: \
         {category} shapes are compared structurally by the engine"
    )]
    ProtectedShape {
        type_name: String,
        category: Category,
    },
    #[error(
        "sum types must not use the record comparison; \
         <{type_name}> should implement ComparableEnum instead"
    )]
    SumTypeAsRecord { type_name: String },
    #[error("{type_name} has no fields to compare ({category} shape); implement Comparable::equals")]
    NoSynthesizedRule {
        type_name: String,
        category: Category,
    },
    #[error("type {type_name} must implement Comparable")]
    UnhandledShape { type_name: String },
    #[error("cannot read the active case of sum type {type_name}")]
    DiscriminantUnavailable { type_name: String },
}

/// Reports a fatal diagnostic and panics with it.
#[cold]
pub(crate) fn abort(err: EqualError) -> ! {
    tracing::error!(error = %err, "structural comparison aborted");
    panic!("{err}")
}

/// Type name with module path and generic parameters stripped.
///
/// ```
/// use structural_eq::display_name;
///
/// assert_eq!(display_name("alloc::vec::Vec<alloc::string::String>"), "Vec");
/// assert_eq!(display_name("my_crate::Stack"), "Stack");
/// ```
pub fn display_name(type_name: &str) -> &str {
    let base = match type_name.find('<') {
        Some(idx) => &type_name[..idx],
        None => type_name,
    };
    match base.rfind("::") {
        Some(idx) => &base[idx + 2..],
        None => base,
    }
}
