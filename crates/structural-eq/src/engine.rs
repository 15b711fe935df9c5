//! The recursive structural comparison.
//!
//! [`property_equal`] classifies a pair of values and applies the first
//! matching rule:
//!
//! 1. both carry the [`Comparable`] capability: its bound function decides
//! 2. functions: always equal
//! 3. tuples: positional, pairwise
//! 4. ordered sequences: equal length, positional, pairwise
//! 5. associative maps: equal key sets, equal values per key, order ignored
//! 6. nullables: both empty, or both present with equal contents
//! 7. anything else aborts, asking for the capability
//!
//! [`Comparable`]: crate::Comparable

use std::collections::HashSet;

use crate::capability::check_declaration;
use crate::error::{abort, EqualError};
use crate::reflect::{Category, Child, Reflect};

/// Compares two values of the same declared type.
///
/// Panics with an [`EqualError`] diagnostic when a type is wired into the
/// engine incorrectly.
pub fn equal<T: Reflect>(a: &T, b: &T) -> bool {
    equal_values(a, b)
}

/// Type-erased [`equal`].
pub fn equal_values(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    for value in [a, b] {
        if let Err(err) = check_declaration(value) {
            abort(err);
        }
    }
    property_equal(a, b)
}

pub(crate) fn property_equal(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    if let (Some(lhs), Some(_)) = (a.as_comparable(), b.as_comparable()) {
        return lhs.dyn_equal(b);
    }

    match (a.category(), b.category()) {
        (Category::Function, Category::Function) => true,
        (Category::Tuple, Category::Tuple) | (Category::Sequence, Category::Sequence) => {
            children_equal(&a.children(), &b.children())
        }
        (Category::Map, Category::Map) => map_equal(a, b),
        (Category::Nullable, Category::Nullable) => nullable_equal(a, b),
        _ => abort(EqualError::UnhandledShape {
            type_name: a.type_name().to_string(),
        }),
    }
}

/// The comparison a [`Comparable`] type gets unless it overrides
/// [`Comparable::equals`]: every field, in declaration order.
///
/// [`Comparable`]: crate::Comparable
/// [`Comparable::equals`]: crate::Comparable::equals
pub fn synthesized_equal<T: Reflect>(a: &T, b: &T) -> bool {
    let category = a.category();
    match category {
        Category::Sum => abort(EqualError::SumTypeAsRecord {
            type_name: a.type_name().to_string(),
        }),
        Category::Nullable | Category::Sequence | Category::Map => {
            if let Err(err) = check_declaration(a) {
                abort(err);
            }
        }
        Category::Primitive | Category::Opaque | Category::Function => {
            abort(EqualError::NoSynthesizedRule {
                type_name: a.type_name().to_string(),
                category,
            })
        }
        Category::Record | Category::Tuple => {}
    }

    let equal = children_equal(&a.children(), &b.children());
    if !equal {
        tracing::trace!(type_name = a.type_name(), "fields differ");
    }
    equal
}

/// Equal counts and pairwise equal values, in order.
pub(crate) fn children_equal(a: &[Child<'_>], b: &[Child<'_>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b)
        .all(|(lhs, rhs)| property_equal(lhs.value, rhs.value))
}

fn map_equal(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    let lhs = a.children();
    let rhs = b.children();
    if lhs.len() != rhs.len() {
        tracing::trace!(lhs = lhs.len(), rhs = rhs.len(), "map sizes differ");
        return false;
    }
    // Keys of `b` already paired with a key of `a`, by address.
    let mut matched = HashSet::with_capacity(rhs.len());
    for (i, entry) in lhs.iter().enumerate() {
        let key = entry_key(entry);
        let Some(other) = find_entry(key, b, &rhs, i, &matched) else {
            tracing::trace!(key_type = key.type_name(), "map key sets differ");
            return false;
        };
        matched.insert(address(entry_key(&other)));
        if !property_equal(entry.value, other.value) {
            return false;
        }
    }
    true
}

/// Pairs `key` with an unmatched entry of `map`. Keyed lookup first; maps
/// without one, or keys it cannot place, fall back to scanning `entries`
/// starting at `hint`.
fn find_entry<'a>(
    key: &dyn Reflect,
    map: &'a dyn Reflect,
    entries: &[Child<'a>],
    hint: usize,
    matched: &HashSet<*const ()>,
) -> Option<Child<'a>> {
    let pairs = |candidate: &Child<'_>| {
        let candidate_key = entry_key(candidate);
        !matched.contains(&address(candidate_key)) && property_equal(key, candidate_key)
    };
    if let Some(candidate) = map.lookup(key).filter(|candidate| pairs(candidate)) {
        return Some(candidate);
    }
    let (before, from_hint) = entries.split_at(hint.min(entries.len()));
    from_hint
        .iter()
        .chain(before)
        .find(|candidate| pairs(*candidate))
        .copied()
}

fn address(value: &dyn Reflect) -> *const () {
    value as *const dyn Reflect as *const ()
}

fn entry_key<'a>(entry: &Child<'a>) -> &'a dyn Reflect {
    match entry.key {
        Some(key) => key,
        None => entry.value,
    }
}

fn nullable_equal(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    let lhs = a.children();
    let rhs = b.children();
    match (lhs.first(), rhs.first()) {
        (Some(lhs), Some(rhs)) => property_equal(lhs.value, rhs.value),
        (None, None) => true,
        _ => false,
    }
}
