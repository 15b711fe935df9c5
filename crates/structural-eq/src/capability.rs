//! The opt-in capability and its routing marker.

use crate::engine;
use crate::error::{abort, display_name, EqualError};
use crate::reflect::{Child, Reflect};
use crate::sum;

/// A type whose values the engine compares through one bound function.
///
/// The provided [`equals`](Comparable::equals) is the synthesized record
/// comparison. Implementing it replaces that comparison for the type
/// everywhere, including where the type is nested inside other values:
///
/// ```
/// use structural_eq::{equal, record, Comparable};
///
/// record! {
///     #[derive(Debug)]
///     pub struct User {
///         pub id: u64,
///         pub last_seen: u64,
///     }
/// }
///
/// impl Comparable for User {
///     fn equals(&self, other: &Self) -> bool {
///         self.id == other.id
///     }
/// }
///
/// let a = User { id: 1, last_seen: 10 };
/// let b = User { id: 1, last_seen: 99 };
/// assert!(equal(&Some(a), &Some(b)));
/// ```
///
/// The type's [`Reflect::as_comparable`] must return `Some(self)`; the
/// declaration macros take care of that.
pub trait Comparable: Reflect + Sized {
    fn equals(&self, other: &Self) -> bool {
        engine::synthesized_equal(self, other)
    }
}

/// Sum types (enums) taking part in the engine.
///
/// Cases are told apart by discrimination ([`crate::sum`]) rather than by
/// field-wise comparison. Once both values hold the same case,
/// [`payloads_equal`](ComparableEnum::payloads_equal) decides whether the
/// associated values match.
pub trait ComparableEnum: Comparable {
    fn payloads_equal(lhs: &[Child<'_>], rhs: &[Child<'_>]) -> bool {
        sum::default_payloads_equal(lhs, rhs)
    }
}

/// Type-erased access to a [`Comparable`] implementation.
///
/// Blanket-implemented; reached through [`Reflect::as_comparable`].
pub trait DynComparable {
    /// `false` when `other` is of a different runtime type.
    fn dyn_equal(&self, other: &dyn Reflect) -> bool;
}

impl<T: Comparable> DynComparable for T {
    fn dyn_equal(&self, other: &dyn Reflect) -> bool {
        let Some(other) = other.as_any().downcast_ref::<T>() else {
            tracing::trace!(
                lhs = self.type_name(),
                rhs = other.type_name(),
                "runtime types differ"
            );
            return false;
        };
        if let Err(err) = check_declaration(self) {
            abort(err);
        }
        self.equals(other)
    }
}

/// Verifies that a value's type may carry [`Comparable`].
///
/// Nullable and collection shapes are compared structurally by the engine and
/// are refused. Values without the capability always pass.
pub fn check_declaration(value: &dyn Reflect) -> Result<(), EqualError> {
    if value.as_comparable().is_none() {
        return Ok(());
    }
    let category = value.category();
    if category.is_protected() {
        return Err(EqualError::ProtectedShape {
            type_name: display_name(value.type_name()).to_string(),
            category,
        });
    }
    Ok(())
}
