//! Introspection interface the equality engine classifies values with.

use std::any::Any;
use std::fmt;

use crate::capability::DynComparable;

/// Structural classification of a runtime value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fields with stable, author-declared identity.
    Record,
    /// Anonymous ordered fields.
    Tuple,
    /// Ordered sequence; element order is significant.
    Sequence,
    /// Associative map; entry order is not significant.
    Map,
    /// Optional wrapper with zero or one child.
    Nullable,
    /// Tagged union. Zero children means a payload-less case.
    Sum,
    /// Callable. Never compared.
    Function,
    /// Reference whose equality is identity.
    Opaque,
    /// Leaf value with its own comparison.
    Primitive,
}

impl Category {
    /// Shapes that are handled centrally and may not declare [`Comparable`].
    ///
    /// [`Comparable`]: crate::Comparable
    pub fn is_protected(self) -> bool {
        matches!(self, Category::Nullable | Category::Sequence | Category::Map)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Record => "record",
            Category::Tuple => "tuple",
            Category::Sequence => "ordered-sequence",
            Category::Map => "associative-map",
            Category::Nullable => "nullable",
            Category::Sum => "sum-type",
            Category::Function => "function",
            Category::Opaque => "opaque-reference",
            Category::Primitive => "primitive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit identity of the active case of a sum-type value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Stable position of the case in its declaration.
    pub index: u32,
    /// Case name.
    pub name: &'static str,
}

impl Tag {
    pub const fn new(index: u32, name: &'static str) -> Self {
        Self { index, name }
    }
}

/// One child of a reflected value.
///
/// Map entries carry their key in [`Child::key`]; every other shape leaves it
/// empty.
#[derive(Clone, Copy)]
pub struct Child<'a> {
    pub label: Option<&'a str>,
    pub key: Option<&'a dyn Reflect>,
    pub value: &'a dyn Reflect,
}

impl<'a> Child<'a> {
    /// A named field.
    pub fn labeled(label: &'a str, value: &'a dyn Reflect) -> Self {
        Self {
            label: Some(label),
            key: None,
            value,
        }
    }

    /// A positional element.
    pub fn unlabeled(value: &'a dyn Reflect) -> Self {
        Self {
            label: None,
            key: None,
            value,
        }
    }

    /// A map entry.
    pub fn entry(key: &'a dyn Reflect, value: &'a dyn Reflect) -> Self {
        Self {
            label: None,
            key: Some(key),
            value,
        }
    }
}

impl fmt::Debug for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Child")
            .field("label", &self.label)
            .field("key", &self.key.map(|key| key.type_name()))
            .field("value", &self.value.type_name())
            .finish()
    }
}

/// Runtime shape description of a value.
///
/// Implementations are usually generated by [`record!`] and [`sum_type!`];
/// std types are covered by the crate.
///
/// [`record!`]: crate::record
/// [`sum_type!`]: crate::sum_type
pub trait Reflect: Any {
    fn category(&self) -> Category;

    /// Children in declaration (or iteration) order.
    fn children(&self) -> Vec<Child<'_>>;

    /// Active case of a [`Category::Sum`] value.
    fn tag(&self) -> Option<Tag> {
        None
    }

    /// Keyed access for a [`Category::Map`] value: the entry whose key is
    /// equal to `key` under the map's own lookup.
    ///
    /// `None` means either no such entry or no keyed access for this type;
    /// the engine then scans [`children`](Reflect::children) instead.
    fn lookup(&self, _key: &dyn Reflect) -> Option<Child<'_>> {
        None
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any;

    /// Routes comparisons through the type's bound [`Comparable::equals`].
    /// `None` unless the type declares the capability.
    ///
    /// [`Comparable::equals`]: crate::Comparable::equals
    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_categories() {
        assert!(Category::Nullable.is_protected());
        assert!(Category::Sequence.is_protected());
        assert!(Category::Map.is_protected());
        assert!(!Category::Record.is_protected());
        assert!(!Category::Sum.is_protected());
        assert!(!Category::Primitive.is_protected());
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Sequence.to_string(), "ordered-sequence");
        assert_eq!(Category::Opaque.to_string(), "opaque-reference");
    }

    #[test]
    fn child_constructors() {
        let value = 7i32;
        let key = String::from("k");
        assert_eq!(Child::labeled("x", &value).label, Some("x"));
        assert!(Child::unlabeled(&value).label.is_none());
        let entry = Child::entry(&key, &value);
        assert!(entry.key.is_some());
        assert_eq!(entry.value.type_name(), "i32");
    }
}
