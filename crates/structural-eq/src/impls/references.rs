//! Shared references compare by identity; boxes are transparent.

use std::any::Any;
use std::rc::Rc;
use std::sync::Arc;

use crate::capability::{Comparable, DynComparable};
use crate::reflect::{Category, Child, Reflect, Tag};

impl<T: ?Sized + 'static> Reflect for Rc<T> {
    fn category(&self) -> Category {
        Category::Opaque
    }

    fn children(&self) -> Vec<Child<'_>> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl<T: ?Sized + 'static> Comparable for Rc<T> {
    fn equals(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized + 'static> Reflect for Arc<T> {
    fn category(&self) -> Category {
        Category::Opaque
    }

    fn children(&self) -> Vec<Child<'_>> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        Some(self)
    }
}

impl<T: ?Sized + 'static> Comparable for Arc<T> {
    fn equals(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Reflect> Reflect for Box<T> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn children(&self) -> Vec<Child<'_>> {
        (**self).children()
    }

    fn tag(&self) -> Option<Tag> {
        (**self).tag()
    }

    fn lookup(&self, key: &dyn Reflect) -> Option<Child<'_>> {
        (**self).lookup(key)
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn as_comparable(&self) -> Option<&dyn DynComparable> {
        (**self).as_comparable()
    }
}
