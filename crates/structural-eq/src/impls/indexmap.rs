//! Insertion-ordered maps and sets still compare without regard to order.

use std::any::Any;
use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

use crate::reflect::{Category, Child, Reflect};

impl<K, V, S> Reflect for IndexMap<K, V, S>
where
    K: Reflect + Eq + Hash,
    V: Reflect,
    S: BuildHasher + 'static,
{
    fn category(&self) -> Category {
        Category::Map
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter()
            .map(|(key, value)| Child::entry(key, value))
            .collect()
    }

    fn lookup(&self, key: &dyn Reflect) -> Option<Child<'_>> {
        let key = key.as_any().downcast_ref::<K>()?;
        self.get_key_value(key)
            .map(|(key, value)| Child::entry(key, value))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T, S> Reflect for IndexSet<T, S>
where
    T: Reflect + Eq + Hash,
    S: BuildHasher + 'static,
{
    fn category(&self) -> Category {
        Category::Map
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter().map(|item| Child::entry(item, &())).collect()
    }

    fn lookup(&self, key: &dyn Reflect) -> Option<Child<'_>> {
        let key = key.as_any().downcast_ref::<T>()?;
        self.get(key).map(|item| Child::entry(item, &()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
