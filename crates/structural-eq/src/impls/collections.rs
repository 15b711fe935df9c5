//! Containers are reflected but never carry the capability: the engine
//! compares them by shape.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::reflect::{Category, Child, Reflect};

impl<T: Reflect> Reflect for Option<T> {
    fn category(&self) -> Category {
        Category::Nullable
    }

    fn children(&self) -> Vec<Child<'_>> {
        match self {
            Some(value) => vec![Child::labeled("some", value)],
            None => Vec::new(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter().map(|item| Child::unlabeled(item)).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter().map(|item| Child::unlabeled(item)).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn children(&self) -> Vec<Child<'_>> {
        self.iter().map(|item| Child::unlabeled(item)).collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S>
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

impl<K: Reflect + Ord, V: Reflect> Reflect for BTreeMap<K, V> {
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

// Sets are maps whose values are all `()`.

impl<T, S> Reflect for HashSet<T, S>
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

impl<T: Reflect + Ord> Reflect for BTreeSet<T> {
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
