use std::hash::{BuildHasherDefault, Hash};

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

pub trait FxIndexSetExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<T: Hash + Eq> FxIndexSetExt for FxIndexSet<T> {
  fn with_capacity(capacity: usize) -> Self {
    FxIndexSet::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
  }
}

pub trait FxIndexMapExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<K: Hash + Eq, V> FxIndexMapExt for FxIndexMap<K, V> {
  fn with_capacity(capacity: usize) -> Self {
    FxIndexMap::with_capacity_and_hasher(capacity, BuildHasherDefault::default())
  }
}
