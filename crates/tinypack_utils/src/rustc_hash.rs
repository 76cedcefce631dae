use std::hash::Hash;

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};

pub trait FxHashSetExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<T: Hash + Eq> FxHashSetExt for FxHashSet<T> {
  fn with_capacity(capacity: usize) -> Self {
    FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher)
  }
}

pub trait FxHashMapExt {
  fn with_capacity(capacity: usize) -> Self;
}

impl<K: Hash + Eq, V> FxHashMapExt for FxHashMap<K, V> {
  fn with_capacity(capacity: usize) -> Self {
    FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher)
  }
}
