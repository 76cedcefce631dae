use arcstr::ArcStr;
use tinypack_utils::indexmap::{FxIndexMap, FxIndexSet};

use crate::ModuleId;

/// For every retained module, the exports proven reachable from the entry.
///
/// Modules appear in build order and names in declaration order, so two builds of the same graph
/// compare equal regardless of how the usage was discovered.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UsedExportSet(FxIndexMap<ModuleId, FxIndexSet<ArcStr>>);

impl UsedExportSet {
  pub fn new(inner: FxIndexMap<ModuleId, FxIndexSet<ArcStr>>) -> Self {
    Self(inner)
  }

  pub fn get(&self, module: &str) -> Option<&FxIndexSet<ArcStr>> {
    self.0.get(module)
  }

  pub fn is_used(&self, module: &str, name: &str) -> bool {
    self.0.get(module).is_some_and(|names| names.contains(name))
  }

  pub fn iter(&self) -> impl Iterator<Item = (&ModuleId, &FxIndexSet<ArcStr>)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}
