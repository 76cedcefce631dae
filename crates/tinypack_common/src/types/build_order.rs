use std::ops::Deref;

use crate::{ModuleId, ModuleIdx, ModuleTable};

/// Modules reachable from the entry, each placed strictly after all of its dependencies.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildOrder(Vec<ModuleIdx>);

impl BuildOrder {
  pub fn new(modules: Vec<ModuleIdx>) -> Self {
    Self(modules)
  }

  pub fn ids<'a>(&'a self, table: &'a ModuleTable) -> impl Iterator<Item = &'a ModuleId> + 'a {
    self.0.iter().map(|idx| &table[*idx].id)
  }

  pub fn to_ids(&self, table: &ModuleTable) -> Vec<ModuleId> {
    self.ids(table).cloned().collect()
  }
}

impl Deref for BuildOrder {
  type Target = [ModuleIdx];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
