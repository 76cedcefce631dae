use std::ops::Index;

use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use tinypack_error::BuildDiagnostic;

use crate::{Module, ModuleDescriptor, ModuleId, ModuleIdx};

pub type IndexModules = IndexVec<ModuleIdx, Module>;

/// The module registry: every module of one build, addressable by id or by index.
///
/// Cross references are not validated here. A module may name a dependency that is registered
/// later, or never; that is for the resolver to find out.
#[derive(Debug, Default)]
pub struct ModuleTable {
  pub modules: IndexModules,
  id_to_idx: FxHashMap<ModuleId, ModuleIdx>,
}

impl ModuleTable {
  pub fn register(&mut self, descriptor: ModuleDescriptor) -> Result<ModuleIdx, BuildDiagnostic> {
    let id = ModuleId::new(descriptor.id.as_str());
    if self.id_to_idx.contains_key(&id) {
      return Err(BuildDiagnostic::DuplicateModule { id: id.into() });
    }

    let idx = self.modules.next_idx();
    self.modules.push(Module::from_descriptor(idx, descriptor));
    self.id_to_idx.insert(id, idx);
    Ok(idx)
  }

  pub fn get(&self, id: &str) -> Result<&Module, BuildDiagnostic> {
    self
      .idx_of(id)
      .map(|idx| &self.modules[idx])
      .ok_or_else(|| BuildDiagnostic::UnresolvedModule { id: id.into() })
  }

  pub fn idx_of(&self, id: &str) -> Option<ModuleIdx> {
    self.id_to_idx.get(id).copied()
  }

  pub fn contains(&self, id: &str) -> bool {
    self.id_to_idx.contains_key(id)
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Module> {
    self.modules.iter()
  }
}

impl Index<ModuleIdx> for ModuleTable {
  type Output = Module;

  fn index(&self, idx: ModuleIdx) -> &Self::Output {
    &self.modules[idx]
  }
}
