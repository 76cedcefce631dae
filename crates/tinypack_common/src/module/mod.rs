pub mod module_descriptor;

use arcstr::ArcStr;
use tinypack_utils::indexmap::{FxIndexMap, FxIndexSet};

use crate::{side_effects::DeterminedSideEffects, ModuleDescriptor, ModuleId, ModuleIdx};

/// A registered module. Immutable once it is in the `ModuleTable`.
#[derive(Debug)]
pub struct Module {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub source: ArcStr,
  /// Declared dependencies in source order, duplicates collapsed.
  pub dependencies: FxIndexSet<ModuleId>,
  pub exports: FxIndexSet<ArcStr>,
  /// Export names of each dependency that this module's source refers to.
  pub references: FxIndexMap<ModuleId, FxIndexSet<ArcStr>>,
  pub side_effects: DeterminedSideEffects,
}

impl Module {
  pub fn from_descriptor(idx: ModuleIdx, descriptor: ModuleDescriptor) -> Self {
    let ModuleDescriptor {
      id,
      source,
      dependency_ids,
      exported_names,
      references,
      has_side_effects,
    } = descriptor;

    Self {
      idx,
      id: ModuleId::from(id),
      source: source.into(),
      dependencies: dependency_ids.into_iter().map(ModuleId::from).collect(),
      exports: exported_names.into_iter().map(ArcStr::from).collect(),
      references: references
        .into_iter()
        .map(|(dependency, names)| {
          (ModuleId::from(dependency), names.into_iter().map(ArcStr::from).collect())
        })
        .collect(),
      side_effects: DeterminedSideEffects::UserDefined(has_side_effects),
    }
  }

  /// Position of `name` in the declared export list.
  pub fn export_position(&self, name: &str) -> Option<usize> {
    self.exports.get_index_of(name)
  }

  pub fn referenced_exports_of(&self, dependency: &str) -> Option<&FxIndexSet<ArcStr>> {
    self.references.get(dependency)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::Module;
  use crate::{ModuleDescriptor, ModuleIdx};

  #[test]
  fn duplicate_dependencies_are_collapsed_in_order() {
    let module = Module::from_descriptor(
      ModuleIdx::from_usize(0),
      ModuleDescriptor::new("main", "").with_dependencies(["b", "a", "b", "c", "a"]),
    );
    assert_eq!(module.dependencies.iter().map(|id| &**id).collect::<Vec<_>>(), ["b", "a", "c"]);
  }

  #[test]
  fn references_are_keyed_by_dependency() {
    let module = Module::from_descriptor(
      ModuleIdx::from_usize(0),
      ModuleDescriptor::new("main", "")
        .with_dependencies(["utils"])
        .with_references("utils", ["add", "add", "multiply"]),
    );
    let referenced = module.referenced_exports_of("utils").unwrap();
    assert_eq!(referenced.iter().map(|name| name.as_str()).collect::<Vec<_>>(), ["add", "multiply"]);
    assert!(module.referenced_exports_of("math").is_none());
  }
}
