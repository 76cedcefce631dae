use tinypack_common::{side_effects::DeterminedSideEffects, BuildOrder};

use super::LinkStage;

impl LinkStage<'_> {
  /// A module that requires a module with side effects runs those side effects too.
  ///
  /// `build_order` places every dependency before its importers, so a single forward pass sees
  /// each dependency's final answer before it is needed.
  pub(crate) fn determine_side_effects(&mut self, build_order: &BuildOrder) {
    if !self.options.tree_shake {
      for &idx in build_order.iter() {
        self.metadata[idx].side_effects = DeterminedSideEffects::NoTreeshake;
      }
      return;
    }

    for &idx in build_order.iter() {
      let meta = &self.metadata[idx];
      if meta.side_effects.has_side_effects() {
        continue;
      }

      let inherits = meta
        .dependencies
        .iter()
        .any(|dependency| self.metadata[*dependency].side_effects.has_side_effects());
      if inherits {
        tracing::trace!("{} inherits side effects", self.module_table[idx].id);
        self.metadata[idx].side_effects = DeterminedSideEffects::Inherited;
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use pretty_assertions::assert_eq;
  use tinypack_common::{
    side_effects::DeterminedSideEffects, BundlerOptions, ModuleDescriptor, ModuleTable,
  };

  use crate::{link_stage::LinkStage, utils::normalize_options::normalize_options};

  fn side_effects_of(
    options: BundlerOptions,
    modules: Vec<ModuleDescriptor>,
  ) -> Vec<(String, DeterminedSideEffects)> {
    let mut table = ModuleTable::default();
    for module in modules {
      table.register(module).unwrap();
    }
    let options = Arc::new(normalize_options(options));
    let mut stage = LinkStage::new(&table, &options);
    let order = stage.resolve_order(&options.entry).unwrap();
    stage.determine_side_effects(&order);
    order.iter().map(|idx| (table[*idx].id.to_string(), stage.metadata[*idx].side_effects)).collect()
  }

  #[test]
  fn side_effects_propagate_to_importers() {
    let result = side_effects_of(
      BundlerOptions::default(),
      vec![
        ModuleDescriptor::new("main", "").with_dependencies(["polyfill", "pure"]),
        ModuleDescriptor::new("polyfill", "").with_dependencies(["setup"]),
        ModuleDescriptor::new("setup", "").with_side_effects(true),
        ModuleDescriptor::new("pure", ""),
      ],
    );
    assert_eq!(
      result,
      vec![
        ("setup".to_string(), DeterminedSideEffects::UserDefined(true)),
        ("polyfill".to_string(), DeterminedSideEffects::Inherited),
        ("pure".to_string(), DeterminedSideEffects::UserDefined(false)),
        ("main".to_string(), DeterminedSideEffects::Inherited),
      ]
    );
  }

  #[test]
  fn disabled_tree_shaking_marks_everything() {
    let result = side_effects_of(
      BundlerOptions { tree_shake: Some(false), ..Default::default() },
      vec![ModuleDescriptor::new("main", "").with_dependencies(["pure"]), ModuleDescriptor::new("pure", "")],
    );
    assert!(result.iter().all(|(_, side_effects)| *side_effects == DeterminedSideEffects::NoTreeshake));
  }
}
