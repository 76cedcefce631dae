use arcstr::ArcStr;
use oxc_index::{index_vec, IndexVec};
use tinypack_common::{
  side_effects::DeterminedSideEffects, BuildOrder, EntryPoint, ModuleIdx, ModuleTable,
  UsedExportSet,
};
use tinypack_error::BuildDiagnostic;
use tinypack_utils::indexmap::{FxIndexMap, FxIndexSet};

use super::LinkStage;

#[derive(Debug)]
pub struct TreeShakingOutput {
  pub entry: EntryPoint,
  pub retained_order: BuildOrder,
  pub used_exports: UsedExportSet,
}

struct Context<'a> {
  module_table: &'a ModuleTable,
  is_included_vec: IndexVec<ModuleIdx, bool>,
  /// Parallel to each module's declared export list.
  used_exports_vec: IndexVec<ModuleIdx, Vec<bool>>,
  /// Included modules whose references have not been followed yet.
  worklist: Vec<ModuleIdx>,
}

impl Context<'_> {
  fn include_module(&mut self, idx: ModuleIdx) {
    if self.is_included_vec[idx] {
      return;
    }
    self.is_included_vec[idx] = true;
    self.worklist.push(idx);
  }

  fn include_export(&mut self, idx: ModuleIdx, position: usize) {
    let used = &mut self.used_exports_vec[idx][position];
    if !*used {
      *used = true;
      tracing::trace!(
        "{} is used from {}",
        self.module_table[idx].exports[position],
        self.module_table[idx].id
      );
    }
    self.include_module(idx);
  }
}

impl LinkStage<'_> {
  /// Computes the retained modules and, for each of them, the exports that are actually read.
  ///
  /// The entry is always live. Besides it, a module is live when one of its exports is read by a
  /// live module or when it has side effects (declared, or inherited from a dependency). Only live
  /// modules propagate their references, so a pruned importer never keeps anything alive.
  /// `build_order` must come from `resolve_order`; its last module is the entry.
  pub fn shake(
    &mut self,
    build_order: &BuildOrder,
    used_exports_at_entry: &[ArcStr],
  ) -> Result<TreeShakingOutput, BuildDiagnostic> {
    let module_table = self.module_table;
    let Some(&entry) = build_order.last() else {
      return Err(BuildDiagnostic::UnresolvedModule { id: self.options.entry.as_arc_str().clone() });
    };

    self.determine_side_effects(build_order);
    self.check_references(build_order);

    let mut ctx = Context {
      module_table,
      is_included_vec: index_vec![false; module_table.len()],
      used_exports_vec: module_table.iter().map(|module| vec![false; module.exports.len()]).collect(),
      worklist: Vec::with_capacity(build_order.len()),
    };

    for &idx in build_order.iter() {
      match self.metadata[idx].side_effects {
        DeterminedSideEffects::NoTreeshake => {
          ctx.used_exports_vec[idx].fill(true);
          ctx.include_module(idx);
        }
        side_effects if side_effects.has_side_effects() => ctx.include_module(idx),
        DeterminedSideEffects::UserDefined(_) | DeterminedSideEffects::Inherited => {}
      }
    }

    let entry_module = &module_table[entry];
    ctx.include_module(entry);
    for name in used_exports_at_entry {
      match entry_module.export_position(name) {
        Some(position) => ctx.include_export(entry, position),
        None => self.warnings.push(BuildDiagnostic::MissingEntryExport {
          entry: entry_module.id.as_arc_str().clone(),
          name: name.clone(),
        }),
      }
    }

    while let Some(idx) = ctx.worklist.pop() {
      let importer = &module_table[idx];
      for &dependency in &self.metadata[idx].dependencies {
        let importee = &module_table[dependency];
        let Some(names) = importer.referenced_exports_of(&importee.id) else {
          continue;
        };
        for name in names {
          match importee.export_position(name) {
            Some(position) => ctx.include_export(dependency, position),
            None => self.warnings.push(BuildDiagnostic::MissingExport {
              importer: importer.id.as_arc_str().clone(),
              importee: importee.id.as_arc_str().clone(),
              name: name.clone(),
            }),
          }
        }
      }
    }

    let retained_order =
      build_order.iter().copied().filter(|idx| ctx.is_included_vec[*idx]).collect::<Vec<_>>();

    let used_exports = retained_order
      .iter()
      .map(|&idx| {
        let module = &module_table[idx];
        let names = module
          .exports
          .iter()
          .zip(&ctx.used_exports_vec[idx])
          .filter(|(_, used)| **used)
          .map(|(name, _)| name.clone())
          .collect::<FxIndexSet<_>>();
        (module.id.clone(), names)
      })
      .collect::<FxIndexMap<_, _>>();

    tracing::debug!("retained {} of {} reachable modules", retained_order.len(), build_order.len());

    Ok(TreeShakingOutput {
      entry: EntryPoint { idx: entry, used_exports: used_exports_at_entry.to_vec() },
      retained_order: BuildOrder::new(retained_order),
      used_exports: UsedExportSet::new(used_exports),
    })
  }

  /// Warns about references keyed by a module the importer does not depend on. Such references
  /// can never be followed.
  fn check_references(&mut self, build_order: &BuildOrder) {
    for &idx in build_order.iter() {
      let module = &self.module_table[idx];
      for target in module.references.keys() {
        if !module.dependencies.contains(target) {
          self.warnings.push(BuildDiagnostic::UnknownReference {
            importer: module.id.as_arc_str().clone(),
            target: target.as_arc_str().clone(),
          });
        }
      }
    }
  }
}
