use std::iter;

use arcstr::ArcStr;
use rustc_hash::{FxHashMap, FxHashSet};
use tinypack_common::{BuildOrder, ModuleId, ModuleIdx};
use tinypack_error::BuildDiagnostic;
use tinypack_utils::rustc_hash::FxHashSetExt;

use super::LinkStage;

#[derive(PartialEq, Eq, Debug)]
enum Status<'a> {
  /// A declared dependency that has not been looked up in the module table yet.
  ToBeResolved { importer: ModuleIdx, specifier: &'a ModuleId },
  ToBeExecuted(ModuleIdx),
  WaitForExit(ModuleIdx),
}

impl LinkStage<'_> {
  /// Depth-first post-order over the dependencies of `entry_id`, visiting dependencies in the
  /// order they are declared.
  ///
  /// The traversal keeps its own stack, so deep chains cannot overflow the call stack. The first
  /// cycle found aborts with the exact path of ids that closes it, e.g. `a -> b -> a`.
  pub fn resolve_order(&mut self, entry_id: &str) -> Result<BuildOrder, BuildDiagnostic> {
    let module_table = self.module_table;
    let entry = module_table.get(entry_id)?.idx;

    let mut execution_stack = vec![Status::ToBeExecuted(entry)];
    let mut executed_ids = FxHashSet::with_capacity(module_table.len());
    let mut stack_indexes_of_executing_id = FxHashMap::default();
    let mut sorted_modules = Vec::with_capacity(module_table.len());

    while let Some(status) = execution_stack.pop() {
      let id = match status {
        Status::ToBeResolved { importer, specifier } => {
          let Some(id) = module_table.idx_of(specifier) else {
            return Err(BuildDiagnostic::UnresolvedDependency {
              specifier: specifier.as_arc_str().clone(),
              importer: module_table[importer].id.as_arc_str().clone(),
            });
          };
          self.metadata[importer].dependencies.push(id);
          id
        }
        Status::ToBeExecuted(id) => id,
        Status::WaitForExit(id) => {
          sorted_modules.push(id);
          stack_indexes_of_executing_id.remove(&id);
          continue;
        }
      };

      if executed_ids.contains(&id) {
        if let Some(index) = stack_indexes_of_executing_id.get(&id).copied() {
          // Only modules with `Status::WaitForExit` are on the execution chain
          let path = execution_stack[index..]
            .iter()
            .filter_map(|status| match status {
              Status::WaitForExit(id) => Some(*id),
              Status::ToBeResolved { .. } | Status::ToBeExecuted(_) => None,
            })
            .chain(iter::once(id))
            .map(|id| module_table[id].id.as_arc_str().clone())
            .collect::<Vec<ArcStr>>();
          tracing::debug!("cycle detected while resolving from {entry_id}");
          return Err(BuildDiagnostic::CircularDependency { path });
        }
      } else {
        executed_ids.insert(id);
        execution_stack.push(Status::WaitForExit(id));
        stack_indexes_of_executing_id.insert(id, execution_stack.len() - 1);

        execution_stack.extend(
          module_table[id]
            .dependencies
            .iter()
            .rev()
            .map(|specifier| Status::ToBeResolved { importer: id, specifier }),
        );
      }
    }

    tracing::debug!("resolved {} modules reachable from {entry_id}", sorted_modules.len());
    Ok(BuildOrder::new(sorted_modules))
  }
}
