mod determine_side_effects;
mod sort_modules;
pub mod tree_shaking;

use tinypack_common::{BuildOrder, EntryPoint, ModuleTable, UsedExportSet};
use tinypack_error::BuildDiagnostic;

use crate::types::{
  linking_metadata::{LinkingMetadata, LinkingMetadataVec},
  SharedOptions,
};

use self::tree_shaking::TreeShakingOutput;

#[derive(Debug)]
pub struct LinkStageOutput {
  pub entry: EntryPoint,
  /// Every module reachable from the entry, dependencies first.
  pub build_order: BuildOrder,
  /// `build_order` restricted to the modules that survived tree shaking.
  pub retained_order: BuildOrder,
  pub used_exports: UsedExportSet,
  pub metadata: LinkingMetadataVec,
  pub warnings: Vec<BuildDiagnostic>,
}

/// Resolves the dependency graph of a registered module table and decides which modules survive.
///
/// Resolution and tree shaking are separate calls, `Bundler` drives them one after the other.
#[derive(Debug)]
pub struct LinkStage<'a> {
  pub module_table: &'a ModuleTable,
  pub options: &'a SharedOptions,
  pub metadata: LinkingMetadataVec,
  pub warnings: Vec<BuildDiagnostic>,
}

impl<'a> LinkStage<'a> {
  pub fn new(module_table: &'a ModuleTable, options: &'a SharedOptions) -> Self {
    let metadata = module_table
      .iter()
      .map(|module| LinkingMetadata { side_effects: module.side_effects, ..Default::default() })
      .collect();

    Self { module_table, options, metadata, warnings: vec![] }
  }

  pub fn into_output(self, build_order: BuildOrder, shaken: TreeShakingOutput) -> LinkStageOutput {
    let TreeShakingOutput { entry, retained_order, used_exports } = shaken;
    LinkStageOutput {
      entry,
      build_order,
      retained_order,
      used_exports,
      metadata: self.metadata,
      warnings: self.warnings,
    }
  }
}
