mod lint_modules;
pub mod transform_cache;

use rustc_hash::FxHashSet;
use tinypack_common::{
  BuildOrder, BundleArtifact, ModuleIdx, ModuleTable, OutputAsset, SourceJoiner,
};
use tinypack_error::{BuildDiagnostic, BuildResult, BuildStage, ResultExt};
use tinypack_plugin::{Linter, Transformer};
use tinypack_utils::{
  concat_string,
  ecmascript::js_string_literal,
  indexmap::{FxIndexMap, FxIndexSet},
};

use crate::{
  link_stage::LinkStageOutput,
  types::{bundle_output::BundleOutput, SharedOptions},
  utils::render_module::{render_module, render_pruned_module},
};

use self::transform_cache::TransformCache;

const RUNTIME_LOADER: &str = include_str!("runtime/loader.js");

pub struct GenerateStage<'a> {
  link_output: &'a LinkStageOutput,
  module_table: &'a ModuleTable,
  options: &'a SharedOptions,
  transformer: &'a dyn Transformer,
  linter: Option<&'a dyn Linter>,
  transform_cache: TransformCache,
}

impl<'a> GenerateStage<'a> {
  pub fn new(
    link_output: &'a LinkStageOutput,
    module_table: &'a ModuleTable,
    options: &'a SharedOptions,
    transformer: &'a dyn Transformer,
    linter: Option<&'a dyn Linter>,
  ) -> Self {
    Self {
      link_output,
      module_table,
      options,
      transformer,
      linter,
      transform_cache: TransformCache::default(),
    }
  }

  pub fn generate(&mut self) -> BuildResult<BundleOutput> {
    let link_output = self.link_output;
    let artifact =
      self.emit(&link_output.retained_order, link_output.entry.idx).in_stage(BuildStage::Emitting)?;
    let diagnostics = self.lint_modules(&link_output.retained_order);

    let assets = vec![OutputAsset {
      filename: self.options.output_filename().to_string(),
      content: artifact.code.clone(),
    }];

    Ok(BundleOutput {
      artifact,
      used_exports: link_output.used_exports.clone(),
      assets,
      warnings: link_output.warnings.clone(),
      diagnostics,
    })
  }

  /// Transforms every retained module and assembles them into one self-contained script.
  ///
  /// The script defines a module unit per retained module, in `retained_order`, plus an empty
  /// unit for each pruned module that is still required. It then defines the loader and finally
  /// requires `entry`, exactly once. Nothing is returned unless every transform succeeded.
  pub fn emit(
    &mut self,
    retained_order: &BuildOrder,
    entry: ModuleIdx,
  ) -> Result<BundleArtifact, BuildDiagnostic> {
    let module_table = self.module_table;

    let mut module_bodies = FxIndexMap::default();
    for &idx in retained_order.iter() {
      let module = &module_table[idx];
      let code = self.transform_cache.get_or_transform(module, self.transformer)?;
      module_bodies.insert(module.id.clone(), code);
    }

    let retained = retained_order.iter().copied().collect::<FxHashSet<_>>();
    let pruned_dependencies = retained_order
      .iter()
      .flat_map(|idx| &self.link_output.metadata[*idx].dependencies)
      .copied()
      .filter(|idx| !retained.contains(idx))
      .collect::<FxIndexSet<_>>()
      .into_iter()
      .map(|idx| module_table[idx].id.clone())
      .collect::<Vec<_>>();

    let entry_id = module_table[entry].id.clone();

    let code = {
      let mut source_joiner = SourceJoiner::default();
      if let Some(name) = &self.options.name {
        source_joiner.append_source(concat_string!("// ", name));
      }
      source_joiner.append_source("(function () {");
      source_joiner.append_source("var __modules = Object.create(null);");
      source_joiner.append_source("var __cache = Object.create(null);");
      for (id, body) in &module_bodies {
        render_module(&mut source_joiner, id, body);
      }
      for id in &pruned_dependencies {
        render_pruned_module(&mut source_joiner, id);
      }
      source_joiner.append_source(RUNTIME_LOADER.trim_end());
      source_joiner.append_source(concat_string!("requireModule(", js_string_literal(&entry_id), ");"));
      source_joiner.append_source("})();");
      source_joiner.join()
    };

    tracing::debug!(
      "emitted {} modules ({} pruned stubs), {} bytes",
      module_bodies.len(),
      pruned_dependencies.len(),
      code.len()
    );

    Ok(BundleArtifact {
      entry_id,
      retained_order: retained_order.to_ids(module_table),
      module_bodies,
      pruned_dependencies,
      code,
    })
  }

  pub fn transform_cache(&self) -> &TransformCache {
    &self.transform_cache
  }
}
