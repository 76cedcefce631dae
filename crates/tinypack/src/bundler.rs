use std::{fs, path::Path, sync::Arc};

use anyhow::Context;
use tinypack_common::{BundlerOptions, ModuleDescriptor};
use tinypack_ecmascript::EcmaTransformer;
use tinypack_error::{BuildResult, BuildStage, ResultExt};
use tinypack_plugin::{SharedLinter, SharedTransformer};

use crate::{
  builtin_linter::BuiltinLinter,
  generate_stage::GenerateStage,
  link_stage::LinkStage,
  scan_stage::ScanStage,
  types::{build_state::BuildState, bundle_output::BundleOutput, SharedOptions},
  utils::normalize_options::normalize_options,
};

pub struct Bundler {
  pub(crate) options: SharedOptions,
  pub(crate) transformer: SharedTransformer,
  pub(crate) linter: SharedLinter,
  state: BuildState,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> Self {
    let options = normalize_options(options);
    let transformer: SharedTransformer = Arc::new(EcmaTransformer::new(options.minify));
    let linter: SharedLinter = Arc::new(BuiltinLinter::new(options.lint_rules));
    Bundler { options: Arc::new(options), transformer, linter, state: BuildState::Idle }
  }

  pub fn with_transformer(options: BundlerOptions, transformer: SharedTransformer) -> Self {
    Bundler { transformer, ..Self::new(options) }
  }

  #[must_use]
  pub fn with_linter(mut self, linter: SharedLinter) -> Self {
    self.linter = linter;
    self
  }

  pub fn options(&self) -> &SharedOptions {
    &self.options
  }

  pub fn state(&self) -> BuildState {
    self.state
  }

  /// Bundles `modules` in memory.
  pub fn generate(&mut self, modules: Vec<ModuleDescriptor>) -> BuildResult<BundleOutput> {
    let result = self.build(modules);
    self.state = match &result {
      Ok(output) => {
        tracing::info!(
          "bundled {} modules ({} pruned dependencies)",
          output.artifact.retained_order.len(),
          output.artifact.pruned_dependencies.len()
        );
        BuildState::Done
      }
      Err(err) => BuildState::Failed(err.stage),
    };
    result
  }

  /// Bundles `modules` and writes the assets into the output directory.
  pub fn write(&mut self, modules: Vec<ModuleDescriptor>) -> anyhow::Result<BundleOutput> {
    let output = self.generate(modules)?;

    let dir = Path::new(&self.options.dir);
    fs::create_dir_all(dir)
      .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    for asset in &output.assets {
      let dest = dir.join(asset.filename());
      fs::write(&dest, asset.content_as_bytes())
        .with_context(|| format!("Failed to write {}", dest.display()))?;
      tracing::info!("wrote {}", dest.display());
    }

    Ok(output)
  }

  fn build(&mut self, modules: Vec<ModuleDescriptor>) -> BuildResult<BundleOutput> {
    tracing::info!("bundling {} modules from entry {}", modules.len(), self.options.entry);

    self.state = BuildState::Running(BuildStage::Registering);
    let scan_stage_output = ScanStage::new().scan(modules)?;

    self.state = BuildState::Running(BuildStage::Resolving);
    let mut link_stage = LinkStage::new(&scan_stage_output.module_table, &self.options);
    let build_order =
      link_stage.resolve_order(&self.options.entry).in_stage(BuildStage::Resolving)?;

    self.state = BuildState::Running(BuildStage::TreeShaking);
    let shaken =
      link_stage.shake(&build_order, &self.options.used_exports).in_stage(BuildStage::TreeShaking)?;
    let link_stage_output = link_stage.into_output(build_order, shaken);
    for warning in &link_stage_output.warnings {
      tracing::warn!("{warning}");
    }

    self.state = BuildState::Running(BuildStage::Emitting);
    let linter = self.options.lint.then_some(&*self.linter);
    GenerateStage::new(
      &link_stage_output,
      &scan_stage_output.module_table,
      &self.options,
      &*self.transformer,
      linter,
    )
    .generate()
  }
}
