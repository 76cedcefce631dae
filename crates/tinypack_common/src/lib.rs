mod bundler_options;
mod module;
mod types;

pub use bundler_options::{
  lint_rules::LintRules, normalized_bundler_options::NormalizedBundlerOptions, BundlerOptions,
};

pub use crate::{
  module::{module_descriptor::ModuleDescriptor, Module},
  types::{
    build_order::BuildOrder,
    bundle_artifact::BundleArtifact,
    entry_point::EntryPoint,
    lint_diagnostic::{Diagnostic, LintRule, Severity},
    module_id::ModuleId,
    module_table::{IndexModules, ModuleTable},
    output_asset::OutputAsset,
    raw_idx::ModuleIdx,
    side_effects,
    source::Source,
    source_joiner::SourceJoiner,
    used_export_set::UsedExportSet,
  },
};
