mod builtin_linter;
mod bundler;
mod generate_stage;
mod link_stage;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  builtin_linter::{format_diagnostics, BuiltinLinter},
  bundler::Bundler,
  generate_stage::{transform_cache::TransformCache, GenerateStage},
  link_stage::{tree_shaking::TreeShakingOutput, LinkStage, LinkStageOutput},
  scan_stage::{ScanStage, ScanStageOutput},
  types::{build_state::BuildState, bundle_output::BundleOutput, SharedOptions},
  utils::normalize_options::normalize_options,
};
pub use tinypack_common::*;
pub use tinypack_error::{BuildDiagnostic, BuildError, BuildResult, BuildStage, EventKind};
pub use tinypack_plugin::{Linter, SharedLinter, SharedTransformer, Transformer};
