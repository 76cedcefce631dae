use arcstr::ArcStr;

use crate::{LintRules, ModuleId};

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub entry: ModuleId,
  pub used_exports: Vec<ArcStr>,

  // --- Transform
  pub tree_shake: bool,
  pub minify: bool,
  pub lint: bool,
  pub lint_rules: LintRules,

  // --- Output
  pub name: Option<String>,
  pub dir: String,
  pub file: String,
}

impl NormalizedBundlerOptions {
  pub fn output_filename(&self) -> &str {
    &self.file
  }
}
