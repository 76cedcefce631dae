pub mod lint_rules;
pub mod normalized_bundler_options;

use crate::LintRules;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  pub entry: Option<String>,
  /// Exports of the entry that the bundle's consumer reads.
  pub used_exports: Option<Vec<String>>,

  // --- Transform
  pub tree_shake: Option<bool>,
  pub minify: Option<bool>,
  pub lint: Option<bool>,
  pub lint_rules: Option<LintRules>,

  // --- Output
  pub name: Option<String>,
  pub dir: Option<String>,
  pub file: Option<String>,
}
