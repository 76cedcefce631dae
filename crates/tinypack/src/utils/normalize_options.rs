use arcstr::ArcStr;
use tinypack_common::{BundlerOptions, ModuleId, NormalizedBundlerOptions};

pub fn normalize_options(raw_options: BundlerOptions) -> NormalizedBundlerOptions {
  NormalizedBundlerOptions {
    entry: ModuleId::new(raw_options.entry.unwrap_or_else(|| "main".to_string())),
    used_exports: raw_options
      .used_exports
      .unwrap_or_default()
      .into_iter()
      .map(ArcStr::from)
      .collect(),
    tree_shake: raw_options.tree_shake.unwrap_or(true),
    minify: raw_options.minify.unwrap_or(false),
    lint: raw_options.lint.unwrap_or(false),
    lint_rules: raw_options.lint_rules.unwrap_or_default(),
    name: raw_options.name,
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    file: raw_options.file.unwrap_or_else(|| "bundle.js".to_string()),
  }
}
