use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub struct InputArgs {
  /// JSON manifest listing the modules to bundle.
  pub manifest: PathBuf,

  /// Entry module id. Overrides the manifest.
  #[clap(long, short)]
  pub entry: Option<String>,

  /// Export of the entry that the bundle's consumer reads. Repeatable.
  #[clap(long = "used-export", action = clap::ArgAction::Append)]
  pub used_exports: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long, short = 'o')]
  pub file: Option<String>,

  /// Banner written at the top of the bundle.
  #[clap(long)]
  pub name: Option<String>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, short = 'm')]
  pub minify: bool,

  /// Keep every reachable module and export.
  #[clap(long)]
  pub no_tree_shake: bool,

  #[clap(long)]
  pub lint: bool,

  #[clap(long, short = 's')]
  pub silent: bool,
}
