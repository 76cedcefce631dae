use tinypack_common::{BundleArtifact, Diagnostic, OutputAsset, UsedExportSet};
use tinypack_error::BuildDiagnostic;

#[derive(Debug)]
pub struct BundleOutput {
  pub artifact: BundleArtifact,
  pub used_exports: UsedExportSet,
  pub assets: Vec<OutputAsset>,
  /// Non-fatal findings of the link stage, e.g. references to exports that do not exist.
  pub warnings: Vec<BuildDiagnostic>,
  /// Lint findings over retained modules. Empty unless linting is enabled.
  pub diagnostics: Vec<Diagnostic>,
}
