use tinypack_common::{BuildOrder, Diagnostic};

use super::GenerateStage;

impl GenerateStage<'_> {
  /// Lints the original source of every retained module. Findings never fail the build.
  pub(crate) fn lint_modules(&self, retained_order: &BuildOrder) -> Vec<Diagnostic> {
    let Some(linter) = self.linter.filter(|_| self.options.lint) else {
      return vec![];
    };

    let diagnostics = retained_order
      .iter()
      .flat_map(|idx| {
        let module = &self.module_table[*idx];
        linter.lint(&module.source, &module.id)
      })
      .collect::<Vec<_>>();

    if !diagnostics.is_empty() {
      tracing::debug!("lint reported {} findings", diagnostics.len());
    }
    diagnostics
  }
}
