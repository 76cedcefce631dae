use std::fmt::Display;

use crate::ModuleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintRule {
  NoUnusedVars,
  NoConsole,
  PreferConst,
}

impl LintRule {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::NoUnusedVars => "no-unused-vars",
      Self::NoConsole => "no-console",
      Self::PreferConst => "prefer-const",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
  Error,
  Warning,
}

impl Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Error => "ERROR",
      Self::Warning => "WARNING",
    })
  }
}

/// A lint finding. Reported alongside the bundle, never fails a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub module_id: ModuleId,
  pub rule: LintRule,
  pub message: String,
  pub severity: Severity,
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {} ({})", self.severity, self.message, self.rule.as_str())
  }
}

#[test]
fn render_diagnostic() {
  let diagnostic = Diagnostic {
    module_id: ModuleId::new("main"),
    rule: LintRule::PreferConst,
    message: "'name' is never reassigned. Use 'const' instead".to_string(),
    severity: Severity::Warning,
  };
  assert_eq!(
    diagnostic.to_string(),
    "WARNING: 'name' is never reassigned. Use 'const' instead (prefer-const)"
  );
}
