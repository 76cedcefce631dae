use crate::LintRule;

#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintRules {
  pub no_unused_vars: bool,
  pub no_console: bool,
  pub prefer_const: bool,
}

impl LintRules {
  pub fn is_enabled(&self, rule: LintRule) -> bool {
    match rule {
      LintRule::NoUnusedVars => self.no_unused_vars,
      LintRule::NoConsole => self.no_console,
      LintRule::PreferConst => self.prefer_const,
    }
  }
}

impl Default for LintRules {
  fn default() -> Self {
    Self { no_unused_vars: true, no_console: false, prefer_const: true }
  }
}
