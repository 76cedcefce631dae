use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use tinypack_common::{Diagnostic, LintRule, LintRules, ModuleId, Severity};
use tinypack_plugin::Linter;

static DECLARATION_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b(?:var|let|const)\s+(\w+)").unwrap());
static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static CONSOLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bconsole\.\w+").unwrap());
static LET_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\blet\s+(\w+)\s*=\s*[^;]+;").unwrap());
static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\b(\w+)\s*(?:[-+*/%&|^]|\*\*|<<|>>>?|&&|\|\||\?\?)?=(?:[^=>]|$)").unwrap()
});
static UPDATE_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\b(\w+)\s*(?:\+\+|--)|(?:\+\+|--)\s*(\w+)\b").unwrap());

/// A pattern based linter. It does not parse, so it reports on text that merely looks like a
/// declaration or an assignment.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinLinter {
  rules: LintRules,
}

impl BuiltinLinter {
  pub fn new(rules: LintRules) -> Self {
    Self { rules }
  }

  fn no_unused_vars(source: &str, module_id: &ModuleId, diagnostics: &mut Vec<Diagnostic>) {
    let mut occurrences = FxHashMap::<&str, usize>::default();
    for identifier in IDENTIFIER_RE.find_iter(source) {
      *occurrences.entry(identifier.as_str()).or_default() += 1;
    }

    let declared = DECLARATION_RE.captures_iter(source).map(|caps| caps.get(1).map_or("", |m| m.as_str()));
    for name in declared.unique() {
      if occurrences.get(name).copied().unwrap_or_default() <= 1 {
        diagnostics.push(Diagnostic {
          module_id: module_id.clone(),
          rule: LintRule::NoUnusedVars,
          message: format!("'{name}' is defined but never used"),
          severity: Severity::Error,
        });
      }
    }
  }

  fn no_console(source: &str, module_id: &ModuleId, diagnostics: &mut Vec<Diagnostic>) {
    diagnostics.extend(CONSOLE_RE.find_iter(source).map(|_| Diagnostic {
      module_id: module_id.clone(),
      rule: LintRule::NoConsole,
      message: "Unexpected console statement".to_string(),
      severity: Severity::Warning,
    }));
  }

  fn prefer_const(source: &str, module_id: &ModuleId, diagnostics: &mut Vec<Diagnostic>) {
    let mut writes = FxHashMap::<&str, usize>::default();
    for caps in ASSIGNMENT_RE.captures_iter(source) {
      if let Some(name) = caps.get(1) {
        *writes.entry(name.as_str()).or_default() += 1;
      }
    }
    for caps in UPDATE_RE.captures_iter(source) {
      if let Some(name) = caps.get(1).or_else(|| caps.get(2)) {
        *writes.entry(name.as_str()).or_default() += 1;
      }
    }

    let mut reported = FxHashSet::default();
    for caps in LET_RE.captures_iter(source) {
      let Some(name) = caps.get(1).map(|m| m.as_str()) else {
        continue;
      };
      if writes.get(name).copied() == Some(1) && reported.insert(name) {
        diagnostics.push(Diagnostic {
          module_id: module_id.clone(),
          rule: LintRule::PreferConst,
          message: format!("'{name}' is never reassigned. Use 'const' instead"),
          severity: Severity::Warning,
        });
      }
    }
  }
}

impl Linter for BuiltinLinter {
  fn lint(&self, source: &str, module_id: &ModuleId) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    if self.rules.is_enabled(LintRule::NoUnusedVars) {
      Self::no_unused_vars(source, module_id, &mut diagnostics);
    }
    if self.rules.is_enabled(LintRule::NoConsole) {
      Self::no_console(source, module_id, &mut diagnostics);
    }
    if self.rules.is_enabled(LintRule::PreferConst) {
      Self::prefer_const(source, module_id, &mut diagnostics);
    }
    diagnostics
  }
}

/// Human readable summary of lint findings, one per line.
pub fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
  if diagnostics.is_empty() {
    return "✓ No linting errors found".to_string();
  }
  format!("Found {} issue(s):\n{}", diagnostics.len(), diagnostics.iter().join("\n"))
}
