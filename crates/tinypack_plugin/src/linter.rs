use std::fmt::Debug;

use tinypack_common::{Diagnostic, ModuleId};

/// Inspects module sources for reporting purposes only.
pub trait Linter: Debug + Send + Sync {
  fn lint(&self, source: &str, module_id: &ModuleId) -> Vec<Diagnostic>;
}
