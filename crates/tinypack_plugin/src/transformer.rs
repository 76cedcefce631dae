use std::fmt::Debug;

use tinypack_common::ModuleId;

/// Rewrites the source of one module.
///
/// Implementations must be pure: the same `(source, module_id)` always yields the same output and
/// no state is shared between calls. The bundler calls `transform` at most once per module per
/// build.
pub trait Transformer: Debug + Send + Sync {
  fn name(&self) -> &'static str;

  fn transform(&self, source: &str, module_id: &ModuleId) -> anyhow::Result<String>;
}
