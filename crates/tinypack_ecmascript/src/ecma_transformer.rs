use tinypack_common::ModuleId;
use tinypack_plugin::Transformer;

use crate::EcmaCompiler;

/// The default code transformer: validates each module body with oxc and prints it back,
/// optionally minified.
#[derive(Debug, Default, Clone, Copy)]
pub struct EcmaTransformer {
  pub minify: bool,
}

impl EcmaTransformer {
  pub fn new(minify: bool) -> Self {
    Self { minify }
  }
}

impl Transformer for EcmaTransformer {
  fn name(&self) -> &'static str {
    "tinypack:ecmascript"
  }

  fn transform(&self, source: &str, module_id: &ModuleId) -> anyhow::Result<String> {
    tracing::trace!("transforming {module_id} (minify: {})", self.minify);
    EcmaCompiler::print(source, self.minify)
  }
}
