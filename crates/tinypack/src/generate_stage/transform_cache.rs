use arcstr::ArcStr;
use rustc_hash::FxHashMap;
use tinypack_common::{Module, ModuleIdx};
use tinypack_error::BuildDiagnostic;
use tinypack_plugin::Transformer;

/// Transformed module bodies of one build, keyed by module.
///
/// The transformer runs at most once per module: later lookups are served from the cache. A
/// failed transform is not cached; the build is aborted anyway.
#[derive(Debug, Default)]
pub struct TransformCache {
  transformed: FxHashMap<ModuleIdx, ArcStr>,
}

impl TransformCache {
  pub fn get_or_transform(
    &mut self,
    module: &Module,
    transformer: &dyn Transformer,
  ) -> Result<ArcStr, BuildDiagnostic> {
    if let Some(code) = self.transformed.get(&module.idx) {
      return Ok(code.clone());
    }

    let code: ArcStr = transformer
      .transform(&module.source, &module.id)
      .map_err(|err| BuildDiagnostic::Transform {
        id: module.id.as_arc_str().clone(),
        reason: format!("{err:#}"),
      })?
      .into();
    tracing::trace!("{} transformed {}", transformer.name(), module.id);

    self.transformed.insert(module.idx, code.clone());
    Ok(code)
  }

  pub fn get(&self, idx: ModuleIdx) -> Option<&ArcStr> {
    self.transformed.get(&idx)
  }

  pub fn len(&self) -> usize {
    self.transformed.len()
  }

  pub fn is_empty(&self) -> bool {
    self.transformed.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering};

  use pretty_assertions::assert_eq;
  use tinypack_common::{Module, ModuleDescriptor, ModuleId, ModuleIdx};
  use tinypack_error::BuildDiagnostic;
  use tinypack_plugin::Transformer;

  use super::TransformCache;

  #[derive(Debug, Default)]
  struct Upper {
    calls: AtomicUsize,
  }

  impl Transformer for Upper {
    fn name(&self) -> &'static str {
      "upper"
    }

    fn transform(&self, source: &str, _module_id: &ModuleId) -> anyhow::Result<String> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if source.is_empty() {
        anyhow::bail!("empty module");
      }
      Ok(source.to_uppercase())
    }
  }

  fn module(id: &str, source: &str) -> Module {
    Module::from_descriptor(ModuleIdx::from_usize(0), ModuleDescriptor::new(id, source))
  }

  #[test]
  fn transforms_once() {
    let transformer = Upper::default();
    let mut cache = TransformCache::default();
    let module = module("a", "x");

    assert_eq!(cache.get_or_transform(&module, &transformer).unwrap().as_str(), "X");
    assert_eq!(cache.get_or_transform(&module, &transformer).unwrap().as_str(), "X");
    assert_eq!(transformer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
  }

  #[test]
  fn failure_is_attributed_to_the_module() {
    let transformer = Upper::default();
    let mut cache = TransformCache::default();
    let err = cache.get_or_transform(&module("broken", ""), &transformer).unwrap_err();
    assert_eq!(
      err,
      BuildDiagnostic::Transform { id: "broken".into(), reason: "empty module".to_string() }
    );
    assert!(cache.is_empty());
  }
}
