use std::cell::RefCell;

use rustc_hash::FxHashMap;
use tinypack_common::{BundleArtifact, ModuleId};
use tinypack_utils::indexmap::FxIndexMap;

use crate::{Exports, RuntimeError};

/// A module body. It receives the context of the instance being evaluated.
pub type ModuleFactory = Box<dyn Fn(&ModuleContext<'_>) -> anyhow::Result<()>>;

fn pruned_module(_: &ModuleContext<'_>) -> anyhow::Result<()> {
  Ok(())
}

/// What a module body can see: its own exports record and `require`.
pub struct ModuleContext<'r> {
  runtime: &'r ModuleRuntime,
  id: &'r ModuleId,
  exports: Exports,
}

impl ModuleContext<'_> {
  pub fn id(&self) -> &ModuleId {
    self.id
  }

  pub fn exports(&self) -> &Exports {
    &self.exports
  }

  pub fn require(&self, id: &str) -> Result<Exports, RuntimeError> {
    self.runtime.require(id)
  }
}

/// One instance of a bundle: a factory per module and a cache of evaluated exports.
///
/// Loading follows the bundle's loader exactly. A module is evaluated at most once per instance;
/// its empty exports record is cached before the body runs, so a cyclic `require` observes the
/// partially filled record instead of evaluating the module again. A body that fails leaves its
/// record cached as is.
pub struct ModuleRuntime {
  entry: ModuleId,
  factories: FxHashMap<ModuleId, ModuleFactory>,
  cache: RefCell<FxIndexMap<ModuleId, Exports>>,
}

impl ModuleRuntime {
  pub fn new(entry: impl Into<ModuleId>) -> Self {
    Self { entry: entry.into(), factories: FxHashMap::default(), cache: RefCell::default() }
  }

  /// Mirrors the module table of `artifact`: every retained module needs a factory, pruned
  /// dependencies get an empty one, and factories for any other id are dropped.
  pub fn for_artifact(
    artifact: &BundleArtifact,
    mut factories: FxHashMap<ModuleId, ModuleFactory>,
  ) -> Result<Self, RuntimeError> {
    let mut runtime = Self::new(artifact.entry_id.clone());
    for id in &artifact.retained_order {
      let factory =
        factories.remove(id).ok_or_else(|| RuntimeError::MissingFactory { id: id.clone() })?;
      runtime.factories.insert(id.clone(), factory);
    }
    for id in &artifact.pruned_dependencies {
      runtime.factories.insert(id.clone(), Box::new(pruned_module));
    }
    Ok(runtime)
  }

  #[must_use]
  pub fn with_module(
    mut self,
    id: impl Into<ModuleId>,
    factory: impl Fn(&ModuleContext<'_>) -> anyhow::Result<()> + 'static,
  ) -> Self {
    self.factories.insert(id.into(), Box::new(factory));
    self
  }

  pub fn entry(&self) -> &ModuleId {
    &self.entry
  }

  /// Requires the entry module.
  pub fn run(&self) -> Result<Exports, RuntimeError> {
    self.require(&self.entry)
  }

  pub fn require(&self, id: &str) -> Result<Exports, RuntimeError> {
    let (id, factory) = self
      .factories
      .get_key_value(id)
      .ok_or_else(|| RuntimeError::UnknownModule { id: ModuleId::new(id) })?;

    let exports = {
      let mut cache = self.cache.borrow_mut();
      if let Some(exports) = cache.get(id) {
        return Ok(exports.clone());
      }
      let exports = Exports::default();
      cache.insert(id.clone(), exports.clone());
      exports
    };

    tracing::trace!("evaluating {id}");
    let ctx = ModuleContext { runtime: self, id, exports };
    factory(&ctx).map_err(|err| RuntimeError::Evaluation { id: id.clone(), reason: format!("{err:#}") })?;
    Ok(ctx.exports)
  }

  pub fn is_loaded(&self, id: &str) -> bool {
    self.cache.borrow().contains_key(id)
  }

  /// Ids of evaluated modules, in the order their evaluation started.
  pub fn loaded_modules(&self) -> Vec<ModuleId> {
    self.cache.borrow().keys().cloned().collect()
  }

  /// Drops the cached exports of `id`; the next `require` evaluates the module again.
  /// Records already handed out are not affected.
  pub fn unload(&self, id: &str) -> Option<Exports> {
    self.cache.borrow_mut().shift_remove(id)
  }
}
