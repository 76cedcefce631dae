use arcstr::ArcStr;
use tinypack_utils::indexmap::FxIndexMap;

use crate::ModuleId;

/// The emitted bundle. Only ever produced whole; a failed build has no artifact.
#[derive(Debug, Clone)]
pub struct BundleArtifact {
  pub entry_id: ModuleId,
  /// Build order restricted to the modules that survived tree shaking.
  pub retained_order: Vec<ModuleId>,
  /// Transformed source of every retained module.
  pub module_bodies: FxIndexMap<ModuleId, ArcStr>,
  /// Pruned modules that a retained module still requires; emitted as empty units.
  pub pruned_dependencies: Vec<ModuleId>,
  /// The self-contained script: module units, runtime loader and the entry call.
  pub code: String,
}

impl BundleArtifact {
  pub fn is_retained(&self, id: &str) -> bool {
    self.module_bodies.contains_key(id)
  }
}
