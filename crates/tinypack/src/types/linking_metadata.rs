use oxc_index::IndexVec;
use tinypack_common::{side_effects::DeterminedSideEffects, ModuleIdx};

/// Metadata generated for a module during the linking phase.
#[derive(Debug)]
pub struct LinkingMetadata {
  /// Resolved dependencies in declaration order. Only filled for modules reachable from the entry.
  pub dependencies: Vec<ModuleIdx>,
  /// Declared side effects, widened to `Inherited` when any dependency has side effects.
  pub side_effects: DeterminedSideEffects,
}

impl Default for LinkingMetadata {
  fn default() -> Self {
    Self { dependencies: Vec::new(), side_effects: DeterminedSideEffects::UserDefined(false) }
  }
}

pub type LinkingMetadataVec = IndexVec<ModuleIdx, LinkingMetadata>;
