#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeterminedSideEffects {
  /// Declared on the module descriptor.
  UserDefined(bool),
  /// The module has no declared side effects of its own, but requires a module that does.
  Inherited,
  /// Tree shaking is disabled, every reachable module is kept.
  NoTreeshake,
}

impl DeterminedSideEffects {
  pub fn has_side_effects(&self) -> bool {
    match self {
      Self::UserDefined(v) => *v,
      Self::Inherited | Self::NoTreeshake => true,
    }
  }
}
