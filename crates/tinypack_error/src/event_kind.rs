use std::fmt::Display;

/// Stable machine-readable code for every diagnostic the bundler can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
  DuplicateModule,
  UnresolvedModule,
  UnresolvedDependency,
  CircularDependency,
  TransformError,
  // --- warnings
  MissingExport,
  UnknownReference,
}

impl EventKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::DuplicateModule => "DUPLICATE_MODULE",
      Self::UnresolvedModule => "UNRESOLVED_MODULE",
      Self::UnresolvedDependency => "UNRESOLVED_DEPENDENCY",
      Self::CircularDependency => "CIRCULAR_DEPENDENCY",
      Self::TransformError => "TRANSFORM_ERROR",
      Self::MissingExport => "MISSING_EXPORT",
      Self::UnknownReference => "UNKNOWN_REFERENCE",
    }
  }
}

impl Display for EventKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
