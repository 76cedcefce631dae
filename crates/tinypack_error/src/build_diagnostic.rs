use arcstr::ArcStr;
use itertools::Itertools;

use crate::event_kind::EventKind;

/// Everything that can go wrong (or look suspicious) while bundling.
///
/// Values are structured so callers can match on the offending ids instead of parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildDiagnostic {
  #[error("Module \"{id}\" is registered more than once")]
  DuplicateModule { id: ArcStr },

  #[error("Module \"{id}\" is not registered")]
  UnresolvedModule { id: ArcStr },

  #[error("Could not resolve \"{specifier}\" required by \"{importer}\"")]
  UnresolvedDependency { specifier: ArcStr, importer: ArcStr },

  /// `path` starts and ends with the module that closes the cycle, e.g. `[a, b, a]`.
  #[error("Circular dependency: {}", .path.iter().join(" -> "))]
  CircularDependency { path: Vec<ArcStr> },

  #[error("Failed to transform \"{id}\": {reason}")]
  Transform { id: ArcStr, reason: String },

  #[error("\"{name}\" is not exported by \"{importee}\", referenced by \"{importer}\"")]
  MissingExport { importer: ArcStr, importee: ArcStr, name: ArcStr },

  #[error("\"{name}\" is requested from entry \"{entry}\" but the entry does not export it")]
  MissingEntryExport { entry: ArcStr, name: ArcStr },

  #[error("\"{importer}\" references exports of \"{target}\" without depending on it")]
  UnknownReference { importer: ArcStr, target: ArcStr },
}

impl BuildDiagnostic {
  pub fn kind(&self) -> EventKind {
    match self {
      Self::DuplicateModule { .. } => EventKind::DuplicateModule,
      Self::UnresolvedModule { .. } => EventKind::UnresolvedModule,
      Self::UnresolvedDependency { .. } => EventKind::UnresolvedDependency,
      Self::CircularDependency { .. } => EventKind::CircularDependency,
      Self::Transform { .. } => EventKind::TransformError,
      Self::MissingExport { .. } | Self::MissingEntryExport { .. } => EventKind::MissingExport,
      Self::UnknownReference { .. } => EventKind::UnknownReference,
    }
  }

  pub fn is_warning(&self) -> bool {
    matches!(self.kind(), EventKind::MissingExport | EventKind::UnknownReference)
  }
}

#[test]
fn circular_dependency_message() {
  let diagnostic = BuildDiagnostic::CircularDependency {
    path: vec![arcstr::literal!("a"), arcstr::literal!("b"), arcstr::literal!("a")],
  };
  assert_eq!(diagnostic.to_string(), "Circular dependency: a -> b -> a");
  assert_eq!(diagnostic.kind(), EventKind::CircularDependency);
  assert!(!diagnostic.is_warning());
}
