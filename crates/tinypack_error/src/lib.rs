mod build_diagnostic;
mod event_kind;

use std::fmt::Display;

pub use crate::{build_diagnostic::BuildDiagnostic, event_kind::EventKind};

/// The pipeline stage a build was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStage {
  Registering,
  Resolving,
  TreeShaking,
  Emitting,
}

impl Display for BuildStage {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Registering => "registering",
      Self::Resolving => "resolving",
      Self::TreeShaking => "tree-shaking",
      Self::Emitting => "emitting",
    })
  }
}

/// A failed build: the stage that aborted it and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{}] {diagnostic} (while {stage})", .diagnostic.kind())]
pub struct BuildError {
  pub stage: BuildStage,
  pub diagnostic: BuildDiagnostic,
}

impl BuildError {
  pub fn new(stage: BuildStage, diagnostic: BuildDiagnostic) -> Self {
    Self { stage, diagnostic }
  }

  pub fn kind(&self) -> EventKind {
    self.diagnostic.kind()
  }
}

pub type BuildResult<T> = Result<T, BuildError>;

/// Tags a stage-local diagnostic with the stage it escaped from.
pub trait ResultExt<T> {
  fn in_stage(self, stage: BuildStage) -> BuildResult<T>;
}

impl<T> ResultExt<T> for Result<T, BuildDiagnostic> {
  fn in_stage(self, stage: BuildStage) -> BuildResult<T> {
    self.map_err(|diagnostic| BuildError::new(stage, diagnostic))
  }
}

#[test]
fn build_error_display() {
  let err = BuildError::new(
    BuildStage::Resolving,
    BuildDiagnostic::UnresolvedModule { id: arcstr::literal!("main") },
  );
  assert_eq!(err.to_string(), "[UNRESOLVED_MODULE] Module \"main\" is not registered (while resolving)");
}
