use tinypack_error::BuildStage;

/// Where a `Bundler` is in its build lifecycle.
///
/// `Idle -> Running(Registering) -> Running(Resolving) -> Running(TreeShaking) ->
/// Running(Emitting) -> Done`, leaving for `Failed` from whichever stage aborted. Both terminal
/// states accept a new build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildState {
  #[default]
  Idle,
  Running(BuildStage),
  Done,
  Failed(BuildStage),
}

impl BuildState {
  pub fn is_running(self) -> bool {
    matches!(self, Self::Running(_))
  }
}
