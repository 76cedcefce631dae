use tinypack_common::ModuleId;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
  #[error("Cannot find module \"{id}\"")]
  UnknownModule { id: ModuleId },

  #[error("No factory was supplied for retained module \"{id}\"")]
  MissingFactory { id: ModuleId },

  #[error("Module \"{id}\" threw while evaluating: {reason}")]
  Evaluation { id: ModuleId, reason: String },
}
