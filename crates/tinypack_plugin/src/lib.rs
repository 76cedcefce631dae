mod linter;
mod transformer;

use std::sync::Arc;

pub use crate::{linter::Linter, transformer::Transformer};

pub type SharedTransformer = Arc<dyn Transformer>;
pub type SharedLinter = Arc<dyn Linter>;
