mod ecma_compiler;
mod ecma_transformer;

pub use crate::{ecma_compiler::EcmaCompiler, ecma_transformer::EcmaTransformer};
