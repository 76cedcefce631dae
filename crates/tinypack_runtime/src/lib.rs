mod exports;
mod module_runtime;
mod runtime_error;

pub use crate::{
  exports::Exports,
  module_runtime::{ModuleContext, ModuleFactory, ModuleRuntime},
  runtime_error::RuntimeError,
};
