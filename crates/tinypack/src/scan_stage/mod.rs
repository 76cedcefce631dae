use tinypack_common::{ModuleDescriptor, ModuleTable};
use tinypack_error::{BuildResult, BuildStage, ResultExt};

#[derive(Debug)]
pub struct ScanStageOutput {
  pub module_table: ModuleTable,
}

/// Registers every supplied module. The first duplicate id aborts the build.
#[derive(Debug, Default)]
pub struct ScanStage;

impl ScanStage {
  pub fn new() -> Self {
    Self
  }

  pub fn scan(&self, modules: Vec<ModuleDescriptor>) -> BuildResult<ScanStageOutput> {
    let mut module_table = ModuleTable::default();
    for descriptor in modules {
      let id = descriptor.id.clone();
      let idx = module_table.register(descriptor).in_stage(BuildStage::Registering)?;
      tracing::trace!("registered {id} as {idx:?}");
    }
    tracing::debug!("registered {} modules", module_table.len());
    Ok(ScanStageOutput { module_table })
  }
}
