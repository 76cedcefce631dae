use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use tinypack::ModuleDescriptor;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
  pub entry: Option<String>,
  pub used_exports: Option<Vec<String>>,
  pub name: Option<String>,
  pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestModule {
  /// Source file, relative to the manifest. Takes the place of an inline `source`.
  pub file: Option<String>,
  #[serde(flatten)]
  pub descriptor: ModuleDescriptor,
}

impl Manifest {
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    let text =
      fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid manifest {}", path.display()))
  }

  /// Module descriptors with every `file` read into `source`.
  pub fn into_descriptors(self, base: &Path) -> anyhow::Result<Vec<ModuleDescriptor>> {
    self
      .modules
      .into_iter()
      .map(|ManifestModule { file, mut descriptor }| {
        if let Some(file) = file {
          let path = base.join(file);
          descriptor.source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read module {} from {}", descriptor.id, path.display()))?;
        }
        Ok(descriptor)
      })
      .collect()
  }
}
