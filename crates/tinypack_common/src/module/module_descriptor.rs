use serde::{Deserialize, Serialize};
use tinypack_utils::indexmap::FxIndexMap;

/// Input record for one module, as supplied by whoever feeds the bundler.
///
/// Nothing here is inferred from `source`: dependencies, exports and the export names each
/// dependency is referenced by are all declared metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
  pub id: String,
  /// Opaque payload handed to the code transformer.
  #[serde(default, alias = "sourceText")]
  pub source: String,
  /// Ids this module `require`s, in source order.
  #[serde(default)]
  pub dependency_ids: Vec<String>,
  #[serde(default)]
  pub exported_names: Vec<String>,
  /// For each dependency id, the export names this module's source refers to.
  #[serde(default)]
  pub references: FxIndexMap<String, Vec<String>>,
  #[serde(default)]
  pub has_side_effects: bool,
}

impl ModuleDescriptor {
  pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
    Self { id: id.into(), source: source.into(), ..Self::default() }
  }

  #[must_use]
  pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.dependency_ids.extend(dependencies.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn with_exports<I, S>(mut self, exports: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.exported_names.extend(exports.into_iter().map(Into::into));
    self
  }

  /// Records that this module's source reads `names` off the exports of `dependency`.
  #[must_use]
  pub fn with_references<I, S>(mut self, dependency: impl Into<String>, names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self
      .references
      .entry(dependency.into())
      .or_default()
      .extend(names.into_iter().map(Into::into));
    self
  }

  #[must_use]
  pub fn with_side_effects(mut self, has_side_effects: bool) -> Self {
    self.has_side_effects = has_side_effects;
    self
  }
}
