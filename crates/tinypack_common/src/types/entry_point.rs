use arcstr::ArcStr;

use crate::ModuleIdx;

#[derive(Debug)]
pub struct EntryPoint {
  pub idx: ModuleIdx,
  /// Exports of the entry that the bundle's consumer reads.
  pub used_exports: Vec<ArcStr>,
}
