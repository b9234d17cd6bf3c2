use std::path::PathBuf;

use arcstr::ArcStr;
use packout_common::ProductKind;

/// Where one product will land, before anything touches the disk.
#[derive(Debug, Clone)]
pub struct PlannedFile {
  pub name: ArcStr,
  /// Path relative to the output directory, forward-slashed.
  pub filename: ArcStr,
  /// Absolute destination, stable across builds and os.
  pub absolute_path: PathBuf,
  pub kind: ProductKind,
}

/// The full naming plan for one emit, index-aligned with the products it was
/// planned from.
#[derive(Debug, Default, Clone)]
pub struct EmitPlan {
  pub files: Vec<PlannedFile>,
}
