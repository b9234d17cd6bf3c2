use std::path::Path;

use arcstr::ArcStr;
use packout_common::{BuildProduct, ProductKind};
use packout_utils::{
  path_ext::PathExt,
  rayon::{IntoParallelRefIterator, ParallelIterator},
  sanitize_file_name::sanitize_file_name,
};

use super::PlanStage;

impl PlanStage<'_> {
  /// Notices:
  /// - Should generate names that are stable cross builds and os.
  /// - Names are not unique yet, deduplication happens while rendering.
  pub(crate) fn assign_names(&self, products: &[BuildProduct]) -> Vec<ArcStr> {
    products
      .par_iter()
      .map(|product| match product.kind {
        ProductKind::Entry | ProductKind::Chunk => {
          if let Some(name) = &product.name {
            return ArcStr::from(sanitize_file_name(name));
          }
          match &product.origin {
            Some(origin) if product.kind == ProductKind::Entry => origin
              .file_stem()
              .and_then(|stem| stem.to_str())
              .map_or(arcstr::literal!("input"), |stem| ArcStr::from(sanitize_file_name(stem))),
            // Chunks step past `index` / `mod` files for a telling name.
            Some(origin) => ArcStr::from(sanitize_file_name(&origin.representative_file_name())),
            None if product.kind == ProductKind::Entry => arcstr::literal!("input"),
            None => arcstr::literal!("chunk"),
          }
        }
        ProductKind::Asset => {
          // An explicit asset name such as `logo.svg` splits into a base name
          // and an extension, the extension re-enters through `[ext]`.
          let basis = product.name.as_deref().map(Path::new).or(product.origin.as_deref());
          basis
            .and_then(Path::file_stem)
            .and_then(|stem| stem.to_str())
            .map_or(arcstr::literal!("asset"), |stem| ArcStr::from(sanitize_file_name(stem)))
        }
      })
      .collect()
  }
}
