mod assign_names;
mod render_filenames;

use packout_common::{BuildProduct, FilenameTemplate, ProductKind};
use packout_error::BuildResult;

use crate::{
  types::{SharedConfig, emit_plan::EmitPlan},
  utils::validate_config::validate_config,
};

/// Decides the final filename of every product without touching the disk.
pub struct PlanStage<'a> {
  options: &'a SharedConfig,
}

impl<'a> PlanStage<'a> {
  pub fn new(options: &'a SharedConfig) -> Self {
    Self { options }
  }

  pub async fn plan(&self, products: &[BuildProduct]) -> BuildResult<EmitPlan> {
    validate_config(self.options)?;

    let names = self.assign_names(products);
    let files = self.render_filenames(products, names)?;

    Ok(EmitPlan { files })
  }

  pub(crate) fn filename_template(&self, kind: ProductKind) -> &FilenameTemplate {
    match kind {
      ProductKind::Entry => &self.options.entry_file_names,
      ProductKind::Chunk => &self.options.chunk_file_names,
      ProductKind::Asset => &self.options.asset_file_names,
    }
  }
}
