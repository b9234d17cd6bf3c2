mod prepare_out_dir;

use packout_common::{BuildProduct, Output, OutputAsset, OutputChunk, ProductKind};
use packout_error::BuildResult;
use packout_fs::FileSystem;

use crate::types::{
  SharedConfig,
  emit_plan::{EmitPlan, PlannedFile},
};

/// Puts a finished plan on disk and assembles the final output listing.
pub struct WriteStage<'a, Fs: FileSystem> {
  fs: &'a Fs,
  options: &'a SharedConfig,
}

impl<'a, Fs: FileSystem> WriteStage<'a, Fs> {
  pub fn new(fs: &'a Fs, options: &'a SharedConfig) -> Self {
    Self { fs, options }
  }

  /// `plan` must have been produced from `products`, the two run index
  /// aligned.
  pub async fn write(
    &self,
    plan: &EmitPlan,
    products: Vec<BuildProduct>,
    warnings: &mut Vec<anyhow::Error>,
  ) -> BuildResult<Vec<Output>> {
    self.prepare_out_dir(warnings)?;

    let mut assets = Vec::with_capacity(products.len());
    for (file, product) in plan.files.iter().zip(products) {
      if let Some(parent) = file.absolute_path.parent() {
        if !self.fs.exists(parent) {
          self.fs.create_dir_all(parent).map_err(|error| {
            anyhow::anyhow!("Failed to create directory {}: {error}", parent.display())
          })?;
        }
      }

      let output = into_output(file, product)?;
      self.fs.write(&file.absolute_path, output.content_as_bytes()).map_err(|error| {
        anyhow::anyhow!("Failed to write file {}: {error}", file.absolute_path.display())
      })?;
      assets.push(output);
    }

    // Entries first, then secondary chunks, then assets, matching rollup's
    // output ordering.
    assets.sort_unstable_by(|a, b| {
      let a_type = get_sorting_file_type(a) as u8;
      let b_type = get_sorting_file_type(b) as u8;
      if a_type == b_type {
        return a.filename().cmp(b.filename());
      }
      a_type.cmp(&b_type)
    });

    Ok(assets)
  }
}

fn into_output(file: &PlannedFile, product: BuildProduct) -> anyhow::Result<Output> {
  match product.kind {
    ProductKind::Entry | ProductKind::Chunk => {
      let code = product.source.try_into_string().map_err(|error| {
        anyhow::anyhow!("Invalid content for \"{}\" - scripts must be utf8: {error}", file.filename)
      })?;
      Ok(Output::Chunk(Box::new(OutputChunk {
        name: file.name.clone(),
        filename: file.filename.clone(),
        code,
        is_entry: product.kind == ProductKind::Entry,
      })))
    }
    ProductKind::Asset => Ok(Output::Asset(Box::new(OutputAsset {
      name: file.name.clone(),
      filename: file.filename.clone(),
      source: product.source,
    }))),
  }
}

enum SortingFileType {
  EntryChunk = 0,
  SecondaryChunk = 1,
  Asset = 2,
}

#[inline]
fn get_sorting_file_type(output: &Output) -> SortingFileType {
  match output {
    Output::Asset(_) => SortingFileType::Asset,
    Output::Chunk(chunk) => {
      if chunk.is_entry {
        SortingFileType::EntryChunk
      } else {
        SortingFileType::SecondaryChunk
      }
    }
  }
}
