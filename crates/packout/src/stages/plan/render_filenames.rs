use std::{collections::hash_map::Entry, ffi::OsStr, path::Path};

use arcstr::ArcStr;
use packout_common::{BuildProduct, FileNameRenderOptions, ProductKind};
use packout_error::BuildResult;
use packout_utils::{
  concat_string,
  indexmap::FxIndexSet,
  rayon::{IntoParallelRefIterator, ParallelIterator},
  xxhash::xxhash_base64_url,
};
use rustc_hash::FxHashMap;
use sugar_path::SugarPath;

use crate::types::emit_plan::PlannedFile;

use super::PlanStage;

impl PlanStage<'_> {
  /// Notices:
  /// - Should generate filenames that are stable cross builds and os.
  pub(crate) fn render_filenames(
    &self,
    products: &[BuildProduct],
    names: Vec<ArcStr>,
  ) -> BuildResult<Vec<PlannedFile>> {
    // Digests are only paid for when the template asks for one.
    let hashes: Vec<Option<String>> = products
      .par_iter()
      .map(|product| {
        self
          .filename_template(product.kind)
          .has_hash_pattern()
          .then(|| xxhash_base64_url(product.source.as_bytes()))
      })
      .collect();

    // Scripts and assets deduplicate in separate pools since they render
    // through separate templates.
    let mut make_unique_script_name = create_make_unique_name(FxHashMap::default());
    let mut make_unique_asset_name = create_make_unique_name(FxHashMap::default());

    let out_dir = self.options.out_dir();
    let mut files = Vec::with_capacity(products.len());

    for ((product, pre_name), hash) in products.iter().zip(names).zip(&hashes) {
      let make_unique_name = if product.kind.is_script() {
        &mut make_unique_script_name
      } else {
        &mut make_unique_asset_name
      };

      // With a hash in the template the digest keeps equal names apart, so
      // the plain name survives. The counter pool records it either way.
      let name = if hash.is_some() {
        make_unique_name(&pre_name);
        pre_name
      } else {
        make_unique_name(&pre_name)
      };

      let extension = match product.kind {
        ProductKind::Asset => Some(
          product
            .name
            .as_deref()
            .map(Path::new)
            .or(product.origin.as_deref())
            .and_then(Path::extension)
            .and_then(OsStr::to_str)
            .unwrap_or(""),
        ),
        ProductKind::Entry | ProductKind::Chunk => None,
      };

      let filename = self.filename_template(product.kind).render(&FileNameRenderOptions {
        name: Some(&name),
        hash: hash.as_deref(),
        ext: extension,
      });

      let absolute_path = Path::new(&filename).absolutize_with(out_dir.clone());
      files.push(PlannedFile {
        name,
        filename: ArcStr::from(filename),
        absolute_path,
        kind: product.kind,
      });
    }

    // Collisions are keyed on the normalized path, rendered names that
    // differ only by `.` segments land on the same file.
    let mut seen_paths = FxIndexSet::default();
    let mut errors: Vec<anyhow::Error> = vec![];
    for file in &files {
      if !seen_paths.insert(file.absolute_path.clone()) {
        errors.push(anyhow::anyhow!(
          "The emitted file \"{}\" overwrites a previously emitted file at the same path.",
          file.absolute_path.display()
        ));
      }
    }
    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(files)
  }
}

fn create_make_unique_name(
  mut used_name_counts: FxHashMap<ArcStr, u32>,
) -> impl FnMut(&ArcStr) -> ArcStr {
  move |name: &ArcStr| {
    let mut candidate = name.clone();
    loop {
      match used_name_counts.entry(candidate.clone()) {
        Entry::Occupied(mut occupied) => {
          // This name is already used
          let next_count = *occupied.get();
          occupied.insert(next_count + 1);
          candidate =
            ArcStr::from(concat_string!(name, itoa::Buffer::new().format(next_count)).as_str());
        }
        Entry::Vacant(vacant) => {
          // This is the first time we see this name
          let name = vacant.key().clone();
          vacant.insert(2);
          break name;
        }
      }
    }
  }
}

#[test]
fn test_make_unique_name_counts_up() {
  let mut make_unique_name = create_make_unique_name(FxHashMap::default());
  assert_eq!(make_unique_name(&arcstr::literal!("main")), "main");
  assert_eq!(make_unique_name(&arcstr::literal!("main")), "main2");
  assert_eq!(make_unique_name(&arcstr::literal!("main")), "main3");
  // An explicit `main2` was taken above, the counter keeps probing.
  assert_eq!(make_unique_name(&arcstr::literal!("main2")), "main22");
}
