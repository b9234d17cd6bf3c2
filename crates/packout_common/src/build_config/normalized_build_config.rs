use std::path::PathBuf;

use sugar_path::SugarPath;

use crate::{FilenameTemplate, FrameworkPlugin};

/// Build configuration after defaults are applied. Shared immutably across
/// the whole emit.
#[derive(Debug)]
pub struct NormalizedBuildConfig {
  // --- Project
  pub root: PathBuf,
  pub plugins: Vec<FrameworkPlugin>,

  // --- Output
  pub dir: String,
  pub entry_file_names: FilenameTemplate,
  pub chunk_file_names: FilenameTemplate,
  pub asset_file_names: FilenameTemplate,
  /// `None` keeps the automatic behavior: empty the output directory only
  /// when it sits inside the project root.
  pub empty_out_dir: Option<bool>,
}

impl NormalizedBuildConfig {
  /// The absolute, normalized output directory.
  pub fn out_dir(&self) -> PathBuf {
    self.root.join(&self.dir).normalize()
  }
}

#[test]
fn test_out_dir_collapses_parent_segments() {
  use std::path::Path;

  let config = NormalizedBuildConfig {
    root: PathBuf::from("/app/front_ui"),
    plugins: vec![],
    dir: "./../static/".to_string(),
    entry_file_names: FilenameTemplate::new("[name].js".to_string()),
    chunk_file_names: FilenameTemplate::new("[name]-[hash].js".to_string()),
    asset_file_names: FilenameTemplate::new("assets/[name]-[hash][extname]".to_string()),
    empty_out_dir: None,
  };
  assert_eq!(config.out_dir(), Path::new("/app/static"));
}
