use packout_common::{BuildConfig, FilenameTemplate, NormalizedBuildConfig};
use sugar_path::SugarPath;

pub fn normalize_config(raw_config: BuildConfig) -> NormalizedBuildConfig {
  let cwd = std::env::current_dir().expect("Failed to get current dir");
  let output = raw_config.output.unwrap_or_default();

  NormalizedBuildConfig {
    root: raw_config.root.map_or(cwd.clone(), |root| root.absolutize_with(cwd)),
    plugins: raw_config.plugins.unwrap_or_default(),
    dir: output.dir.unwrap_or_else(|| "dist".to_string()),
    entry_file_names: FilenameTemplate::new(
      output.entry_file_names.unwrap_or_else(|| "[name].js".to_string()),
    ),
    chunk_file_names: FilenameTemplate::new(
      output.chunk_file_names.unwrap_or_else(|| "[name]-[hash].js".to_string()),
    ),
    asset_file_names: FilenameTemplate::new(
      output.asset_file_names.unwrap_or_else(|| "assets/[name]-[hash][extname]".to_string()),
    ),
    empty_out_dir: output.empty_out_dir,
  }
}

#[test]
fn test_applies_rollup_default_filenames() {
  let normalized = normalize_config(BuildConfig::default());
  assert_eq!(normalized.dir, "dist");
  assert_eq!(normalized.entry_file_names.template(), "[name].js");
  assert_eq!(normalized.chunk_file_names.template(), "[name]-[hash].js");
  assert_eq!(normalized.asset_file_names.template(), "assets/[name]-[hash][extname]");
  assert!(normalized.plugins.is_empty());
  assert!(normalized.root.is_absolute());
}

#[test]
fn test_keeps_configured_filenames() {
  use packout_common::OutputOptions;

  let normalized = normalize_config(BuildConfig {
    output: Some(OutputOptions {
      dir: Some("./../static/".to_string()),
      entry_file_names: Some("asset/[name].js".to_string()),
      chunk_file_names: Some("asset/[name].js".to_string()),
      asset_file_names: Some("asset/[name].[ext]".to_string()),
      empty_out_dir: None,
    }),
    ..Default::default()
  });
  assert_eq!(normalized.dir, "./../static/");
  assert_eq!(normalized.entry_file_names.template(), "asset/[name].js");
  assert_eq!(normalized.asset_file_names.template(), "asset/[name].[ext]");
}

#[test]
fn test_absolutizes_a_relative_root() {
  let normalized =
    normalize_config(BuildConfig { root: Some("front_ui".into()), ..Default::default() });
  assert!(normalized.root.is_absolute());
  assert!(normalized.root.ends_with("front_ui"));
}
