pub mod filename_template;
pub mod framework_plugin;
pub mod normalized_build_config;

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::FrameworkPlugin;

/// The build configuration as users write it, usually in
/// `packout.config.json`. Every field is optional, missing ones pick up
/// defaults during normalization.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
  // --- Project
  pub root: Option<PathBuf>,
  pub plugins: Option<Vec<FrameworkPlugin>>,

  // --- Output
  pub output: Option<OutputOptions>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
  pub dir: Option<String>,
  pub entry_file_names: Option<String>,
  pub chunk_file_names: Option<String>,
  pub asset_file_names: Option<String>,
  pub empty_out_dir: Option<bool>,
}

impl BuildConfig {
  pub const DEFAULT_FILE_NAME: &'static str = "packout.config.json";

  /// Loads a configuration from a JSON file.
  pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|error| anyhow::anyhow!("Failed to read config file {}: {error}", path.display()))?;
    serde_json::from_str(&content)
      .map_err(|error| anyhow::anyhow!("Failed to parse config file {}: {error}", path.display()))
  }
}

#[test]
fn test_parse_full_config() {
  let config: BuildConfig = serde_json::from_str(
    r#"{
      "plugins": ["vue"],
      "output": {
        "dir": "./../static/",
        "entryFileNames": "asset/[name].js",
        "chunkFileNames": "asset/[name].js",
        "assetFileNames": "asset/[name].[ext]"
      }
    }"#,
  )
  .unwrap();

  assert_eq!(config.plugins, Some(vec![FrameworkPlugin::Vue]));
  let output = config.output.unwrap();
  assert_eq!(output.dir.as_deref(), Some("./../static/"));
  assert_eq!(output.entry_file_names.as_deref(), Some("asset/[name].js"));
  assert_eq!(output.chunk_file_names.as_deref(), Some("asset/[name].js"));
  assert_eq!(output.asset_file_names.as_deref(), Some("asset/[name].[ext]"));
  assert_eq!(output.empty_out_dir, None);
}

#[test]
fn test_empty_config_is_all_defaults() {
  let config: BuildConfig = serde_json::from_str("{}").unwrap();
  assert!(config.root.is_none());
  assert!(config.plugins.is_none());
  assert!(config.output.is_none());
}

#[test]
fn test_unknown_keys_are_rejected() {
  assert!(serde_json::from_str::<BuildConfig>(r#"{ "outDir": "dist" }"#).is_err());
  assert!(serde_json::from_str::<BuildConfig>(r#"{ "output": { "file": "main.js" } }"#).is_err());
}

#[test]
fn test_config_survives_a_serde_round_trip() {
  let config: BuildConfig = serde_json::from_str(
    r#"{
      "root": "/app/front_ui",
      "plugins": ["vue"],
      "output": {
        "dir": "./../static/",
        "entryFileNames": "asset/[name].js",
        "chunkFileNames": "asset/[name].js",
        "assetFileNames": "asset/[name].[ext]",
        "emptyOutDir": true
      }
    }"#,
  )
  .unwrap();

  let json = serde_json::to_string(&config).unwrap();
  let reparsed: BuildConfig = serde_json::from_str(&json).unwrap();

  assert_eq!(serde_json::to_value(&config).unwrap(), serde_json::to_value(&reparsed).unwrap());
  assert_eq!(reparsed.plugins, Some(vec![FrameworkPlugin::Vue]));
  let output = reparsed.output.unwrap();
  assert_eq!(output.dir.as_deref(), Some("./../static/"));
  assert_eq!(output.empty_out_dir, Some(true));
}
