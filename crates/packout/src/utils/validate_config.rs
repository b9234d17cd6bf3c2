use std::path::{Component, Path};

use packout_common::{FilenameTemplate, NormalizedBuildConfig};
use packout_error::BuildResult;

/// Checks the normalized config for values that could never produce a sane
/// output layout. All violations are reported together.
pub fn validate_config(options: &NormalizedBuildConfig) -> BuildResult<()> {
  let mut errors: Vec<anyhow::Error> = vec![];

  if options.dir.is_empty() {
    errors.push(anyhow::anyhow!("Invalid value for option \"output.dir\" - it must not be empty."));
  }

  for (key, template, allows_extension) in [
    ("output.entryFileNames", &options.entry_file_names, false),
    ("output.chunkFileNames", &options.chunk_file_names, false),
    ("output.assetFileNames", &options.asset_file_names, true),
  ] {
    validate_filename_pattern(key, template, allows_extension, &mut errors);
  }

  if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
}

fn validate_filename_pattern(
  key: &str,
  template: &FilenameTemplate,
  allows_extension: bool,
  errors: &mut Vec<anyhow::Error>,
) {
  let pattern = template.template();
  if pattern.is_empty() {
    errors
      .push(anyhow::anyhow!("Invalid value for option \"{key}\" - the pattern must not be empty."));
    return;
  }
  if pattern.starts_with('/') || pattern.starts_with('\\') {
    errors.push(anyhow::anyhow!(
      "Invalid value for option \"{key}\" - the pattern must be relative to \"output.dir\", got {pattern:?}."
    ));
  }
  if Path::new(pattern).components().any(|component| matches!(component, Component::ParentDir)) {
    errors.push(anyhow::anyhow!(
      "Invalid value for option \"{key}\" - the pattern must not escape \"output.dir\" with \"..\" segments."
    ));
  }
  if !allows_extension {
    // Scripts carry their extension in the pattern itself, only assets get
    // the original one substituted back in.
    for placeholder in ["[ext]", "[extname]"] {
      if pattern.contains(placeholder) {
        errors.push(anyhow::anyhow!(
          "Invalid value for option \"{key}\" - \"{placeholder}\" is only supported in \"output.assetFileNames\"."
        ));
      }
    }
  }
}

#[cfg(test)]
fn config_with_patterns(dir: &str, entry: &str, chunk: &str, asset: &str) -> NormalizedBuildConfig {
  NormalizedBuildConfig {
    root: "/app".into(),
    plugins: vec![],
    dir: dir.to_string(),
    entry_file_names: FilenameTemplate::new(entry.to_string()),
    chunk_file_names: FilenameTemplate::new(chunk.to_string()),
    asset_file_names: FilenameTemplate::new(asset.to_string()),
    empty_out_dir: None,
  }
}

#[test]
fn test_accepts_the_defaults() {
  let config =
    config_with_patterns("dist", "[name].js", "[name]-[hash].js", "assets/[name]-[hash][extname]");
  assert!(validate_config(&config).is_ok());
}

#[test]
fn test_aggregates_every_violation() {
  let config = config_with_patterns("", "/abs/[name].js", "../[name].js", "asset/[name].[ext]");
  let errors = validate_config(&config).unwrap_err();
  assert_eq!(errors.len(), 3);
  assert!(errors[0].to_string().contains("output.dir"));
  assert!(errors[1].to_string().contains("output.entryFileNames"));
  assert!(errors[2].to_string().contains("output.chunkFileNames"));
}

#[test]
fn test_rejects_extension_placeholders_in_script_patterns() {
  let config =
    config_with_patterns("dist", "[name][extname]", "[name].js", "assets/[name][extname]");
  let errors = validate_config(&config).unwrap_err();
  assert_eq!(errors.len(), 1);
  assert!(errors[0].to_string().contains("output.entryFileNames"));
}
