use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A framework integration declared in the config. Plugins are plain
/// declarations here, the heavy lifting happens in the framework's own
/// toolchain before products reach the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkPlugin {
  Vue,
  React,
  Svelte,
}

impl FrameworkPlugin {
  /// The npm package users would reach for in a vite setup.
  pub fn package_name(&self) -> &'static str {
    match self {
      Self::Vue => "@vitejs/plugin-vue",
      Self::React => "@vitejs/plugin-react",
      Self::Svelte => "@sveltejs/vite-plugin-svelte",
    }
  }
}

impl Display for FrameworkPlugin {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Vue => write!(f, "vue"),
      Self::React => write!(f, "react"),
      Self::Svelte => write!(f, "svelte"),
    }
  }
}

#[test]
fn test_parses_lowercase_names() {
  let plugins: Vec<FrameworkPlugin> = serde_json::from_str(r#"["vue", "react", "svelte"]"#).unwrap();
  assert_eq!(plugins, vec![FrameworkPlugin::Vue, FrameworkPlugin::React, FrameworkPlugin::Svelte]);
  assert!(serde_json::from_str::<FrameworkPlugin>(r#""angular""#).is_err());
}
