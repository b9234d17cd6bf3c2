mod build_config;
mod types;

pub use build_config::{
  BuildConfig, OutputOptions,
  filename_template::{FileNameRenderOptions, FilenameTemplate},
  framework_plugin::FrameworkPlugin,
  normalized_build_config::NormalizedBuildConfig,
};

pub use crate::types::{
  build_product::{BuildProduct, ProductKind},
  output::{Output, OutputAsset, OutputChunk},
  str_or_bytes::StrOrBytes,
};
