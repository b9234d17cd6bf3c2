use std::sync::Arc;

use itertools::Itertools;
use packout_common::{BuildConfig, BuildProduct, NormalizedBuildConfig};
use packout_error::BuildResult;
use packout_fs::{FileSystem, OsFileSystem};
use tracing::instrument;

use crate::{
  stages::{plan::PlanStage, write::WriteStage},
  types::{SharedConfig, emit_output::EmitOutput, emit_plan::EmitPlan},
  utils::normalize_config::normalize_config,
};

/// Takes finished build products and puts them into the configured output
/// layout. The configuration is normalized once and never changes afterwards.
pub struct Emitter<Fs: FileSystem = OsFileSystem> {
  pub(crate) fs: Fs,
  pub(crate) options: SharedConfig,
  pub(crate) warnings: Vec<anyhow::Error>,
}

impl Emitter {
  pub fn new(config: BuildConfig) -> Self {
    Self::with_file_system(config, OsFileSystem)
  }
}

impl<Fs: FileSystem> Emitter<Fs> {
  pub fn with_file_system(config: BuildConfig, fs: Fs) -> Self {
    packout_tracing::init();

    let options = normalize_config(config);

    let warnings = options
      .plugins
      .iter()
      .duplicates()
      .map(|plugin| {
        anyhow::anyhow!(
          "Plugin \"{plugin}\" ({}) is declared more than once.",
          plugin.package_name()
        )
      })
      .collect();

    Emitter { fs, options: Arc::new(options), warnings }
  }

  pub fn options(&self) -> &NormalizedBuildConfig {
    &self.options
  }

  /// Warnings gathered outside an emit, currently config lint findings.
  pub fn warnings(&self) -> &[anyhow::Error] {
    &self.warnings
  }

  /// Decides where every product would land without writing anything.
  #[instrument(skip_all)]
  pub async fn plan(&self, products: &[BuildProduct]) -> BuildResult<EmitPlan> {
    tracing::debug!("{:#?}", self.options);
    PlanStage::new(&self.options).plan(products).await
  }

  /// Plans the products and writes them below the configured output
  /// directory.
  #[instrument(skip_all)]
  pub async fn write(&mut self, products: Vec<BuildProduct>) -> BuildResult<EmitOutput> {
    tracing::debug!("{:#?}", self.options);

    let plan = PlanStage::new(&self.options).plan(&products).await?;

    let mut warnings = std::mem::take(&mut self.warnings);
    let assets =
      WriteStage::new(&self.fs, &self.options).write(&plan, products, &mut warnings).await?;

    Ok(EmitOutput { assets, warnings })
  }
}
