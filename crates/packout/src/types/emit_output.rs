use packout_common::Output;

/// Everything one emit produced, in rollup's output order: entries first,
/// then secondary chunks, then assets.
#[derive(Debug, Default)]
pub struct EmitOutput {
  pub assets: Vec<Output>,
  pub warnings: Vec<anyhow::Error>,
}
