use std::path::PathBuf;

use clap::Args;

use crate::types::framework_plugin::FrameworkPlugin;

#[derive(Args)]
pub struct InputArgs {
  #[clap(long)]
  pub root: Option<PathBuf>,

  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  #[clap(long, action = clap::ArgAction::Append, value_name = "NAME=PATH|PATH")]
  pub input: Option<Vec<String>>,

  #[clap(long, action = clap::ArgAction::Append, value_name = "NAME=PATH|PATH")]
  pub chunk: Option<Vec<String>>,

  #[clap(long, action = clap::ArgAction::Append, value_name = "NAME=PATH|PATH")]
  pub asset: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long)]
  pub entry_file_names: Option<String>,

  #[clap(long)]
  pub chunk_file_names: Option<String>,

  #[clap(long)]
  pub asset_file_names: Option<String>,

  #[clap(long)]
  pub empty_out_dir: Option<bool>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  #[clap(long, action = clap::ArgAction::Append)]
  pub plugin: Option<Vec<FrameworkPlugin>>,

  #[clap(long)]
  pub print_config: bool,

  #[clap(long)]
  pub dry_run: bool,

  #[clap(long)]
  pub silent: bool,
}
