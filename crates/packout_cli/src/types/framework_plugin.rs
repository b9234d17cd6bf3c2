use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum FrameworkPlugin {
  Vue,
  React,
  Svelte,
}

impl From<FrameworkPlugin> for packout::FrameworkPlugin {
  fn from(value: FrameworkPlugin) -> Self {
    match value {
      FrameworkPlugin::Vue => packout::FrameworkPlugin::Vue,
      FrameworkPlugin::React => packout::FrameworkPlugin::React,
      FrameworkPlugin::Svelte => packout::FrameworkPlugin::Svelte,
    }
  }
}
