pub mod emit_output;
pub mod emit_plan;

use std::sync::Arc;

use packout_common::NormalizedBuildConfig;

pub type SharedConfig = Arc<NormalizedBuildConfig>;
