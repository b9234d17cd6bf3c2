mod emitter;
mod stages;
mod types;
mod utils;

pub use crate::{
  emitter::Emitter,
  types::{
    emit_output::EmitOutput,
    emit_plan::{EmitPlan, PlannedFile},
  },
};
pub use packout_common::*;
pub use packout_error::{BuildError, BuildResult};
