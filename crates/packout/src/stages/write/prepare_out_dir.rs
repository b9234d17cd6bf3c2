use std::path::Path;

use packout_error::BuildResult;
use packout_fs::FileSystem;

use super::WriteStage;

impl<Fs: FileSystem> WriteStage<'_, Fs> {
  /// Applies the `output.emptyOutDir` policy, then makes sure the output
  /// directory exists:
  ///
  /// - unset: empty the directory only when it sits strictly inside the
  ///   project root, warn and leave it alone otherwise.
  /// - `true`: always empty it, but never a directory containing the root.
  /// - `false`: never empty it.
  pub(crate) fn prepare_out_dir(&self, warnings: &mut Vec<anyhow::Error>) -> BuildResult<()> {
    let out_dir = self.options.out_dir();

    match self.options.empty_out_dir {
      Some(false) => {}
      Some(true) => {
        if self.options.root.starts_with(&out_dir) {
          Err(anyhow::anyhow!(
            "Refusing to empty {} - it contains the project root. Pick an \"output.dir\" below the root or drop \"output.emptyOutDir\".",
            out_dir.display()
          ))?;
        }
        self.empty_dir(&out_dir)?;
      }
      None => {
        let strictly_inside_root =
          out_dir.starts_with(&self.options.root) && out_dir != self.options.root;
        if strictly_inside_root {
          self.empty_dir(&out_dir)?;
        } else if self.fs.exists(&out_dir) {
          warnings.push(anyhow::anyhow!(
            "The output directory {} is not inside the project root and will not be emptied. Set \"output.emptyOutDir\" to force it.",
            out_dir.display()
          ));
        }
      }
    }

    self.fs.create_dir_all(&out_dir).map_err(|error| {
      anyhow::anyhow!("Failed to create output directory {}: {error}", out_dir.display())
    })?;

    Ok(())
  }

  fn empty_dir(&self, out_dir: &Path) -> anyhow::Result<()> {
    if self.fs.exists(out_dir) {
      self.fs.remove_dir_all(out_dir).map_err(|error| {
        anyhow::anyhow!("Failed to empty output directory {}: {error}", out_dir.display())
      })?;
    }
    Ok(())
  }
}
