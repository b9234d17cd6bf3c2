use std::{
  fmt,
  ops::{Deref, DerefMut},
};

/// One failed build may surface several independent problems, so every
/// fallible stage reports all of them at once instead of the first it hits.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        f.write_str("\n")?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

#[test]
fn test_collects_every_error() {
  let errors: BuildError = vec![anyhow::anyhow!("first"), anyhow::anyhow!("second")].into();
  assert_eq!(errors.len(), 2);
  assert_eq!(errors.to_string(), "first\nsecond");
}
