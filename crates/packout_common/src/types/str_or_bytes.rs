/// File content that is either text or raw bytes. Scripts stay text all the
/// way through, static assets may be anything.
#[derive(Debug, Clone)]
pub enum StrOrBytes {
  Str(String),
  Bytes(Vec<u8>),
}

impl StrOrBytes {
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Str(content) => content.as_bytes(),
      Self::Bytes(content) => content,
    }
  }

  pub fn try_into_string(self) -> anyhow::Result<String> {
    match self {
      Self::Str(content) => Ok(content),
      Self::Bytes(content) => {
        String::from_utf8(content).map_err(|error| anyhow::anyhow!("Invalid utf8: {error}"))
      }
    }
  }
}

impl From<String> for StrOrBytes {
  fn from(content: String) -> Self {
    Self::Str(content)
  }
}

impl From<&str> for StrOrBytes {
  fn from(content: &str) -> Self {
    Self::Str(content.to_string())
  }
}

impl From<Vec<u8>> for StrOrBytes {
  fn from(content: Vec<u8>) -> Self {
    Self::Bytes(content)
  }
}
