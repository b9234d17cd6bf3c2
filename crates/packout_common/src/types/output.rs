use arcstr::ArcStr;

use crate::StrOrBytes;

/// A script written to the output directory.
#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub name: ArcStr,
  pub filename: ArcStr,
  pub code: String,
  pub is_entry: bool,
}

/// A non-script file written to the output directory.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub name: ArcStr,
  pub filename: ArcStr,
  pub source: StrOrBytes,
}

#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.filename,
      Self::Asset(asset) => &asset.filename,
    }
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    match self {
      Self::Chunk(chunk) => chunk.code.as_bytes(),
      Self::Asset(asset) => asset.source.as_bytes(),
    }
  }
}
