use std::{fmt::Display, path::PathBuf};

use arcstr::ArcStr;

use crate::StrOrBytes;

/// What a finished product is, which decides the filename template applied
/// to it and its position in the final output listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
  /// A script users load directly.
  Entry,
  /// A script loaded by other scripts.
  Chunk,
  /// Everything else, images, styles, fonts.
  Asset,
}

impl ProductKind {
  pub fn is_script(self) -> bool {
    matches!(self, Self::Entry | Self::Chunk)
  }
}

impl Display for ProductKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Entry => write!(f, "entry"),
      Self::Chunk => write!(f, "chunk"),
      Self::Asset => write!(f, "asset"),
    }
  }
}

/// One finished file handed to the emitter for naming and writing. Products
/// arrive fully built, the emitter only decides where they land.
#[derive(Debug, Clone)]
pub struct BuildProduct {
  /// Explicit name. Wins over any name derived from `origin`.
  pub name: Option<ArcStr>,
  /// The source path this product was built from.
  pub origin: Option<PathBuf>,
  pub kind: ProductKind,
  pub source: StrOrBytes,
}

impl BuildProduct {
  pub fn new(kind: ProductKind, source: impl Into<StrOrBytes>) -> Self {
    Self { name: None, origin: None, kind, source: source.into() }
  }

  #[must_use]
  pub fn with_name(mut self, name: impl Into<ArcStr>) -> Self {
    self.name = Some(name.into());
    self
  }

  #[must_use]
  pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
    self.origin = Some(origin.into());
    self
  }
}
