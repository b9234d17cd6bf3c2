use std::{borrow::Cow, ffi::OsStr};

pub trait PathExt {
  fn representative_file_name(&self) -> Cow<'_, str>;
}

impl PathExt for std::path::Path {
  /// Derives a display name for a file, stepping up to the parent directory
  /// for `index` and `mod` files since their own stem carries no information.
  fn representative_file_name(&self) -> Cow<'_, str> {
    let stem = self.file_stem().map_or_else(|| self.to_string_lossy(), OsStr::to_string_lossy);

    match &*stem {
      "index" | "mod" => {
        self.parent().and_then(Self::file_stem).map_or(stem, OsStr::to_string_lossy)
      }
      _ => stem,
    }
  }
}

#[test]
fn test_representative_file_name() {
  use std::path::Path;

  assert_eq!(Path::new("src/main.ts").representative_file_name(), "main");
  assert_eq!(Path::new("src/widgets/index.js").representative_file_name(), "widgets");
  assert_eq!(Path::new("src/widgets/mod.ts").representative_file_name(), "widgets");
  assert_eq!(Path::new("index.js").representative_file_name(), "index");
}
