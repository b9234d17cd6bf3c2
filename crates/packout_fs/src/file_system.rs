use std::{io, path::Path};

/// The filesystem surface the emitter writes through, kept behind a trait so
/// tests can swap the real disk for an in-memory one.
pub trait FileSystem: Send + Sync {
  /// Removes a directory and everything below it.
  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Creates a directory and all of its missing parents.
  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Writes a whole file, replacing any previous content. Parent directories
  /// must already exist.
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn exists(&self, path: &Path) -> bool;
}
