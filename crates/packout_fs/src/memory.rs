use std::{
  io::{self, Read, Write},
  path::{Component, Path},
};

use vfs::{MemoryFS, VfsPath};

use crate::file_system::FileSystem;

/// An in-memory filesystem backed by [`vfs::MemoryFS`], for tests that should
/// never touch the real disk.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: VfsPath::new(MemoryFS::default()) }
  }
}

impl MemoryFileSystem {
  /// Seeds the filesystem with `(absolute path, content)` pairs.
  pub fn new(files: &[(&str, &str)]) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      let path = Path::new(path);
      if let Some(parent) = path.parent() {
        fs.create_dir_all(parent).expect("should create seeded directory");
      }
      fs.write(path, content.as_bytes()).expect("should write seeded file");
    }
    fs
  }

  /// Maps an absolute [`Path`] onto the in-memory tree. Callers are expected
  /// to pass normalized paths, so only normal components are kept.
  fn locate(&self, path: &Path) -> io::Result<VfsPath> {
    let mut joined = String::new();
    for component in path.components() {
      if let Component::Normal(part) = component {
        if !joined.is_empty() {
          joined.push('/');
        }
        joined.push_str(&part.to_string_lossy());
      }
    }
    self.root.join(joined).map_err(to_io_error)
  }
}

impl FileSystem for MemoryFileSystem {
  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    self.locate(path)?.remove_dir_all().map_err(to_io_error)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.locate(path)?.create_dir_all().map_err(to_io_error)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = self.locate(path)?.create_file().map_err(to_io_error)?;
    file.write_all(content)
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    let mut file = self.locate(path)?.open_file().map_err(to_io_error)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)?;
    Ok(content)
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.locate(path)?.read_to_string().map_err(to_io_error)
  }

  fn exists(&self, path: &Path) -> bool {
    self.locate(path).and_then(|path| path.exists().map_err(to_io_error)).unwrap_or(false)
  }
}

fn to_io_error(error: vfs::VfsError) -> io::Error {
  io::Error::other(error)
}

#[test]
fn test_memory_file_system() {
  let fs = MemoryFileSystem::new(&[("/app/static/stale.js", "stale")]);
  assert!(fs.exists(Path::new("/app/static/stale.js")));

  fs.remove_dir_all(Path::new("/app/static")).unwrap();
  assert!(!fs.exists(Path::new("/app/static/stale.js")));

  fs.create_dir_all(Path::new("/app/static/asset")).unwrap();
  fs.write(Path::new("/app/static/asset/main.js"), b"export {}").unwrap();
  assert_eq!(fs.read_to_string(Path::new("/app/static/asset/main.js")).unwrap(), "export {}");
  assert_eq!(fs.read(Path::new("/app/static/asset/main.js")).unwrap(), b"export {}");
}
