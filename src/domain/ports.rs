use std::io;
use std::path::{Path, PathBuf};

/// File access used by the minifier, so callers can swap the filesystem out.
pub trait Storage {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

pub trait ConfigProvider {
    /// Paths given on the command line; empty means "scan the tokens directory".
    fn files(&self) -> &[PathBuf];
    fn tokens_dir(&self) -> &Path;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        (**self).write_file(path, data)
    }
}
