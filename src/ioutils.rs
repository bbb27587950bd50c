use std::path::Path;

use crate::error::{Error, Result};

fn fs_error(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::FilesystemError { path: path.to_path_buf(), source }
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(fs_error(dest_path))
}

/// Writes `content` to `dest_path`, creating parent directories first.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(fs_error(dest_path))
}

/// Returns `true` when `path` is missing or is a directory without entries.
pub fn is_dir_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(true);
    }
    let mut entries = std::fs::read_dir(path).map_err(fs_error(path))?;
    Ok(entries.next().is_none())
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
