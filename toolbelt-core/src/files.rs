//! File and Directory Helpers.
//!
//! Existence and permission assertions plus a few convenience wrappers
//! around `std::fs`. Every failure is reported as a [`FilesError`] carrying
//! the offending path.
//!
//! Readability of a directory is probed by listing it; readability of a file
//! by opening it. Writability follows the permission bits reported by the
//! filesystem (`Permissions::readonly`).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::FilesError;

fn check_not_empty(path: &Path) -> Result<(), FilesError> {
    if path.as_os_str().is_empty() {
        Err(FilesError::EmptyPath)
    } else {
        Ok(())
    }
}

fn check_writable(path: &Path) -> Result<(), FilesError> {
    let metadata = fs::metadata(path).map_err(|e| FilesError::Io {
        message: "Failed to read metadata".to_string(),
        path: path.to_path_buf(),
        source: e,
    })?;
    if metadata.permissions().readonly() {
        return Err(FilesError::NotWritable { path: path.to_path_buf() });
    }
    Ok(())
}

/// Asserts that `path` is an existing directory, optionally readable and writable.
///
/// # Errors
///
/// [`FilesError::EmptyPath`], [`FilesError::NotFound`],
/// [`FilesError::NotADirectory`], [`FilesError::NotReadable`] or
/// [`FilesError::NotWritable`], checked in that order.
///
/// # Examples
///
/// ```
/// # use toolbelt_core::files::assert_directory;
/// let dir = tempfile::tempdir().unwrap();
/// assert!(assert_directory(dir.path(), true, true).is_ok());
/// assert!(assert_directory(&dir.path().join("missing"), false, false).is_err());
/// ```
pub fn assert_directory(path: &Path, readable: bool, writable: bool) -> Result<(), FilesError> {
    check_not_empty(path)?;
    if !path.exists() {
        return Err(FilesError::NotFound { path: path.to_path_buf() });
    }
    if !path.is_dir() {
        return Err(FilesError::NotADirectory { path: path.to_path_buf() });
    }
    if readable && fs::read_dir(path).is_err() {
        return Err(FilesError::NotReadable { path: path.to_path_buf() });
    }
    if writable {
        check_writable(path)?;
    }
    Ok(())
}

/// Asserts that `path` is an existing regular file, optionally readable and writable.
pub fn assert_file(path: &Path, readable: bool, writable: bool) -> Result<(), FilesError> {
    check_not_empty(path)?;
    if !path.exists() {
        return Err(FilesError::NotFound { path: path.to_path_buf() });
    }
    if !path.is_file() {
        return Err(FilesError::NotAFile { path: path.to_path_buf() });
    }
    if readable && fs::File::open(path).is_err() {
        return Err(FilesError::NotReadable { path: path.to_path_buf() });
    }
    if writable {
        check_writable(path)?;
    }
    Ok(())
}

/// Ensures that a directory exists at `path`, creating parents as needed.
///
/// # Errors
///
/// - [`FilesError::NotADirectory`] if the path is occupied by something else,
/// - [`FilesError::CreateFailed`] if creation fails.
pub fn make_directory(path: &Path) -> Result<(), FilesError> {
    check_not_empty(path)?;
    if path.exists() {
        return if path.is_dir() {
            Ok(())
        } else {
            Err(FilesError::NotADirectory { path: path.to_path_buf() })
        };
    }
    debug!(path = %path.display(), "Creating directory");
    fs::create_dir_all(path).map_err(|e| FilesError::CreateFailed { path: path.to_path_buf(), source: e })
}

/// Removes the directory at `path` and everything below it.
pub fn delete_directory(path: &Path) -> Result<(), FilesError> {
    assert_directory(path, false, false)?;
    debug!(path = %path.display(), "Removing directory");
    fs::remove_dir_all(path).map_err(|e| FilesError::RemoveFailed { path: path.to_path_buf(), source: e })
}

/// Reads the entire contents of a file into a string.
pub fn read_to_string(path: &Path) -> Result<String, FilesError> {
    fs::read_to_string(path).map_err(|e| FilesError::Io {
        message: "Failed to read file to string".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes `content` to `path`, creating the parent directory when missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<(), FilesError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        make_directory(parent)?;
    }
    fs::write(path, content).map_err(|e| FilesError::Io {
        message: "Failed to write string to file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Lowercased extension of `path`, without the dot.
///
/// ```
/// # use std::path::Path;
/// # use toolbelt_core::files::file_extension;
/// assert_eq!(file_extension(Path::new("archive.TAR.GZ")), Some("gz".to_string()));
/// assert_eq!(file_extension(Path::new(".bashrc")), None);
/// ```
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension().and_then(|ext| ext.to_str()).map(str::to_lowercase)
}
