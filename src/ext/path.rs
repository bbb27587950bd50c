use std::path::Path;

use crate::error::{Error, Result};

/// Extension trait for Path to provide checked string conversion
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use blueprint::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("src/{{ package_name }}");
    /// assert_eq!(path.to_str_checked().unwrap(), "src/{{ package_name }}");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| Error::ProcessError {
            source_path: self.display().to_string(),
            e: "path contains invalid Unicode characters".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_str_checked_accepts_placeholders() {
        let path = Path::new("src/{{ package_name }}/__init__.py");
        assert_eq!(path.to_str_checked().unwrap(), "src/{{ package_name }}/__init__.py");
    }

    #[cfg(unix)]
    #[test]
    fn to_str_checked_rejects_invalid_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"bad\xff"));
        assert!(matches!(path.to_str_checked(), Err(Error::ProcessError { .. })));
    }
}
