//! Source loading: read a file from disk and prepare its [`SourceBuffer`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use minicpp_syntax::Limits;
use minicpp_syntax::source::{SourceBuffer, SourceError};
use thiserror::Error;

/// Failure to produce a [`SourceBuffer`] from a file. Nothing has been tokenized when this is returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("'{}': {source}", path.display())]
    Source { path: PathBuf, source: SourceError },
}

/// Read `path` as UTF-8 and build a buffer under `limits`.
///
/// ## Errors
/// - [`LoadError::Io`] if the file cannot be read or is not valid UTF-8
/// - [`LoadError::Source`] if the prepared buffer is rejected (too long, embedded sentinel)
#[tracing::instrument(skip(limits), fields(path = %path.display()))]
pub fn load_file(path: &Path, limits: &Limits) -> Result<SourceBuffer, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = SourceBuffer::with_limits(&text, limits).map_err(|source| LoadError::Source {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(chars = buffer.len(), "source loaded");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("minicpp_loader_{}_{name}", process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_normalizes_line_endings() {
        let path = temp_file("crlf.mcpp", "int x;\r\nint y;\r\n");
        let buffer = load_file(&path, &Limits::default()).unwrap();
        assert_eq!(buffer.text(), "int x;\nint y;\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("minicpp_loader_does_not_exist.mcpp");
        let err = load_file(&path, &Limits::default()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read '"));
    }

    #[test]
    fn test_over_length_file_is_rejected_before_tokenizing() {
        let path = temp_file("long.mcpp", &"x".repeat(64));
        let limits = Limits::default().with_max_source_len(32);
        let err = load_file(&path, &limits).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Source {
                source: SourceError::TooLong { len: 66, max: 32 },
                ..
            }
        ));
        let _ = fs::remove_file(&path);
    }
}
