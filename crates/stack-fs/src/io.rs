//! Blocking file reads for context documents

use std::fs;
use std::io::ErrorKind;

use crate::{Error, NormalizedPath, Result};

/// Read text content from a file.
///
/// A missing file is reported as [`Error::MissingDocument`] so callers can
/// tell "not there" apart from other I/O failures.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::MissingDocument { path: native_path.clone() },
        _ => Error::io(&native_path, e),
    })
}
