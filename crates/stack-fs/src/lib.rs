//! Filesystem layer for stack context resolution
//!
//! Provides project-root relative path handling and loading of structured
//! context documents (JSON, YAML, TOML) into key/value mappings.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ContextPath;
pub use document::{Document, DocumentFormat, DocumentLoader};
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_identifier};
