//! fsjson — path resolution and JSON file helpers.
//!
//! This umbrella crate re-exports the fsjson crates for convenience.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Note {
//!     title: String,
//! }
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let path = dir.path().join("note.json");
//! let path = path.to_str().unwrap();
//!
//! assert!(!fsjson::is_relative_path(path).unwrap());
//! let path = fsjson::abs_path(path).unwrap();
//!
//! let note = Note { title: "hello".into() };
//! fsjson::write_object_to_file(&path, &note).unwrap();
//! let back: Note = fsjson::read_object_from_file(&path).unwrap();
//! assert_eq!(back, note);
//! ```

#![doc = include_str!("../README.md")]

// Re-export core (always available)
pub use fsjson_core::*;

pub use fsjson_json as json;
pub use fsjson_path as path;

pub use fsjson_json::{
    JsonFormat, WriteOptions, generate_compact_json, generate_formatted_json,
    read_object_from_file, read_object_from_file_into, read_object_from_reader,
    read_object_from_string, read_object_from_string_into, read_object_into,
    write_object_to_file, write_object_to_file_with,
};
pub use fsjson_path::{
    Environment, MapEnv, PathResolver, ProcessEnv, ResolverConfig, UndefinedVarPolicy, abs_path,
    clean_path, expand, is_path_exists, is_relative_path,
};
