//! fsjson JSON — read and write serde types as JSON.
//!
//! Decoding works from readers, strings, and files. Encoding produces
//! compact or tab-indented bytes, and files are written without ever
//! replacing an existing entry unless asked to.
//!
//! # Field visibility
//!
//! Every field of a `#[derive(Serialize, Deserialize)]` type takes part in
//! JSON unless it is marked `#[serde(skip)]`. Skipped fields are omitted on
//! write and keep their `Default` value on read. Keys in the input that the
//! type does not name are ignored.
//!
//! This is opt-out, not opt-in. An unmarked field is visible, which is the
//! reverse of a default-skip rule where only explicitly marked fields would
//! be serialized. Mark every field that must stay out of JSON with
//! `#[serde(skip)]`.
//!
//! # Missing keys
//!
//! [`read_object_into`], [`read_object_from_string_into`] and
//! [`read_object_from_file_into`] decode over an existing value, so a
//! visible field whose key is absent keeps its current value. The
//! `read_object_from_*` functions build a fresh value and report a missing
//! key as [`fsjson_core::Error::Decode`] unless the field has
//! `#[serde(default)]`.
//!
//! # Modules
//!
//! - [`read`]: Decoding from readers, strings, and files
//! - [`encode`]: Compact and formatted generation
//! - [`write`]: Create-only file output

#![doc = include_str!("../README.md")]

mod finite;

pub mod encode;
pub mod read;
pub mod write;

pub use encode::{JsonFormat, generate_compact_json, generate_formatted_json};
pub use read::{
    read_object_from_file, read_object_from_file_into, read_object_from_reader,
    read_object_from_string, read_object_from_string_into, read_object_into,
};
pub use write::{WriteOptions, write_object_to_file, write_object_to_file_with};
