//! Decoding JSON from readers, strings, and files.
//!
//! Each function decodes the first JSON value in its input. Unknown keys are
//! ignored, and struct fields marked `#[serde(skip)]` keep their
//! `Default` value.
//!
//! The `read_object_from_*` functions build a fresh value, so every visible
//! field without `#[serde(default)]` must be present. The `*_into` forms
//! decode over an existing target instead: keys absent from the input leave
//! the target's current values in place.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::error::Category;

use fsjson_core::{Error, Result};

/// Decodes one JSON value from a byte stream.
///
/// Reading stops after the first complete value; anything that follows it
/// is left unread and is not validated.
///
/// # Errors
///
/// - [`Error::Decode`] for empty input, malformed JSON, or a value that does
///   not fit `T`
/// - [`Error::Io`] if the reader itself fails
pub fn read_object_from_reader<R: Read, T: DeserializeOwned>(reader: R) -> Result<T> {
    first_value(serde_json::Deserializer::from_reader(reader))
}

/// Decodes one JSON value from a string.
///
/// # Example
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Flag {
///     name: String,
/// }
///
/// let flag: Flag = fsjson_json::read_object_from_string(r#"{"name": "beta"}"#).unwrap();
/// assert_eq!(flag.name, "beta");
/// ```
pub fn read_object_from_string<T: DeserializeOwned>(json: &str) -> Result<T> {
    first_value(serde_json::Deserializer::from_str(json))
}

/// Decodes one JSON value from the file at `path`.
///
/// The file is read through a buffer and closed when this returns, on
/// success or failure.
///
/// # Errors
///
/// - [`Error::IoPath`] if the path is empty or the file cannot be opened or
///   read
/// - [`Error::Decode`] if the contents are not valid JSON for `T`
pub fn read_object_from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let reader = open_json_file(path)?;
    read_object_from_reader(reader).map_err(|e| in_file(e, path))
}

/// Decodes one JSON value from `reader` over an existing `target`.
///
/// When the input is an object, its keys are written over the target's
/// current fields, recursing into nested objects. Fields whose keys are
/// absent keep their values. Any other JSON value replaces the target
/// outright. Fields marked `#[serde(skip)]` come back as `Default`.
///
/// `target` is replaced only when decoding succeeds; on error it is left as
/// it was.
///
/// # Example
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Window {
///     title: String,
///     width: u32,
/// }
///
/// let mut window = Window { title: "main".into(), width: 800 };
/// fsjson_json::read_object_into(r#"{"width": 1024}"#.as_bytes(), &mut window).unwrap();
/// assert_eq!(window.title, "main");
/// assert_eq!(window.width, 1024);
/// ```
///
/// # Errors
///
/// - [`Error::Decode`] for malformed JSON or a merged value that does not
///   fit `T`
/// - [`Error::Encode`] if the current `target` has no JSON representation
/// - [`Error::Io`] if the reader itself fails
pub fn read_object_into<R, T>(reader: R, target: &mut T) -> Result<()>
where
    R: Read,
    T: Serialize + DeserializeOwned,
{
    let incoming: Value = read_object_from_reader(reader)?;
    merge_into(target, incoming)
}

/// [`read_object_into`] over an in-memory string.
pub fn read_object_from_string_into<T>(json: &str, target: &mut T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let incoming: Value = read_object_from_string(json)?;
    merge_into(target, incoming)
}

/// [`read_object_into`] over the file at `path`.
///
/// Fails the same way as [`read_object_from_file`].
pub fn read_object_from_file_into<T>(path: impl AsRef<Path>, target: &mut T) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let path = path.as_ref();
    let reader = open_json_file(path)?;
    read_object_into(reader, target).map_err(|e| in_file(e, path))
}

fn open_json_file(path: &Path) -> Result<BufReader<File>> {
    if path.as_os_str().is_empty() {
        let source = io::Error::new(io::ErrorKind::NotFound, "No path provided");
        return Err(Error::io_with_path(source, path));
    }

    debug!("Reading JSON from {}", path.display());
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::io_with_path(e, path))
}

fn in_file(e: Error, path: &Path) -> Error {
    match e {
        Error::Io(source) => Error::io_with_path(source, path),
        Error::Decode(msg) => {
            Error::decode(format!("Invalid JSON in file {}: {}", path.display(), msg))
        }
        other => other,
    }
}

fn merge_into<T>(target: &mut T, incoming: Value) -> Result<()>
where
    T: Serialize + DeserializeOwned,
{
    let merged = match incoming {
        Value::Object(fields) => {
            let mut current =
                serde_json::to_value(&*target).map_err(|e| Error::encode(e.to_string()))?;
            overlay(&mut current, Value::Object(fields));
            current
        }
        other => other,
    };

    *target = serde_json::from_value(merged).map_err(|e| Error::decode(e.to_string()))?;
    Ok(())
}

fn overlay(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, patch) => *slot = patch,
    }
}

fn first_value<'de, R, T>(de: serde_json::Deserializer<R>) -> Result<T>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    match de.into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => Err(classify(e)),
        None => Err(Error::decode("EOF while parsing a value: input is empty")),
    }
}

fn classify(e: serde_json::Error) -> Error {
    match e.classify() {
        Category::Io => Error::Io(io::Error::from(e)),
        Category::Syntax | Category::Data | Category::Eof => Error::decode(e.to_string()),
    }
}
