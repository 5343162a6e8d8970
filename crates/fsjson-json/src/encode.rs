//! Compact and tab-indented JSON generation.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use fsjson_core::{Error, Result};

use crate::finite::ensure_finite;

/// One indentation level in formatted output.
pub const INDENT: &[u8] = b"\t";

/// Output layout for generated JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// No whitespace between tokens.
    Compact,
    /// Tab-indented, one field or element per line.
    #[default]
    Formatted,
}

impl JsonFormat {
    /// Encode `value` in this layout.
    pub fn encode<T: ?Sized + Serialize>(self, value: &T) -> Result<Vec<u8>> {
        match self {
            Self::Compact => generate_compact_json(value),
            Self::Formatted => generate_formatted_json(value),
        }
    }
}

/// Serializes `value` to JSON with no extraneous whitespace.
///
/// Struct fields appear in declaration order; fields marked
/// `#[serde(skip)]` are omitted.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the value has no JSON representation: a
/// NaN or infinite float, a map with non-scalar keys, or a `Serialize` impl
/// that fails.
///
/// # Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Flag {
///     name: String,
///     enabled: bool,
/// }
///
/// let flag = Flag { name: "beta".into(), enabled: true };
/// let bytes = fsjson_json::generate_compact_json(&flag).unwrap();
/// assert_eq!(bytes, br#"{"name":"beta","enabled":true}"#);
/// ```
pub fn generate_compact_json<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>> {
    ensure_finite(value).map_err(|e| Error::encode(e.to_string()))?;
    serde_json::to_vec(value).map_err(|e| Error::encode(e.to_string()))
}

/// Serializes `value` to JSON indented with one tab per level.
///
/// Keys are followed by `": "`, and there is no trailing newline. Empty
/// objects and arrays stay on one line (`{}`, `[]`).
///
/// # Errors
///
/// Same as [`generate_compact_json`].
pub fn generate_formatted_json<T: ?Sized + Serialize>(value: &T) -> Result<Vec<u8>> {
    ensure_finite(value).map_err(|e| Error::encode(e.to_string()))?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .map_err(|e| Error::encode(e.to_string()))?;
    Ok(buf)
}
