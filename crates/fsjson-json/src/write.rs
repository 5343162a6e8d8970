//! Writing JSON files without clobbering existing ones.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use fsjson_core::{Error, Result};
use fsjson_path::is_path_exists;

use crate::encode::JsonFormat;

/// Options for [`write_object_to_file_with`].
///
/// The default is formatted output, no overwrite, no parent creation and no
/// trailing newline, which is what [`write_object_to_file`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    /// Output layout.
    pub format: JsonFormat,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
    /// Create missing parent directories.
    pub create_parents: bool,
    /// Append `\n` after the JSON text.
    pub trailing_newline: bool,
}

impl WriteOptions {
    /// Set the output layout.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Allow replacing an existing file.
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Create missing parent directories before writing.
    pub fn with_create_parents(mut self, create: bool) -> Self {
        self.create_parents = create;
        self
    }

    /// End the file with a newline.
    pub fn with_trailing_newline(mut self, newline: bool) -> Self {
        self.trailing_newline = newline;
        self
    }
}

/// Writes `value` as tab-indented JSON to a new file at `path`.
///
/// Never overwrites: if anything already exists at `path` the call fails
/// and the existing entry is untouched.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] for an empty path
/// - [`Error::AlreadyExists`] if an entry exists at `path`
/// - [`Error::Encode`] if `value` has no JSON representation (no file is
///   created)
/// - [`Error::IoPath`] if the file cannot be created or written
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let dir = tempfile::TempDir::new().unwrap();
/// let path = dir.path().join("settings.json");
/// let settings = BTreeMap::from([("theme", "dark")]);
///
/// fsjson_json::write_object_to_file(&path, &settings).unwrap();
/// assert!(fsjson_json::write_object_to_file(&path, &settings)
///     .unwrap_err()
///     .is_already_exists());
/// ```
pub fn write_object_to_file<T: ?Sized + Serialize>(
    path: impl AsRef<Path>,
    value: &T,
) -> Result<()> {
    write_object_to_file_with(path, value, &WriteOptions::default())
}

/// Writes `value` as JSON to `path` according to `options`.
///
/// The value is encoded before the filesystem is touched. Without
/// `overwrite`, the file is opened with create-new semantics, so a file
/// appearing between the existence check and the create still yields
/// [`Error::AlreadyExists`].
pub fn write_object_to_file_with<T: ?Sized + Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    options: &WriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument("No path provided"));
    }

    if !options.overwrite && is_path_exists(path)? {
        debug!("Refusing to overwrite {}", path.display());
        return Err(Error::already_exists(path));
    }

    let mut bytes = options.format.encode(value)?;
    if options.trailing_newline {
        bytes.push(b'\n');
    }

    if options.create_parents
        && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }

    let mut open = OpenOptions::new();
    open.write(true);
    if options.overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }

    let mut file = open.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            Error::already_exists(path)
        } else {
            Error::io_with_path(e, path)
        }
    })?;
    file.write_all(&bytes)
        .and_then(|()| file.flush())
        .map_err(|e| Error::io_with_path(e, path))?;

    debug!("Wrote {} bytes of JSON to {}", bytes.len(), path.display());
    Ok(())
}
