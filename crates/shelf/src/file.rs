//! [`Storage`] backed by JSON files on the filesystem.

use std::{
    fs::{self, File},
    io::{ErrorKind as IoErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use crate::{storage::Storage, Error, ErrorKind};

/// A directory on the filesystem holding one `<key>.json` file per key.
///
/// The directory is created on the first write if it does not exist.
#[derive(Debug, Clone)]
pub struct JsonDirStorage {
    dir: PathBuf,
}

impl JsonDirStorage {
    /// Uses `dir` as the storage directory.
    ///
    /// # Examples
    /// ```no_run
    /// use shelf::{file::JsonDirStorage, BookListStore};
    ///
    /// let store = BookListStore::load(JsonDirStorage::new("."));
    /// println!("{} books saved", store.len());
    /// ```
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The path of the file holding the value for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key).with_extension("json")
    }
}

impl Storage for JsonDirStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key);
        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                log::trace!("{} does not exist yet", path.display());
                return Ok(None);
            }
            Err(e) => return Err(open_error(&path, e)),
        };

        read_file_to_string(&mut file).map(Some)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key);
        overwrite_file(&path, value.as_bytes()).map_err(|e| {
            Error::wrap_with(
                ErrorKind::IO,
                e,
                format!("Failed to write the '{}' file", path.display()),
            )
        })
    }
}

fn read_file_to_string(file: &mut File) -> Result<String, Error> {
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::wrap_with(ErrorKind::IO, e, "Cannot read contents of file"))
        .map(move |bytes| {
            log::trace!("{bytes} read from the file");
            content
        })
}

/// Writes `bytes` to a sibling temporary file and renames it over `path` so a failed write
/// never leaves a half written file behind.
fn overwrite_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("json.tmp");
    log::trace!("writing {} bytes to {}", bytes.len(), tmp.display());
    let res = write_synced(&tmp, bytes).and_then(|()| fs::rename(&tmp, path));

    if res.is_err() && tmp.exists() {
        log::trace!("removing {} after a failed write", tmp.display());
        if let Err(e) = fs::remove_file(&tmp) {
            log::warn!("Cannot remove '{}': {e}", tmp.display());
        }
    }
    res
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[inline]
fn open_error(path: &Path, e: std::io::Error) -> Error {
    Error::wrap_with(
        ErrorKind::IO,
        e,
        format!("Failed to open the '{}' file for reading", path.display()),
    )
}
