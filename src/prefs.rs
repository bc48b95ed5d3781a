use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "pocket-snake";
const PREFS_FILE_NAME: &str = "prefs.json";

/// Failure reading or writing the preference file.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid preference data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Small integer key-value store used for the high score.
pub trait Preferences {
    /// Returns the stored value for `key`, or `default` when absent.
    fn get_int(&self, key: &str, default: u32) -> u32;

    /// Stores `value` under `key`.
    fn set_int(&mut self, key: &str, value: u32) -> Result<(), PrefsError>;
}

/// Returns the platform-correct preference file path.
#[must_use]
pub fn default_prefs_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(PREFS_FILE_NAME);
    base
}

/// On-disk layout, one map per value type.
#[derive(Debug, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    ints: BTreeMap<String, u32>,
}

/// Preferences persisted as JSON, rewritten on every change.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
    values: BTreeMap<String, u32>,
}

impl JsonPreferences {
    /// Loads preferences from `path`.
    ///
    /// A missing file yields an empty store. A file that exists but cannot be
    /// read or parsed is an error, so the caller can warn before overwriting it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::empty(path)),
            Err(e) => return Err(e.into()),
        };

        let file: PrefsFile = serde_json::from_str(&raw).map_err(|source| PrefsError::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            values: file.ints,
        })
    }

    /// Creates an empty store that will write to `path` on first change.
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            values: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = PrefsFile {
            ints: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(encoding_error)?;

        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Serialisation failures surface as I/O errors, not as bad file contents.
fn encoding_error(source: serde_json::Error) -> PrefsError {
    PrefsError::Io(io::Error::new(io::ErrorKind::InvalidData, source))
}

impl Preferences for JsonPreferences {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: u32) -> Result<(), PrefsError> {
        self.values.insert(key.to_owned(), value);
        self.persist()
    }
}

/// Process-local preferences that are never persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, u32>,
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: u32) -> Result<(), PrefsError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }
}
