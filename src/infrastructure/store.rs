//! File-backed JSON store
//!
//! A cafeteria data directory is any directory containing `.mensa/`.
//! Every entity collection is one JSON file under `.mensa/`, read whole
//! into memory and rewritten whole on mutation.

use crate::error::{MensaError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_DIR: &str = ".mensa";

/// Handle to a cafeteria data directory
#[derive(Debug, Clone)]
pub struct DataStore {
    pub root: PathBuf,
}

impl DataStore {
    /// Create a store handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        DataStore { root }
    }

    /// Discover the data root: MENSA_ROOT if set, otherwise walk up
    /// from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MENSA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_data_dir(&path) {
                return Ok(DataStore::new(path));
            }
            return Err(MensaError::Config(format!(
                "MENSA_ROOT is set to '{}' but no .mensa directory found. \
                Run 'mensa init' in that directory or unset MENSA_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from a starting directory until a `.mensa` directory is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_data_dir(&current) {
                return Ok(DataStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MensaError::NotInitialized(start.to_path_buf())),
            }
        }
    }

    fn has_data_dir(path: &Path) -> bool {
        path.join(DATA_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_data_dir(&self.root)
    }

    /// Create the `.mensa` directory; fails if already present
    pub fn initialize(&self) -> Result<()> {
        let data_dir = self.data_dir();

        if data_dir.exists() {
            return Err(MensaError::AlreadyInitialized(self.root.clone()));
        }

        fs::create_dir_all(&data_dir)?;
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Load an entity collection; a missing file is an empty collection
    pub fn load_list<T: DeserializeOwned>(&self, filename: &str) -> Result<Vec<T>> {
        let path = self.data_dir().join(filename);

        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Rewrite an entity collection in full
    pub fn save_list<T: Serialize>(&self, filename: &str, items: &[T]) -> Result<()> {
        let contents = serde_json::to_string_pretty(items)?;
        self.write_atomic(filename, &contents)
    }

    /// Load a singleton record; a missing file is None
    pub fn load_record<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.data_dir().join(filename);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Write a singleton record
    pub fn save_record<T: Serialize>(&self, filename: &str, record: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(record)?;
        self.write_atomic(filename, &contents)
    }

    /// Delete a singleton record if present
    pub fn remove_record(&self, filename: &str) -> Result<()> {
        let path = self.data_dir().join(filename);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Best-effort atomic replace: write a temp file in the data
    /// directory, then rename it into place.
    ///
    /// On Windows, `rename` does not overwrite, so the destination is
    /// removed first.
    fn write_atomic(&self, filename: &str, contents: &str) -> Result<()> {
        let data_dir = self.data_dir();
        if !data_dir.exists() {
            return Err(MensaError::NotInitialized(self.root.clone()));
        }

        let path = data_dir.join(filename);
        let tmp_path = data_dir.join(format!("{}.tmp-{}", filename, std::process::id()));

        fs::write(&tmp_path, contents)?;

        if path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
