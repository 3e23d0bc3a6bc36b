use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::components::character::Character;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Corrupt(serde_json::Error),
}

impl From<io::Error> for StorageError {
    fn from(err: io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "storage I/O error: {}", err),
            StorageError::Corrupt(err) => write!(f, "stored character list is corrupt: {}", err),
        }
    }
}

impl std::error::Error for StorageError {}

/// Where the character list lives. The store calls `save` on every
/// mutation (write-through, no batching), so implementations should be
/// cheap to call repeatedly.
pub trait CharacterStorage {
    /// Returns the saved list, or an empty list when nothing has been
    /// saved yet. The store seeds a template character in that case.
    fn load_character_list(&self) -> Result<Vec<Character>, StorageError>;

    fn save_character_list(&mut self, characters: &[Character]) -> Result<(), StorageError>;
}

/// Stores the character list as one JSON document on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterStorage for JsonFileStorage {
    fn load_character_list(&self) -> Result<Vec<Character>, StorageError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no saved character list, starting fresh");
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let characters: Vec<Character> = serde_json::from_str(&contents)?;
        info!(path = %self.path.display(), count = characters.len(), "loaded character list");
        Ok(characters)
    }

    fn save_character_list(&mut self, characters: &[Character]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(characters)?;
        fs::write(&self.path, contents)?;
        info!(path = %self.path.display(), count = characters.len(), "saved character list");
        Ok(())
    }
}

/// Keeps the list in memory. Used by tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    characters: Vec<Character>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_characters(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}

impl CharacterStorage for MemoryStorage {
    fn load_character_list(&self) -> Result<Vec<Character>, StorageError> {
        Ok(self.characters.clone())
    }

    fn save_character_list(&mut self, characters: &[Character]) -> Result<(), StorageError> {
        self.characters = characters.to_vec();
        Ok(())
    }
}
