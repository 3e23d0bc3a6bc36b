use std::fmt;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    components::{character::Character, id::CharacterId, patch::CharacterPatch},
    store::{
        persistence::{CharacterStorage, StorageError},
        seed,
    },
};

#[derive(Debug)]
pub enum ImportError {
    /// The document has no usable `name`; nothing is imported.
    MissingName,
    Malformed(serde_json::Error),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MissingName => write!(f, "imported character has no name"),
            ImportError::Malformed(err) => write!(f, "malformed character document: {}", err),
        }
    }
}

impl std::error::Error for ImportError {}

#[derive(Debug)]
pub enum StoreError {
    NoSelection,
    UnknownCharacter(CharacterId),
    Storage(StorageError),
    Import(ImportError),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

impl From<ImportError> for StoreError {
    fn from(err: ImportError) -> Self {
        StoreError::Import(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NoSelection => write!(f, "no character is selected"),
            StoreError::UnknownCharacter(id) => write!(f, "no character with id {}", id),
            StoreError::Storage(err) => write!(f, "{}", err),
            StoreError::Import(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StoreError {}

/// Owns the canonical character list. All mutation funnels through here:
/// one character is selected at a time, every change is applied as a typed
/// patch, and the whole list is persisted after each mutation.
pub struct CharacterStore<S: CharacterStorage> {
    characters: Vec<Character>,
    selected: Option<CharacterId>,
    storage: S,
}

impl<S: CharacterStorage> CharacterStore<S> {
    /// Loads the saved list. A missing or empty list seeds the template
    /// character, so the store is never empty.
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut characters = storage.load_character_list()?;
        if characters.is_empty() {
            characters.push(seed::template_character());
        }
        for character in &mut characters {
            character.normalize();
        }
        Ok(Self {
            characters,
            selected: None,
            storage,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn select(&mut self, id: CharacterId) -> Result<(), StoreError> {
        if !self.characters.iter().any(|c| c.id == id) {
            return Err(StoreError::UnknownCharacter(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Character> {
        let id = self.selected?;
        self.characters.iter().find(|c| c.id == id)
    }

    fn selected_mut(&mut self) -> Option<&mut Character> {
        let id = self.selected?;
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Applies one update to the selected character and persists.
    pub fn update(&mut self, patch: CharacterPatch) -> Result<(), StoreError> {
        self.update_all(vec![patch])
    }

    /// Applies a batch of updates as one atomic mutation followed by one
    /// save. An empty batch changes nothing, including the storage.
    pub fn update_all(&mut self, patches: Vec<CharacterPatch>) -> Result<(), StoreError> {
        let character = self.selected_mut().ok_or(StoreError::NoSelection)?;
        if patches.is_empty() {
            return Ok(());
        }
        for patch in patches {
            character.apply(patch);
        }
        self.persist()
    }

    /// Appends a blank character and selects it.
    pub fn create_new(&mut self) -> Result<CharacterId, StoreError> {
        let character = seed::new_character();
        let id = character.id;
        self.characters.push(character);
        self.selected = Some(id);
        self.persist()?;
        info!(%id, "created new character");
        Ok(id)
    }

    /// Removes a character. Deleting the last one substitutes the template,
    /// so the list always holds at least one entry.
    pub fn delete(&mut self, id: CharacterId) -> Result<(), StoreError> {
        let before = self.characters.len();
        self.characters.retain(|c| c.id != id);
        if self.characters.len() == before {
            return Err(StoreError::UnknownCharacter(id));
        }
        if self.characters.is_empty() {
            self.characters.push(seed::template_character());
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.persist()?;
        info!(%id, "deleted character");
        Ok(())
    }

    /// Imports a serialized character document. The id is re-minted so an
    /// exported document can never collide with an existing entry, and the
    /// record is normalized before it joins the list.
    pub fn import(&mut self, document: &str) -> Result<CharacterId, StoreError> {
        let mut character: Character = serde_json::from_str(document).map_err(|err| {
            warn!(%err, "rejected character import");
            ImportError::Malformed(err)
        })?;
        if character.name.trim().is_empty() {
            warn!("rejected character import: no name");
            return Err(ImportError::MissingName.into());
        }
        character.id = Uuid::new_v4();
        character.normalize();

        let id = character.id;
        self.characters.push(character);
        self.persist()?;
        info!(%id, "imported character");
        Ok(id)
    }

    /// Serializes one character to a transportable document, the exact
    /// shape [`CharacterStore::import`] accepts.
    pub fn export(&self, id: CharacterId) -> Result<String, StoreError> {
        let character = self
            .characters
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::UnknownCharacter(id))?;
        serde_json::to_string_pretty(character).map_err(|err| StorageError::Corrupt(err).into())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.storage.save_character_list(&self.characters)?;
        Ok(())
    }
}
