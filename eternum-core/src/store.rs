//! Realm directory persistence over a platform key-value store.
use std::cell::RefCell;
use std::collections::HashMap;
use std::convert::Infallible;
use std::rc::Rc;

use thiserror::Error;

use crate::constants::REALMS_DATA_KEY;
use crate::error::InputError;
use crate::realm::RealmDirectory;

/// Trait for abstracting string key-value persistence.
/// Platform-specific implementations should provide this.
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Failures from [`RealmDirectoryStore::save`].
#[derive(Debug, Error)]
pub enum StoreError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("storage backend failed: {0}")]
    Backend(#[source] E),
}

impl<E> StoreError<E>
where
    E: std::error::Error + 'static,
{
    #[must_use]
    pub const fn input(&self) -> Option<&InputError> {
        match self {
            Self::Input(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

/// Owns the in-memory realm directory and writes every accepted edit
/// straight through to the backing store.
#[derive(Debug)]
pub struct RealmDirectoryStore<S>
where
    S: KeyValueStore,
{
    backend: S,
    directory: RealmDirectory,
}

impl<S> RealmDirectoryStore<S>
where
    S: KeyValueStore,
{
    /// Wrap a backend. The directory starts empty until [`Self::load`] runs.
    pub const fn new(backend: S) -> Self {
        Self {
            backend,
            directory: RealmDirectory::empty(),
        }
    }

    /// Read the persisted directory, falling back to an empty one when the
    /// entry is missing, unreadable, or malformed.
    pub fn load(&mut self) -> &RealmDirectory {
        self.directory = match self.backend.get(REALMS_DATA_KEY) {
            Ok(Some(text)) => RealmDirectory::parse(&text).unwrap_or_else(|err| {
                log::warn!("ignoring saved realms data: {err}");
                RealmDirectory::empty()
            }),
            Ok(None) => RealmDirectory::empty(),
            Err(err) => {
                log::warn!("could not read saved realms data: {err}");
                RealmDirectory::empty()
            }
        };
        &self.directory
    }

    /// Validate `text`, persist it verbatim, then adopt it as the current
    /// directory. Nothing changes when either step fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Input`] for a malformed document and
    /// [`StoreError::Backend`] when the write is rejected.
    pub fn save(&mut self, text: &str) -> Result<&RealmDirectory, StoreError<S::Error>> {
        let parsed = RealmDirectory::parse(text)?;
        self.backend
            .set(REALMS_DATA_KEY, text)
            .map_err(StoreError::Backend)?;
        self.directory = parsed;
        Ok(&self.directory)
    }

    #[must_use]
    pub const fn directory(&self) -> &RealmDirectory {
        &self.directory
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
