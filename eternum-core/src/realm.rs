//! Realm directory: the user's catalog of realms and what they produce.
use serde::{Deserialize, Serialize};

use crate::constants::DONKEY_RESOURCE;
use crate::error::InputError;

/// A location in the game and the resources it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub id: i64,
    pub name: String,
    pub output: Vec<String>,
}

impl Realm {
    #[must_use]
    pub fn produces(&self, resource: &str) -> bool {
        self.output.iter().any(|r| r == resource)
    }

    /// Whether donkeys can be sent from this realm.
    #[must_use]
    pub fn is_carrier_source(&self) -> bool {
        self.produces(DONKEY_RESOURCE)
    }
}

/// The persisted realm catalog, kept in the order the user wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmDirectory {
    pub realms: Vec<Realm>,
}

impl RealmDirectory {
    #[must_use]
    pub const fn empty() -> Self {
        Self { realms: Vec::new() }
    }

    /// Parse a realm directory document.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MalformedRealmDirectory`] when the text is not a
    /// `{"realms": [...]}` document.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|e| InputError::MalformedRealmDirectory(e.to_string()))
    }

    /// Pretty-printed form shown in the directory editor.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{\"realms\": []}".to_string())
    }

    /// First realm with the given id.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Realm> {
        self.realms.iter().find(|realm| realm.id == id)
    }

    /// Realms that produce donkeys, in directory order.
    pub fn carrier_sources(&self) -> impl Iterator<Item = &Realm> {
        self.realms.iter().filter(|realm| realm.is_carrier_source())
    }

    #[must_use]
    pub fn first_carrier_source(&self) -> Option<&Realm> {
        self.carrier_sources().next()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }
}
