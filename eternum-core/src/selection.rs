//! Which realm donkeys are sent from, and the realm id field it drives.
use crate::constants::CUSTOM_SELECTOR_VALUE;
use crate::realm::RealmDirectory;

/// Current choice in the sending-realm selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RealmSelection {
    #[default]
    None,
    Realm(i64),
    Custom,
}

impl RealmSelection {
    /// Value written to the `<select>` element.
    #[must_use]
    pub fn selector_value(self) -> String {
        match self {
            Self::None => String::new(),
            Self::Realm(id) => id.to_string(),
            Self::Custom => CUSTOM_SELECTOR_VALUE.to_string(),
        }
    }

    /// Inverse of [`Self::selector_value`]; anything unrecognised clears the
    /// selection.
    #[must_use]
    pub fn from_selector_value(value: &str) -> Self {
        if value == CUSTOM_SELECTOR_VALUE {
            return Self::Custom;
        }
        value.trim().parse::<i64>().map_or(Self::None, Self::Realm)
    }
}

/// Selector state plus the realm id text it controls. The id is editable only
/// while [`RealmSelection::Custom`] is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderSelection {
    selection: RealmSelection,
    realm_id: String,
}

impl SenderSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selection(&self) -> RealmSelection {
        self.selection
    }

    #[must_use]
    pub fn realm_id(&self) -> &str {
        &self.realm_id
    }

    /// True when the realm id field is read-only.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        !matches!(self.selection, RealmSelection::Custom)
    }

    /// Apply a selector change. Choosing a realm overwrites the id field with
    /// that realm's id, discarding any custom entry. Entering custom mode keeps
    /// the current id as an editable starting point.
    pub fn select(&mut self, selection: RealmSelection) {
        self.selection = selection;
        match selection {
            RealmSelection::None => self.realm_id.clear(),
            RealmSelection::Realm(id) => self.realm_id = id.to_string(),
            RealmSelection::Custom => {}
        }
    }

    /// Edit the custom realm id. Ignored while the field is locked.
    pub fn set_custom_id(&mut self, text: &str) -> bool {
        if self.is_locked() {
            return false;
        }
        text.clone_into(&mut self.realm_id);
        true
    }

    /// Bring the selection in line with a freshly loaded or edited directory.
    ///
    /// A selected realm that no longer produces donkeys is dropped; with no
    /// selection, the first donkey-producing realm is picked. Custom entry is
    /// never overridden. Returns whether anything changed.
    pub fn reconcile(&mut self, directory: &RealmDirectory) -> bool {
        let before = self.clone();
        if let RealmSelection::Realm(id) = self.selection {
            let still_eligible = directory
                .find(id)
                .is_some_and(crate::realm::Realm::is_carrier_source);
            if !still_eligible {
                self.select(RealmSelection::None);
            }
        }
        if self.selection == RealmSelection::None
            && let Some(first) = directory.first_carrier_source()
        {
            self.select(RealmSelection::Realm(first.id));
        }
        *self != before
    }
}
