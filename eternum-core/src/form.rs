//! Form state for one editing session.
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::realm::RealmDirectory;
use crate::selection::{RealmSelection, SenderSelection};
use crate::transfer::TransferList;
use crate::transform::{CarrierMode, run_multiply, run_send_donkeys};

/// Active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Multiply,
    SendDonkeys,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Multiply, Self::SendDonkeys];

    /// i18n key for the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Multiply => "modes.multiply",
            Self::SendDonkeys => "modes.send_donkeys",
        }
    }
}

/// Everything the form holds between actions. The last result survives
/// failed actions untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceForm {
    pub transfer_text: String,
    pub multiplier_text: String,
    pub mode: Mode,
    pub carrier_mode: CarrierMode,
    pub sender: SenderSelection,
    result: Option<TransferList>,
}

impl ResourceForm {
    /// Fresh form with the sender already reconciled against `directory`.
    #[must_use]
    pub fn for_directory(directory: &RealmDirectory) -> Self {
        let mut form = Self::default();
        form.sender.reconcile(directory);
        form
    }

    #[must_use]
    pub const fn result(&self) -> Option<&TransferList> {
        self.result.as_ref()
    }

    /// Pretty-printed result, ready for display or the clipboard.
    #[must_use]
    pub fn result_json(&self) -> Option<String> {
        self.result
            .as_ref()
            .and_then(|list| list.to_pretty_json().ok())
    }

    pub fn select_sender(&mut self, selection: RealmSelection) {
        self.sender.select(selection);
    }

    /// Scale the pasted transfers by the multiplier field.
    ///
    /// # Errors
    ///
    /// Returns the parse failure; the previous result is kept.
    pub fn multiply(&mut self) -> Result<&TransferList, InputError> {
        let out = run_multiply(&self.transfer_text, &self.multiplier_text)?;
        Ok(&*self.result.insert(out))
    }

    /// Derive donkey shipments from the selected realm.
    ///
    /// # Errors
    ///
    /// Returns the parse failure; the previous result is kept.
    pub fn send_donkeys(&mut self) -> Result<&TransferList, InputError> {
        let out = run_send_donkeys(
            &self.transfer_text,
            self.sender.realm_id(),
            self.carrier_mode,
        )?;
        Ok(&*self.result.insert(out))
    }

    /// Run the action for the active tab.
    ///
    /// # Errors
    ///
    /// Returns the parse failure; the previous result is kept.
    pub fn execute(&mut self) -> Result<&TransferList, InputError> {
        match self.mode {
            Mode::Multiply => self.multiply(),
            Mode::SendDonkeys => self.send_donkeys(),
        }
    }
}
