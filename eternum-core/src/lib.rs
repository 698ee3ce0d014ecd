//! Eternum Resource Manager core
//!
//! Platform-agnostic logic for rewriting in-game resource transfer lists:
//! scaling amounts, deriving donkey shipments, and keeping the user's realm
//! directory. This crate has no UI or browser dependencies.

pub mod constants;
pub mod error;
pub mod form;
pub mod numbers;
pub mod realm;
pub mod selection;
pub mod store;
pub mod transfer;
pub mod transform;

// Re-export commonly used types
pub use constants::{
    CUSTOM_SELECTOR_VALUE, DONKEY_CAPACITY, DONKEY_RESOURCE, REALMS_DATA_EXAMPLE, REALMS_DATA_KEY,
};
pub use error::InputError;
pub use form::{Mode, ResourceForm};
pub use realm::{Realm, RealmDirectory};
pub use selection::{RealmSelection, SenderSelection};
pub use store::{KeyValueStore, MemoryStore, RealmDirectoryStore, StoreError};
pub use transfer::{TransferItem, TransferList};
pub use transform::{
    CarrierMode, derive_carriers, donkeys_for, multiply, parse_multiplier, parse_realm_id,
    run_multiply, run_send_donkeys,
};
