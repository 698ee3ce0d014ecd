//! Fixed values shared by the transforms, the realm store, and the UI.

/// Local storage key holding the realm directory document.
pub const REALMS_DATA_KEY: &str = "eternum_realms_data";

/// Resource units a single donkey can carry.
pub const DONKEY_CAPACITY: u64 = 500;

/// Resource name for carrier transfers and carrier-producing realms.
pub const DONKEY_RESOURCE: &str = "Donkey";

/// Selector value for free-text realm id entry. Never a valid realm id.
pub const CUSTOM_SELECTOR_VALUE: &str = "custom";

/// How long the copy acknowledgement stays visible.
pub const COPY_ACK_MS: i32 = 2_000;

/// Example document shown next to the realm directory editor.
pub const REALMS_DATA_EXAMPLE: &str = r#"{
  "realms": [
    {
      "id": 4604,
      "name": "Ememurd",
      "output": ["Donkey", "Copper"]
    }
  ]
}"#;
