pub mod donkey_panel;
pub mod mode_tabs;
pub mod multiply_panel;
pub mod realms_editor;
pub mod result_panel;
pub mod transfer_input;
