pub mod consent_gate;
pub mod conversation_view;
pub mod highlights_view;
pub mod home_view;
pub mod memory_view;
pub mod shared;
pub mod tab_bar;
pub mod upload_view;
