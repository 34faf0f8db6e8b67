//! egui presentation layer for the chat widget.
//!
//! Panels read a [`state::UiState`] projection and report user intent back
//! as return values; they never talk to the controller directly.

pub mod state;
pub mod theme;
pub mod panels;
