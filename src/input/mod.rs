//! Input adapters: receive window-system events and push them into the explorer
//! controller.

#[cfg(feature = "gui")]
pub mod gui;
