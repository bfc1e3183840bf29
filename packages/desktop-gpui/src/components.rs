//! Reusable UI components for the design editor shell

pub mod busy_overlay;
pub mod sidebar;
pub mod text_input;
