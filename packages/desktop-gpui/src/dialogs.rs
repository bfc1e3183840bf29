//! Modal dialogs of the design editor shell

pub mod generate;
pub mod notice;
