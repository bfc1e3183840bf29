//! Main views of the design editor shell

pub mod canvas;
pub mod document;
pub mod projects;
