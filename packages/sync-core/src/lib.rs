//! Design Sync Core - synced projects panel logic for the design editor.
//!
//! This crate holds everything the projects side panel does that does not
//! depend on a widget toolkit:
//!
//! - **Listing**: fetch synced projects and filter them by filename
//! - **Opening**: download a project's document and load it into the editor
//! - **AI generation**: generate a document from a prompt, save it, refresh
//! - **Panel state**: the busy flag, modal, prompt and notices the UI renders
//!
//! # Example
//!
//! ```rust,no_run
//! use design_sync_core::{filter_projects, Config, SyncClient};
//!
//! # async fn run() -> design_sync_core::Result<()> {
//! let config = Config::load()?;
//! let client = SyncClient::from_config(&config);
//!
//! let projects = client.list().await?;
//! for project in filter_projects(&projects, "bac") {
//!     println!("{} ({})", project.filename, project.updated_at);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod filter;
pub mod service;
pub mod state;
pub mod types;
pub mod workflow;

pub use client::SyncClient;
pub use config::Config;
pub use filter::{filter_projects, matches_search};
pub use service::{DocumentGenerator, PanelHost, ProjectSource};
pub use state::PanelState;
pub use types::{Notice, SyncedProject, UploadRequest};
pub use workflow::{create_with_ai, load_projects, open_project, search, suggested_filename};

/// Error types for design-sync operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed: {status} {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Background task failed: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for design-sync operations.
pub type Result<T> = std::result::Result<T, Error>;
