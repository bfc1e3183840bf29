//! HTTP access to the sync and generation services
//!
//! The reqwest client needs a Tokio reactor while GPUI drives its own
//! executor, so every request is spawned onto a dedicated runtime.

use async_trait::async_trait;
use design_sync_core::{
    Config, DocumentGenerator, Error, ProjectSource, Result, SyncClient, SyncedProject,
};
use gpui::*;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Global API client state with Tokio runtime for HTTP operations
pub struct ApiState {
    pub client: SyncClient,
    /// Tokio runtime handle for HTTP operations
    pub runtime: Arc<Runtime>,
}

impl ApiState {
    fn new(config: &Config) -> anyhow::Result<Self> {
        let runtime = Runtime::new()?;

        // Create the reqwest client within the Tokio runtime context
        let client = runtime.block_on(async { SyncClient::from_config(config) });

        Ok(Self {
            client,
            runtime: Arc::new(runtime),
        })
    }

    /// Services bridged onto the Tokio runtime, usable from GPUI tasks
    pub fn services(&self) -> RuntimeServices {
        RuntimeServices {
            client: self.client.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl Global for ApiState {}

/// [`SyncClient`] whose requests run on the API runtime
#[derive(Clone)]
pub struct RuntimeServices {
    client: SyncClient,
    runtime: Arc<Runtime>,
}

impl RuntimeServices {
    async fn run<T, F>(&self, request: impl FnOnce(SyncClient) -> F) -> Result<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let task = request(self.client.clone());
        self.runtime
            .spawn(task)
            .await
            .map_err(|e| Error::Runtime(e.to_string()))?
    }
}

#[async_trait]
impl ProjectSource for RuntimeServices {
    async fn list_projects(&self) -> Result<Vec<SyncedProject>> {
        self.run(|client| async move { client.list().await }).await
    }

    async fn fetch_document(&self, url: &str) -> Result<Value> {
        let url = url.to_string();
        self.run(|client| async move { client.download(&url).await })
            .await
    }

    async fn upload_project(&self, filename: &str, document: &Value) -> Result<SyncedProject> {
        let filename = filename.to_string();
        let document = document.clone();
        self.run(|client| async move { client.upload(&filename, &document).await })
            .await
    }
}

#[async_trait]
impl DocumentGenerator for RuntimeServices {
    async fn generate_document(&self, prompt: &str) -> Result<Value> {
        let prompt = prompt.to_string();
        self.run(|client| async move { client.generate(&prompt).await })
            .await
    }
}

/// Initialize the API client
pub fn init(config: &Config, cx: &mut App) -> anyhow::Result<()> {
    cx.set_global(ApiState::new(config)?);
    tracing::debug!(
        "API client initialized for {} (generation: {})",
        config.sync_url,
        config.generation_url
    );
    Ok(())
}

/// Services for the panel workflows
pub fn services(cx: &App) -> RuntimeServices {
    cx.global::<ApiState>().services()
}
