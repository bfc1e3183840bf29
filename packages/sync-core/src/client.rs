//! HTTP client for the sync and generation services

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::config::Config;
use crate::service::{DocumentGenerator, ProjectSource};
use crate::types::{SyncedProject, UploadRequest};
use crate::{Error, Result};

/// HTTP client for the synced projects backend and the generation service
#[derive(Debug, Clone)]
pub struct SyncClient {
    sync_url: String,
    generation_url: String,
    client: Client,
}

/// Error body returned by the generation service
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

impl SyncClient {
    /// Create a new client for the given service base URLs
    pub fn new(sync_url: &str, generation_url: &str) -> Self {
        Self {
            sync_url: sync_url.trim_end_matches('/').to_string(),
            generation_url: generation_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.sync_url, &config.generation_url)
    }

    pub fn sync_url(&self) -> &str {
        &self.sync_url
    }

    pub fn generation_url(&self) -> &str {
        &self.generation_url
    }

    // ========================================================================
    // Internal HTTP Methods
    // ========================================================================

    /// Send a request and decode a JSON body, failing on non-success status
    async fn send<T: DeserializeOwned>(request: RequestBuilder, url: &str) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        Self::send(self.client.get(url), url).await
    }

    // ========================================================================
    // Synced Projects API
    // ========================================================================

    /// List every synced project
    pub async fn list(&self) -> Result<Vec<SyncedProject>> {
        self.get(&format!("{}/synced-projects", self.sync_url)).await
    }

    /// Download a project document from its url
    pub async fn download(&self, url: &str) -> Result<Value> {
        self.get(url).await
    }

    /// Save a document as a new synced project
    pub async fn upload(&self, filename: &str, document: &Value) -> Result<SyncedProject> {
        let url = format!("{}/synced-projects", self.sync_url);
        let body = UploadRequest {
            filename: filename.to_string(),
            content: document.clone(),
        };
        Self::send(self.client.post(&url).json(&body), &url).await
    }

    // ========================================================================
    // Generation API
    // ========================================================================

    /// Ask the generation service for a document matching `prompt`
    pub async fn generate(&self, prompt: &str) -> Result<Value> {
        let url = format!("{}/generate-json-text", self.generation_url);
        let request = self
            .client
            .post(&url)
            .query(&[("client_request", prompt)]);

        match Self::send(request, &url).await {
            Err(Error::Status { status, body, .. }) => {
                let detail = serde_json::from_str::<ErrorDetail>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                Err(Error::Generation(format!("{}: {}", status, detail)))
            }
            other => other,
        }
    }
}

#[async_trait]
impl ProjectSource for SyncClient {
    async fn list_projects(&self) -> Result<Vec<SyncedProject>> {
        self.list().await
    }

    async fn fetch_document(&self, url: &str) -> Result<Value> {
        self.download(url).await
    }

    async fn upload_project(&self, filename: &str, document: &Value) -> Result<SyncedProject> {
        self.upload(filename, document).await
    }
}

#[async_trait]
impl DocumentGenerator for SyncClient {
    async fn generate_document(&self, prompt: &str) -> Result<Value> {
        self.generate(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    struct MockState {
        uploads: Arc<Mutex<Vec<UploadRequest>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    async fn list() -> Json<Value> {
        Json(json!([
            {
                "id": "1",
                "filename": "Presentation_bac.json",
                "url": "http://files.local/1.json",
                "updated_at": "2024-05-02T09:30:00Z"
            },
            {
                "id": "2",
                "filename": "Maths.json",
                "url": "http://files.local/2.json",
                "updated_at": "2024-05-03T10:00:00Z"
            }
        ]))
    }

    async fn document() -> Json<Value> {
        Json(json!({ "width": 1080, "height": 1080, "pages": [] }))
    }

    async fn missing() -> StatusCode {
        StatusCode::NOT_FOUND
    }

    async fn upload(
        State(state): State<MockState>,
        Json(request): Json<UploadRequest>,
    ) -> Json<Value> {
        let filename = request.filename.clone();
        state.uploads.lock().expect("uploads lock").push(request);
        Json(json!({
            "id": "3",
            "filename": filename,
            "url": "http://files.local/3.json",
            "updated_at": "2024-05-04T08:00:00Z"
        }))
    }

    async fn generate(
        State(state): State<MockState>,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        let prompt = params.get("client_request").cloned().unwrap_or_default();
        state.prompts.lock().expect("prompts lock").push(prompt.clone());
        if prompt == "boom" {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "model unavailable" })),
            );
        }
        (StatusCode::OK, Json(json!({ "pages": [{ "id": "p1", "children": [] }] })))
    }

    async fn spawn_mock_server() -> (String, MockState) {
        let state = MockState::default();
        let app = Router::new()
            .route("/synced-projects", get(list).post(upload))
            .route("/files/doc.json", get(document))
            .route("/files/missing.json", get(missing))
            .route("/generate-json-text", post(generate))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server listener");
        let address: SocketAddr = listener.local_addr().expect("mock listener local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("run mock server");
        });
        (format!("http://{address}"), state)
    }

    #[tokio::test]
    async fn test_list_projects() {
        let (base, _state) = spawn_mock_server().await;
        let client = SyncClient::new(&base, &base);

        let projects = client.list().await.unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].filename, "Presentation_bac.json");
        assert_eq!(projects[1].id, "2");
    }

    #[tokio::test]
    async fn test_download_document() {
        let (base, _state) = spawn_mock_server().await;
        let client = SyncClient::new(&base, &base);

        let document = client.download(&format!("{}/files/doc.json", base)).await.unwrap();
        assert_eq!(document["width"], 1080);
    }

    #[tokio::test]
    async fn test_download_non_success_status() {
        let (base, _state) = spawn_mock_server().await;
        let client = SyncClient::new(&base, &base);

        let result = client.download(&format!("{}/files/missing.json", base)).await;
        assert!(matches!(result, Err(Error::Status { status: 404, .. })));
    }

    #[tokio::test]
    async fn test_download_unreachable_host() {
        let client = SyncClient::new("http://127.0.0.1:9", "http://127.0.0.1:9");
        let result = client.download("http://127.0.0.1:9/doc.json").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_upload_project() {
        let (base, state) = spawn_mock_server().await;
        let client = SyncClient::new(&format!("{}/", base), &base);

        let document = json!({ "pages": [] });
        let project = client.upload("bac.json", &document).await.unwrap();
        assert_eq!(project.filename, "bac.json");

        let uploads = state.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].content, document);
    }

    #[tokio::test]
    async fn test_generate_passes_prompt_as_query() {
        let (base, state) = spawn_mock_server().await;
        let client = SyncClient::new(&base, &base);

        let document = client.generate("Fais une présentation").await.unwrap();
        assert!(document["pages"].is_array());
        assert_eq!(
            state.prompts.lock().unwrap().as_slice(),
            ["Fais une présentation".to_string()]
        );
    }

    #[tokio::test]
    async fn test_generate_failure_carries_detail() {
        let (base, _state) = spawn_mock_server().await;
        let client = SyncClient::new(&base, &base);

        match client.generate("boom").await {
            Err(Error::Generation(detail)) => assert!(detail.contains("model unavailable")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
