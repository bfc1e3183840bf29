//! Panel workflows: listing, opening and AI generation.
//!
//! Each workflow holds the busy flag for its whole duration and releases it on
//! every exit path. Nothing here guards against a second workflow starting
//! while one is in flight; overlapping workflows keep the flag up until the
//! last one ends.

use crate::service::{DocumentGenerator, PanelHost, ProjectSource};
use crate::types::{Notice, SyncedProject};
use crate::Result;

const MAX_FILENAME_CHARS: usize = 48;
const FALLBACK_FILENAME: &str = "projet_ia";

/// Fetch all synced projects and keep those matching the current search term.
///
/// Failures are logged and the previous list is kept.
pub async fn load_projects<S, H>(source: &S, host: &mut H)
where
    S: ProjectSource + ?Sized,
    H: PanelHost,
{
    host.update_panel(|panel| panel.begin_busy());
    refresh_projects(source, host).await;
    host.update_panel(|panel| panel.end_busy());
}

/// Change the search term, then reload the list.
pub async fn search<S, H>(source: &S, host: &mut H, term: &str)
where
    S: ProjectSource + ?Sized,
    H: PanelHost,
{
    host.update_panel(|panel| panel.set_search_term(term));
    load_projects(source, host).await;
}

/// Download a project's document and hand it to the editor.
///
/// On failure the editor is left as it was and an [`Notice::OpenFailed`] is
/// raised.
pub async fn open_project<S, H>(source: &S, host: &mut H, project: &SyncedProject) -> Result<()>
where
    S: ProjectSource + ?Sized,
    H: PanelHost,
{
    host.update_panel(|panel| panel.begin_busy());

    let result = match source.fetch_document(&project.url).await {
        Ok(document) => host.load_document(document),
        Err(e) => Err(e),
    };

    host.update_panel(|panel| panel.end_busy());

    match &result {
        Ok(()) => tracing::info!("Project loaded: {}", project.filename),
        Err(e) => {
            tracing::error!("Failed to open project {}: {}", project.filename, e);
            host.notify(Notice::OpenFailed {
                filename: project.filename.clone(),
                detail: e.to_string(),
            });
        }
    }

    result
}

/// Generate a document from `prompt`, load it, save it, then refresh the list.
///
/// The prompt is passed through as is, empty or not.
pub async fn create_with_ai<S, G, H>(
    source: &S,
    generator: &G,
    host: &mut H,
    prompt: &str,
) -> Result<SyncedProject>
where
    S: ProjectSource + ?Sized,
    G: DocumentGenerator + ?Sized,
    H: PanelHost,
{
    host.update_panel(|panel| panel.begin_busy());
    tracing::info!("Generating project from prompt: {:?}", prompt);

    match generate_and_save(source, generator, host, prompt).await {
        Ok(project) => {
            refresh_projects(source, host).await;
            host.update_panel(|panel| {
                panel.close_modal();
                panel.end_busy();
            });
            tracing::info!("Generated project saved as {}", project.filename);
            host.notify(Notice::GenerationSucceeded {
                filename: project.filename.clone(),
            });
            Ok(project)
        }
        Err(e) => {
            tracing::error!("Project generation failed: {}", e);
            host.update_panel(|panel| panel.end_busy());
            host.notify(Notice::GenerationFailed {
                detail: e.to_string(),
            });
            Err(e)
        }
    }
}

/// Filename a generated project is saved under.
pub fn suggested_filename(prompt: &str) -> String {
    let mut stem = String::new();
    for c in prompt.chars() {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }

    let stem: String = stem
        .trim_end_matches('_')
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect();
    let stem = stem.trim_end_matches('_');

    if stem.is_empty() {
        format!("{}.json", FALLBACK_FILENAME)
    } else {
        format!("{}.json", stem)
    }
}

/// Reload the list without touching the busy flag.
async fn refresh_projects<S, H>(source: &S, host: &mut H)
where
    S: ProjectSource + ?Sized,
    H: PanelHost,
{
    let term = host.search_term();

    match source.list_projects().await {
        Ok(projects) => {
            tracing::debug!("Fetched {} synced projects", projects.len());
            host.update_panel(|panel| panel.apply_listing(&projects, &term));
        }
        Err(e) => tracing::error!("Failed to load synced projects: {}", e),
    }
}

async fn generate_and_save<S, G, H>(
    source: &S,
    generator: &G,
    host: &mut H,
    prompt: &str,
) -> Result<SyncedProject>
where
    S: ProjectSource + ?Sized,
    G: DocumentGenerator + ?Sized,
    H: PanelHost,
{
    let document = generator.generate_document(prompt).await?;
    host.load_document(document.clone())?;
    source
        .upload_project(&suggested_filename(prompt), &document)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PanelState;
    use crate::Error;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    fn project(id: &str, filename: &str) -> SyncedProject {
        SyncedProject {
            id: id.to_string(),
            filename: filename.to_string(),
            url: format!("http://files.local/{}.json", id),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
        }
    }

    /// Shared between the fakes so network calls can observe the busy flag.
    type SharedPanel = Arc<Mutex<PanelState>>;

    struct FakeSource {
        panel: SharedPanel,
        projects: Mutex<Vec<SyncedProject>>,
        documents: HashMap<String, Value>,
        fail_listing: Mutex<bool>,
        /// Held by the next listing until notified
        listing_gate: Mutex<Option<Arc<Notify>>>,
        uploads: Mutex<Vec<(String, Value)>>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeSource {
        fn new(panel: &SharedPanel, calls: &Arc<Mutex<Vec<String>>>) -> Self {
            Self {
                panel: panel.clone(),
                projects: Mutex::new(vec![
                    project("1", "Presentation_bac.json"),
                    project("2", "Maths.json"),
                ]),
                documents: HashMap::from([
                    ("http://files.local/1.json".to_string(), json!({ "pages": [1] })),
                    ("http://files.local/2.json".to_string(), json!("not an object")),
                ]),
                fail_listing: Mutex::new(false),
                listing_gate: Mutex::new(None),
                uploads: Mutex::new(Vec::new()),
                calls: calls.clone(),
            }
        }

        fn record(&self, call: &str) {
            assert!(self.panel.lock().unwrap().show_spinner, "{} ran while not busy", call);
            self.calls.lock().unwrap().push(call.to_string());
        }
    }

    #[async_trait]
    impl ProjectSource for FakeSource {
        async fn list_projects(&self) -> Result<Vec<SyncedProject>> {
            self.record("list");
            let gate = self.listing_gate.lock().unwrap().take();
            if let Some(gate) = gate {
                gate.notified().await;
            }
            if *self.fail_listing.lock().unwrap() {
                return Err(Error::Status {
                    status: 503,
                    url: "http://sync.local/synced-projects".to_string(),
                    body: String::new(),
                });
            }
            Ok(self.projects.lock().unwrap().clone())
        }

        async fn fetch_document(&self, url: &str) -> Result<Value> {
            self.record("fetch");
            self.documents.get(url).cloned().ok_or_else(|| Error::Status {
                status: 404,
                url: url.to_string(),
                body: String::new(),
            })
        }

        async fn upload_project(&self, filename: &str, document: &Value) -> Result<SyncedProject> {
            self.record("upload");
            self.uploads
                .lock()
                .unwrap()
                .push((filename.to_string(), document.clone()));
            let created = project("3", filename);
            self.projects.lock().unwrap().push(created.clone());
            Ok(created)
        }
    }

    struct FakeGenerator {
        panel: SharedPanel,
        prompts: Mutex<Vec<String>>,
        calls: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    #[async_trait]
    impl DocumentGenerator for FakeGenerator {
        async fn generate_document(&self, prompt: &str) -> Result<Value> {
            assert!(self.panel.lock().unwrap().show_spinner);
            self.calls.lock().unwrap().push("generate".to_string());
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(Error::Generation("500: model unavailable".to_string()));
            }
            Ok(json!({ "pages": [{ "id": "generated" }] }))
        }
    }

    struct RecordingHost {
        panel: SharedPanel,
        document: Option<Value>,
        notices: Vec<Notice>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl PanelHost for RecordingHost {
        fn update_panel(&mut self, f: impl FnOnce(&mut PanelState)) {
            let mut panel = self.panel.lock().unwrap();
            f(&mut *panel);
        }

        fn search_term(&mut self) -> String {
            self.panel.lock().unwrap().search_term.clone()
        }

        fn load_document(&mut self, document: Value) -> Result<()> {
            self.calls.lock().unwrap().push("load".to_string());
            if !document.is_object() {
                return Err(Error::InvalidDocument("expected a JSON object".to_string()));
            }
            self.document = Some(document);
            Ok(())
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    struct Fixture {
        source: FakeSource,
        generator: FakeGenerator,
        host: RecordingHost,
        calls: Arc<Mutex<Vec<String>>>,
    }

    fn fixture(generator_fails: bool) -> Fixture {
        let panel: SharedPanel = Arc::new(Mutex::new(PanelState::default()));
        let calls = Arc::new(Mutex::new(Vec::new()));
        Fixture {
            source: FakeSource::new(&panel, &calls),
            generator: FakeGenerator {
                panel: panel.clone(),
                prompts: Mutex::new(Vec::new()),
                calls: calls.clone(),
                fail: generator_fails,
            },
            host: RecordingHost {
                panel,
                document: None,
                notices: Vec::new(),
                calls: calls.clone(),
            },
            calls,
        }
    }

    impl RecordingHost {
        /// Second host over the same panel, as a concurrent UI task would hold
        fn share(&self) -> Self {
            Self {
                panel: self.panel.clone(),
                document: None,
                notices: Vec::new(),
                calls: self.calls.clone(),
            }
        }
    }

    fn panel(f: &Fixture) -> PanelState {
        f.host.panel.lock().unwrap().clone()
    }

    #[tokio::test]
    async fn test_load_projects_filters_and_clears_busy() {
        let mut f = fixture(false);
        f.host.update_panel(|p| p.set_search_term("BAC"));

        load_projects(&f.source, &mut f.host).await;

        let state = panel(&f);
        assert!(!state.show_spinner);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].filename, "Presentation_bac.json");
    }

    #[tokio::test]
    async fn test_listing_failure_keeps_previous_list() {
        let mut f = fixture(false);
        load_projects(&f.source, &mut f.host).await;
        assert_eq!(panel(&f).projects.len(), 2);

        *f.source.fail_listing.lock().unwrap() = true;
        search(&f.source, &mut f.host, "maths").await;

        let state = panel(&f);
        assert_eq!(state.search_term, "maths");
        assert_eq!(state.projects.len(), 2);
        assert!(!state.show_spinner);
        assert!(f.host.notices.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_searches_stay_busy_until_both_finish() {
        let mut f = fixture(false);
        let gate = Arc::new(Notify::new());
        *f.source.listing_gate.lock().unwrap() = Some(gate.clone());
        let mut other_host = f.host.share();

        // The first search parks inside its listing while the second completes
        let slow = search(&f.source, &mut f.host, "ba");
        let fast = async {
            search(&f.source, &mut other_host, "b").await;
            let busy_after_fast = other_host.panel.lock().unwrap().is_busy();
            gate.notify_one();
            busy_after_fast
        };
        let ((), busy_after_fast) = tokio::join!(slow, fast);

        assert!(busy_after_fast);
        assert!(!panel(&f).is_busy());
        assert_eq!(f.calls.lock().unwrap().as_slice(), ["list", "list"]);
    }

    #[tokio::test]
    async fn test_search_reloads_with_new_term() {
        let mut f = fixture(false);
        search(&f.source, &mut f.host, "math").await;

        let state = panel(&f);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].filename, "Maths.json");
        assert_eq!(f.calls.lock().unwrap().as_slice(), ["list"]);
    }

    #[tokio::test]
    async fn test_open_project_loads_document() {
        let mut f = fixture(false);
        let target = project("1", "Presentation_bac.json");

        open_project(&f.source, &mut f.host, &target).await.unwrap();

        assert_eq!(f.host.document, Some(json!({ "pages": [1] })));
        assert!(f.host.notices.is_empty());
        assert!(!panel(&f).show_spinner);
    }

    #[tokio::test]
    async fn test_open_unreachable_project_leaves_document_untouched() {
        let mut f = fixture(false);
        f.host.document = Some(json!({ "pages": ["current"] }));
        let target = project("404", "Missing.json");

        let result = open_project(&f.source, &mut f.host, &target).await;

        assert!(matches!(result, Err(Error::Status { status: 404, .. })));
        assert_eq!(f.host.document, Some(json!({ "pages": ["current"] })));
        assert!(matches!(
            f.host.notices.as_slice(),
            [Notice::OpenFailed { filename, .. }] if filename == "Missing.json"
        ));
        assert!(!panel(&f).show_spinner);
    }

    #[tokio::test]
    async fn test_open_rejected_document_raises_notice() {
        let mut f = fixture(false);
        let target = project("2", "Maths.json");

        let result = open_project(&f.source, &mut f.host, &target).await;

        assert!(matches!(result, Err(Error::InvalidDocument(_))));
        assert!(f.host.document.is_none());
        assert_eq!(f.host.notices.len(), 1);
    }

    #[tokio::test]
    async fn test_create_with_ai_runs_in_order_and_refreshes() {
        let mut f = fixture(false);
        f.host.update_panel(|p| p.open_modal());
        let prompt = "Fais une présentation sur le bac de Français";

        let created = create_with_ai(&f.source, &f.generator, &mut f.host, prompt)
            .await
            .unwrap();

        assert_eq!(
            f.calls.lock().unwrap().as_slice(),
            ["generate", "load", "upload", "list"]
        );
        assert_eq!(created.filename, "Fais_une_présentation_sur_le_bac_de_Français.json");

        let state = panel(&f);
        assert!(!state.is_modal_open);
        assert!(!state.show_spinner);
        assert!(state.projects.iter().any(|p| p.filename == created.filename));
        assert_eq!(f.host.document, Some(json!({ "pages": [{ "id": "generated" }] })));
        assert_eq!(
            f.host.notices,
            vec![Notice::GenerationSucceeded {
                filename: created.filename.clone()
            }]
        );

        let uploads = f.source.uploads.lock().unwrap();
        assert_eq!(uploads[0].1, json!({ "pages": [{ "id": "generated" }] }));
    }

    #[tokio::test]
    async fn test_create_with_ai_failure_keeps_list_and_modal() {
        let mut f = fixture(true);
        load_projects(&f.source, &mut f.host).await;
        f.host.update_panel(|p| p.open_modal());
        let before = panel(&f).projects;

        let result = create_with_ai(&f.source, &f.generator, &mut f.host, "Un quiz").await;

        assert!(matches!(result, Err(Error::Generation(_))));
        let state = panel(&f);
        assert_eq!(state.projects, before);
        assert!(state.is_modal_open);
        assert!(!state.show_spinner);
        assert!(f.source.uploads.lock().unwrap().is_empty());
        assert!(matches!(
            f.host.notices.as_slice(),
            [Notice::GenerationFailed { .. }]
        ));
    }

    #[tokio::test]
    async fn test_busy_taken_before_generation_outlives_it() {
        let mut f = fixture(false);
        f.host.update_panel(|p| p.begin_busy());

        create_with_ai(&f.source, &f.generator, &mut f.host, "Un quiz")
            .await
            .unwrap();

        assert!(panel(&f).is_busy());
        f.host.update_panel(|p| p.end_busy());
        assert!(!panel(&f).is_busy());
    }

    #[tokio::test]
    async fn test_empty_prompt_is_not_blocked() {
        let mut f = fixture(false);

        let created = create_with_ai(&f.source, &f.generator, &mut f.host, "")
            .await
            .unwrap();

        assert_eq!(f.generator.prompts.lock().unwrap().as_slice(), [String::new()]);
        assert_eq!(created.filename, "projet_ia.json");
    }

    #[tokio::test]
    async fn test_refresh_failure_after_generation_still_succeeds() {
        let mut f = fixture(false);
        *f.source.fail_listing.lock().unwrap() = true;

        let result = create_with_ai(&f.source, &f.generator, &mut f.host, "Un quiz").await;

        assert!(result.is_ok());
        assert!(panel(&f).projects.is_empty());
        assert!(matches!(
            f.host.notices.as_slice(),
            [Notice::GenerationSucceeded { .. }]
        ));
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("Un quiz !"), "Un_quiz.json");
        assert_eq!(suggested_filename("  --  "), "projet_ia.json");
        assert_eq!(suggested_filename("maths/2024"), "maths_2024.json");

        let long = "a".repeat(100);
        assert_eq!(suggested_filename(&long), format!("{}.json", "a".repeat(48)));
    }
}
