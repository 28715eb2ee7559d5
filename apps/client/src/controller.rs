//! View/state controller — owns the [`ViewState`] and runs the two async flows:
//! loading the record list, and upload-then-refresh.
//!
//! Flows are not coordinated. Overlapping calls each apply their result when
//! they finish, so the last response to arrive wins.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::gateway::Gateway;
use crate::models::SelectedFile;
use crate::render::{render, View};
use crate::state::ViewState;

pub const MISSING_FILE_ALERT: &str = "Please select a file first!";

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// No file was selected; nothing was sent.
    Rejected { alert: &'static str },
    /// The service answered and the list was re-fetched.
    Completed,
    /// The upload failed; the view is unchanged.
    Failed,
}

#[derive(Clone)]
pub struct Controller {
    gateway: Gateway,
    state: Arc<Mutex<ViewState>>,
}

impl Controller {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(ViewState::default())),
        }
    }

    /// Lock is never held across an `.await`.
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> ViewState {
        self.with_state(|s| s.clone())
    }

    pub fn view(&self) -> View {
        self.with_state(|s| render(s))
    }

    pub fn select_file(&self, file: SelectedFile) {
        info!("Selected {} ({} bytes)", file.name, file.bytes.len());
        self.with_state(|s| s.file = Some(file));
    }

    /// Initial load. Runs as its own task so it can overlap an upload.
    pub fn mount(&self) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.refresh_records().await })
    }

    /// Replaces the record list with a fresh fetch. On failure the current
    /// list stays on screen and the error is only logged.
    pub async fn refresh_records(&self) {
        info!("Fetching resumes from backend...");
        match self.gateway.fetch_records().await {
            Ok(records) => {
                info!("Resumes received: {}", records.len());
                self.with_state(|s| s.records = records);
            }
            Err(e) => error!("Error fetching resumes: {e}"),
        }
    }

    /// Uploads the selected file, shows the service's answer and re-fetches
    /// the list once.
    pub async fn upload(&self) -> UploadOutcome {
        let Some(file) = self.with_state(|s| s.file.clone()) else {
            return UploadOutcome::Rejected {
                alert: MISSING_FILE_ALERT,
            };
        };

        let value = match self.gateway.upload_file(&file).await {
            Ok(value) => value,
            Err(e) => {
                error!("Error uploading file: {e}");
                return UploadOutcome::Failed;
            }
        };

        let pretty = match serde_json::to_string_pretty(&value) {
            Ok(pretty) => pretty,
            Err(e) => {
                error!("Error formatting upload response: {e}");
                return UploadOutcome::Failed;
            }
        };
        self.with_state(|s| s.last_response = pretty);

        self.refresh_records().await;
        UploadOutcome::Completed
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::render::EMPTY_PLACEHOLDER;

    fn records_json(n: i64) -> Value {
        Value::Array(
            (1..=n)
                .map(|id| {
                    json!({
                        "id": id,
                        "name": format!("Candidate {id}"),
                        "email": "c@example.com",
                        "phone": "555-123-4567",
                        "education": "MIT",
                        "work_experience": "Acme",
                        "skills": "Rust"
                    })
                })
                .collect(),
        )
    }

    async fn mount_list(server: &MockServer, n: i64) {
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json(n)))
            .mount(server)
            .await;
    }

    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_upload_without_file_alerts_and_sends_nothing() {
        let server = MockServer::start().await;
        let controller = Controller::new(Gateway::new(server.uri()));

        let outcome = controller.upload().await;

        assert_eq!(
            outcome,
            UploadOutcome::Rejected {
                alert: "Please select a file first!"
            }
        );
        assert!(server.received_requests().await.unwrap().is_empty());
        assert_eq!(controller.snapshot(), ViewState::default());
    }

    #[tokio::test]
    async fn test_successful_upload_shows_pretty_response_and_refetches_once() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json(2)))
            .expect(1)
            .mount(&server)
            .await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.select_file(SelectedFile::new("resume.pdf", b"%PDF".to_vec()));
        let outcome = controller.upload().await;

        assert_eq!(outcome, UploadOutcome::Completed);
        let state = controller.snapshot();
        assert_eq!(state.last_response, "{\n  \"status\": \"ok\"\n}");
        assert_eq!(state.records.len(), 2);
        server.verify().await;
    }

    #[tokio::test]
    async fn test_pretty_response_keeps_server_key_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"message":"done","extracted_data":{"name":"Ada"}}"#)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&server)
            .await;
        mount_list(&server, 1).await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.select_file(SelectedFile::new("resume.pdf", vec![1]));
        controller.upload().await;

        assert_eq!(
            controller.snapshot().last_response,
            "{\n  \"message\": \"done\",\n  \"extracted_data\": {\n    \"name\": \"Ada\"\n  }\n}"
        );
    }

    #[tokio::test]
    async fn test_mount_renders_one_card_per_record() {
        let server = MockServer::start().await;
        mount_list(&server, 4).await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.mount().await.unwrap();

        let view = controller.view();
        assert_eq!(view.cards.len(), 4);
        assert_eq!(view.placeholder, None);
    }

    #[tokio::test]
    async fn test_mount_with_no_records_shows_placeholder() {
        let server = MockServer::start().await;
        mount_list(&server, 0).await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.mount().await.unwrap();

        let view = controller.view();
        assert!(view.cards.is_empty());
        assert_eq!(view.placeholder, Some(EMPTY_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_list() {
        let server = MockServer::start().await;
        mount_list(&server, 3).await;
        let controller = Controller::new(Gateway::new(server.uri()));
        controller.mount().await.unwrap();
        let before = controller.view();

        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        controller.refresh_records().await;

        assert_eq!(controller.view(), before);
        assert_eq!(controller.view().cards.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_list_body_keeps_previous_list() {
        let server = MockServer::start().await;
        mount_list(&server, 2).await;
        let controller = Controller::new(Gateway::new(server.uri()));
        controller.refresh_records().await;

        server.reset().await;
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": \"x\"}"))
            .mount(&server)
            .await;
        controller.refresh_records().await;

        assert_eq!(controller.snapshot().records.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_upload_leaves_state_unchanged() {
        let controller = Controller::new(Gateway::new(unreachable_url()));
        controller.select_file(SelectedFile::new("resume.pdf", vec![1]));
        let before = controller.snapshot();

        let outcome = controller.upload().await;

        assert_eq!(outcome, UploadOutcome::Failed);
        assert_eq!(controller.snapshot(), before);
    }

    #[tokio::test]
    async fn test_malformed_upload_body_fails_without_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>parsed!</html>"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json(1)))
            .expect(0)
            .mount(&server)
            .await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.select_file(SelectedFile::new("resume.pdf", vec![1]));
        let before = controller.snapshot();

        assert_eq!(controller.upload().await, UploadOutcome::Failed);
        assert_eq!(controller.snapshot(), before);
        assert!(controller.snapshot().last_response.is_empty());
        server.verify().await;
    }

    #[tokio::test]
    async fn test_upload_error_payload_is_displayed_and_list_refreshed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"error": {"code": "UNPROCESSABLE_ENTITY"}})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json(1)))
            .expect(1)
            .mount(&server)
            .await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.select_file(SelectedFile::new("notes.txt", vec![1]));

        assert_eq!(controller.upload().await, UploadOutcome::Completed);
        assert!(controller
            .snapshot()
            .last_response
            .contains("UNPROCESSABLE_ENTITY"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_selecting_a_file_replaces_previous_selection() {
        let controller = Controller::new(Gateway::new(unreachable_url()));
        controller.select_file(SelectedFile::new("a.pdf", vec![]));
        controller.select_file(SelectedFile::new("b.pdf", vec![]));
        assert_eq!(controller.view().selected_file.as_deref(), Some("b.pdf"));
    }

    #[tokio::test]
    async fn test_mount_and_upload_may_overlap() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
            .mount(&server)
            .await;
        mount_list(&server, 2).await;

        let controller = Controller::new(Gateway::new(server.uri()));
        controller.select_file(SelectedFile::new("resume.pdf", vec![1]));
        let initial_load = controller.mount();
        let outcome = controller.upload().await;
        initial_load.await.unwrap();

        assert_eq!(outcome, UploadOutcome::Completed);
        assert_eq!(controller.snapshot().records.len(), 2);
        let gets = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .filter(|r| r.method.as_str() == "GET")
            .count();
        assert_eq!(gets, 2);
    }
}
