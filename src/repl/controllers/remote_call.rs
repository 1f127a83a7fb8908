//! # Remote Call Controller
//!
//! Drives one endpoint's request lifecycle: `Idle -> Loading -> {Success, Failed}`.
//!
//! Failures never escape [`RemoteCallController::perform_call`]; they are
//! turned into the `error` message of the shared state. Cloned handles share
//! that state, so invocations fired from several handles race and whichever
//! settles last wins.

use crate::repl::models::RemoteCallState;
use crate::repl::services::{Endpoint, HttpService, RemoteCallError};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

type SharedState<T> = Arc<Mutex<RemoteCallState<T>>>;

/// Lifecycle state and trigger for one endpoint
pub struct RemoteCallController<E: Endpoint> {
    service: HttpService,
    state: SharedState<E::Response>,
    _endpoint: PhantomData<fn() -> E>,
}

impl<E: Endpoint> Clone for RemoteCallController<E> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            state: Arc::clone(&self.state),
            _endpoint: PhantomData,
        }
    }
}

impl<E: Endpoint> RemoteCallController<E> {
    pub fn new(service: HttpService) -> Self {
        Self {
            service,
            state: Arc::new(Mutex::new(RemoteCallState::new())),
            _endpoint: PhantomData,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RemoteCallState<E::Response> {
        lock(&self.state).clone()
    }

    pub fn data(&self) -> Option<E::Response> {
        lock(&self.state).data.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    /// Reset data and error; an in-flight call keeps `loading` set
    pub fn clear_data(&self) {
        lock(&self.state).clear();
        tracing::debug!("{} state cleared", E::PATH);
    }

    /// Override the error message from outside the call itself
    pub fn set_error(&self, error: Option<String>) {
        lock(&self.state).error = error;
    }

    /// Issue the call and record its outcome.
    ///
    /// Returns the parsed response on success and `None` on failure; the
    /// failure message is available through [`Self::error`].
    pub async fn perform_call(&self, request: E::Request) -> Option<E::Response> {
        lock(&self.state).start();
        let _loading = LoadingGuard {
            state: Arc::clone(&self.state),
        };
        tracing::debug!("{} call started", E::PATH);

        match self.execute(request).await {
            Ok(response) => {
                tracing::info!("{} call succeeded", E::PATH);
                lock(&self.state).succeed(response.clone());
                Some(response)
            }
            Err(error) => {
                tracing::error!("{} call failed: {}", E::PATH, error);
                lock(&self.state).fail(error.to_string());
                None
            }
        }
    }

    async fn execute(&self, request: E::Request) -> Result<E::Response, RemoteCallError> {
        let body = E::body(request)?;
        let text = self.service.post(E::PATH, body).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Clears `loading` when the call settles, or when its future is dropped
struct LoadingGuard<T> {
    state: SharedState<T>,
}

impl<T> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        lock(&self.state).loading = false;
    }
}

// State is only ever mutated by simple assignments, so a poisoned lock still
// holds consistent data.
fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::models::{AnalyzeRequest, AnalyzeResponse, CallPhase};
    use crate::repl::services::{Analyze, CONNECTIVITY_MESSAGE};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(substrate: &str, cost: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            substrate_concentration: substrate.to_string(),
            cost: cost.to_string(),
        }
    }

    fn controller(server: &MockServer) -> RemoteCallController<Analyze> {
        RemoteCallController::new(HttpService::new(server.uri()).unwrap())
    }

    fn unreachable_controller() -> RemoteCallController<Analyze> {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        RemoteCallController::new(HttpService::new(format!("http://{addr}")).unwrap())
    }

    #[test]
    fn new_controller_should_start_idle() {
        let controller = unreachable_controller();
        assert_eq!(controller.state(), RemoteCallState::new());
        assert_eq!(controller.state().phase(), CallPhase::Idle);
    }

    #[tokio::test]
    async fn perform_call_should_store_and_return_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze"))
            .and(body_json(json!({"substrate_concentration": "10", "cost": "50"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"velocity": 2.5, "efficiency": 0.8})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let controller = controller(&server);
        let expected = AnalyzeResponse {
            velocity: 2.5,
            efficiency: 0.8,
            status: None,
        };

        let returned = controller.perform_call(request("10", "50")).await;

        assert_eq!(returned, Some(expected.clone()));
        let state = controller.state();
        assert_eq!(state.data, Some(expected));
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn loading_should_be_true_only_while_call_is_in_flight() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"velocity": 2.5, "efficiency": 0.8}))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let controller = controller(&server);
        assert!(!controller.is_loading());

        let handle = controller.clone();
        let task = tokio::spawn(async move { handle.perform_call(request("1", "1")).await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(controller.is_loading());
        assert_eq!(controller.state().phase(), CallPhase::Loading);

        task.await.unwrap();
        assert!(!controller.is_loading());
        assert_eq!(controller.state().phase(), CallPhase::Success);
    }

    #[tokio::test]
    async fn unreachable_server_should_set_connectivity_message() {
        let controller = unreachable_controller();

        let returned = controller.perform_call(request("1", "1")).await;

        assert_eq!(returned, None);
        let state = controller.state();
        assert_eq!(state.error.as_deref(), Some(CONNECTIVITY_MESSAGE));
        assert_eq!(state.data, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn server_error_should_mention_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "Server logic failed", "message": "x"})),
            )
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.perform_call(request("1", "1")).await;

        let state = controller.state();
        assert!(state.error.as_deref().unwrap().contains("500"));
        assert_eq!(state.data, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn malformed_body_should_surface_parse_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.perform_call(request("1", "1")).await;

        let expected = serde_json::from_str::<AnalyzeResponse>("not json")
            .unwrap_err()
            .to_string();
        assert_eq!(controller.error(), Some(expected));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn wrong_shape_should_be_rejected_at_the_boundary() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.perform_call(request("1", "1")).await;

        assert!(controller.error().unwrap().contains("velocity"));
        assert_eq!(controller.data(), None);
    }

    #[tokio::test]
    async fn new_call_should_clear_previous_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"substrate_concentration": "bad", "cost": "1"})))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({"substrate_concentration": "5", "cost": "1"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"velocity": 50.0, "efficiency": 50.0})),
            )
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.perform_call(request("bad", "1")).await;
        assert_eq!(controller.error().as_deref(), Some("Server Error: 400"));

        controller.perform_call(request("5", "1")).await;
        assert_eq!(controller.error(), None);
        assert_eq!(controller.data().map(|d| d.velocity), Some(50.0));
    }

    #[tokio::test]
    async fn concurrent_calls_should_leave_last_settlement_visible() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({"substrate_concentration": "slow", "cost": "1"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"velocity": 1.0, "efficiency": 1.0}))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_json(json!({"substrate_concentration": "fast", "cost": "1"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"velocity": 2.0, "efficiency": 2.0})),
            )
            .mount(&server)
            .await;

        let controller = controller(&server);
        let slow = controller.clone();
        let fast = controller.clone();

        let slow_task = tokio::spawn(async move { slow.perform_call(request("slow", "1")).await });
        tokio::time::sleep(Duration::from_millis(50)).await;
        fast.perform_call(request("fast", "1")).await;
        assert_eq!(controller.data().map(|d| d.velocity), Some(2.0));

        slow_task.await.unwrap();
        assert_eq!(controller.data().map(|d| d.velocity), Some(1.0));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn clear_data_should_reset_data_and_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"velocity": 2.5, "efficiency": 0.8})),
            )
            .mount(&server)
            .await;

        let controller = controller(&server);
        controller.perform_call(request("1", "1")).await;
        controller.set_error(Some("second step failed".to_string()));

        controller.clear_data();

        assert_eq!(controller.state(), RemoteCallState::new());
    }

    #[test]
    fn set_error_should_override_message() {
        let controller = unreachable_controller();
        controller.set_error(Some("file missing".to_string()));
        assert_eq!(controller.state().phase(), CallPhase::Failed);

        controller.set_error(None);
        assert_eq!(controller.state().phase(), CallPhase::Idle);
    }
}
