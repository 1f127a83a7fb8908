//! Shared helpers for the shell integration tests.

use bioline::{AppController, ErrorClearPolicy, HttpService, ScriptedLineSource};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestApp = AppController<ScriptedLineSource, Vec<u8>>;

/// Start a mock analysis server answering every endpoint successfully
pub async fn analysis_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"velocity": 2.5, "efficiency": 0.8})),
        )
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/stability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "Stable"})))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/upload_csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"s": 10.0, "c": 50.0, "eff": 1.3333}]
        })))
        .mount(&server)
        .await;

    server
}

/// Build an app against `base_url` that will replay `lines`
pub fn app(base_url: &str, lines: &[&str]) -> TestApp {
    AppController::with_io(
        HttpService::new(base_url).expect("http service"),
        ErrorClearPolicy::Scoped,
        ScriptedLineSource::new(lines.iter().map(|line| line.to_string())),
        Vec::new(),
    )
}

/// Base URL of a port nothing listens on
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn output(app: TestApp) -> String {
    String::from_utf8(app.into_output()).expect("utf-8 output")
}
