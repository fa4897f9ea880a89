//! Shared helpers for integration tests.
//!
//! Every test gets its own router and state, so item collections and growth
//! buffers never leak between tests.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use item_service::{api::create_router, config::Config, state::AppState};
use serde::Serialize;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;
use tower::ServiceExt;

pub type TestFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + 'a>>;

pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let state = AppState::new(config)?;
        Ok(Self {
            router: create_router(state),
        })
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        self.request_with_extra_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Bytes>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }

        let request = builder.body(body.map(Body::from).unwrap_or_else(Body::empty))?;
        let response = self.router.clone().oneshot(request).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, headers, bytes))
    }

    pub async fn get_json(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        let (status, _headers, body) = self.request(Method::GET, uri, None).await?;
        Ok((status, parse_json(&body)?))
    }

    /// POST an item and assert it was accepted.
    pub async fn create_item(&self, item: &Value) -> anyhow::Result<Value> {
        let (status, _headers, body) = self
            .request(Method::POST, "/items/", Some(to_json_body(item)?))
            .await?;
        assert_status(status, StatusCode::OK, "create item");
        parse_json(&body)
    }
}

/// Config tuned for fast tests: short tasks, tiny memory blocks, small CPU loop.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.workload.task_duration_ms = 100;
    config.workload.memory_block_mb = 1;
    config.workload.cpu_iterations = 1000;
    config
}

pub async fn with_test_app<F>(f: F) -> anyhow::Result<()>
where
    F: for<'a> FnOnce(&'a TestApp) -> TestFuture<'a>,
{
    with_test_app_with_config(|_| {}, f).await
}

pub async fn with_test_app_with_config<C, F>(configure: C, f: F) -> anyhow::Result<()>
where
    C: FnOnce(&mut Config),
    F: for<'a> FnOnce(&'a TestApp) -> TestFuture<'a>,
{
    let mut config = test_config();
    configure(&mut config);
    let app = TestApp::new(config)?;
    f(&app).await
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{}: expected status {}, got {}",
        context, expected, actual
    );
}

pub fn to_json_body<T: Serialize>(value: &T) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

pub fn parse_json(body: &[u8]) -> anyhow::Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

pub fn item(id: i64, name: &str, price: f64) -> Value {
    json!({ "id": id, "name": name, "description": null, "price": price })
}

/// Parse a `"<secs>초"` timing string into seconds.
pub fn parse_seconds(value: &Value) -> f64 {
    let text = value.as_str().expect("timing field should be a string");
    let secs = text
        .strip_suffix('초')
        .unwrap_or_else(|| panic!("timing '{}' lacks the 초 suffix", text));
    secs.parse()
        .unwrap_or_else(|_| panic!("timing '{}' is not a number", text))
}
