#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use postboard_db::models::post::PostCollection;
use postboard_db::repositories::{PostRepo, VisitorRepo};
use postboard_db::{MemoryRecordStore, RecordStore};
use tower::ServiceExt;

use postboard_api::config::{PlatformInfo, ServerConfig, StoreConfig, DEFAULT_SUBMIT_SECRET};
use postboard_api::router::build_app_router;
use postboard_api::state::AppState;
use postboard_api::templates::Templates;

/// Build a test `ServerConfig` with safe defaults and no platform identity.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:8080".to_string()],
        request_timeout_secs: 30,
        submit_secret: DEFAULT_SUBMIT_SECRET.to_string(),
        template_dir: None,
        store: StoreConfig {
            database_url: None,
            namespace: "test".to_string(),
        },
        platform: PlatformInfo::default(),
    }
}

/// The full router plus a handle on the in-memory store behind it.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryRecordStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(test_config(), Templates::builtin())
    }

    pub fn with(config: ServerConfig, templates: Templates) -> Self {
        let store = Arc::new(MemoryRecordStore::new(config.store.namespace.clone()));
        let router = build_router(store.clone(), config, templates);
        Self { router, store }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        send(&self.router, Method::GET, uri, None).await
    }

    pub async fn submit(&self, fields: &[(&str, &str)]) -> Response<Body> {
        send(&self.router, Method::POST, "/submit", Some(encode_form(fields))).await
    }

    /// Stored visit total, or `None` before the first counted request.
    pub async fn visitor_total(&self) -> Option<i64> {
        VisitorRepo::get(self.store.as_ref())
            .await
            .unwrap()
            .map(|c| c.total)
    }

    pub async fn posts(&self) -> Option<PostCollection> {
        PostRepo::list(self.store.as_ref()).await.unwrap()
    }
}

/// Build the full application router around an arbitrary store, using the
/// same middleware stack as production.
pub fn build_router(
    store: Arc<dyn RecordStore>,
    config: ServerConfig,
    templates: Templates,
) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        templates: Arc::new(templates),
    };
    build_app_router(state, &config)
}

pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    form: Option<String>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match form {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn content_type(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap())
        .unwrap_or("")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap())
        .unwrap_or("")
}

/// `application/x-www-form-urlencoded` encoding of `fields`.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}
