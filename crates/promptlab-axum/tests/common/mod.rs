//! Shared fixtures for router tests: fake ports and request helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use promptlab_axum::{AxumContext, CorsConfig, create_router};
use promptlab_core::{
    CatalogError, CompletionPort, FanOutExecutor, ModelCatalogPort, ModelListing, ModelOutcome,
};
use promptlab_store::{StoreConfig, StoreFactory, TemplateCatalog};
use serde_json::Value;
use tempfile::TempDir;

/// Completion fake: `m/a` answers "Hi!" with 3/2 tokens, every other model
/// is rate limited.
pub struct ScriptedCompletion {
    configured: bool,
    calls: AtomicUsize,
}

impl ScriptedCompletion {
    pub fn new(configured: bool) -> Self {
        Self {
            configured,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionPort for ScriptedCompletion {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn invoke(&self, model: &str, _prompt: &str, _max_output_tokens: u32) -> ModelOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match model {
            "m/a" => ModelOutcome::completed(model, "Hi!", 3, 2),
            _ => ModelOutcome::failed(model, "HTTP 429: Rate limit exceeded"),
        }
    }
}

/// Catalog fake that either lists fixed models or fails upstream.
pub struct FixedCatalog {
    pub fail: bool,
}

#[async_trait]
impl ModelCatalogPort for FixedCatalog {
    async fn list_models(&self) -> Result<Vec<ModelListing>, CatalogError> {
        if self.fail {
            return Err(CatalogError::Status { status: 503 });
        }
        Ok(vec![ModelListing {
            id: "m/a".to_string(),
            context_length: 8192,
            pricing: serde_json::json!({"prompt": "0"}),
        }])
    }
}

/// A router over fakes with file stores in a temp dir.
pub struct TestApp {
    pub router: Router,
    pub completion: Arc<ScriptedCompletion>,
    pub data_dir: TempDir,
}

impl TestApp {
    pub fn new(configured: bool) -> Self {
        Self::build(configured, false)
    }

    pub fn with_failing_catalog() -> Self {
        Self::build(true, true)
    }

    fn build(configured: bool, catalog_fails: bool) -> Self {
        let data_dir = tempfile::tempdir().unwrap();
        let templates_dir = data_dir.path().join("templates");
        std::fs::create_dir_all(&templates_dir).unwrap();
        std::fs::write(
            templates_dir.join("greeting.yaml"),
            "name: Greeting\ndescription: Say hello\ntemplate: Say hi to {name}\n",
        )
        .unwrap();

        let completion = Arc::new(ScriptedCompletion::new(configured));
        let executor = FanOutExecutor::new(completion.clone());
        let stores =
            StoreFactory::build_stores(&StoreConfig::file(data_dir.path().join("data"))).unwrap();
        let ctx = AxumContext::new(
            executor,
            Arc::new(FixedCatalog {
                fail: catalog_fails,
            }),
            stores,
            TemplateCatalog::new(templates_dir),
        );

        Self {
            router: create_router(ctx, &CorsConfig::AllowAll),
            completion,
            data_dir,
        }
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Payloads of every `data:` frame in an SSE body.
pub fn sse_events(body: &str) -> Vec<Value> {
    body.lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|data| serde_json::from_str(data.trim_start()).unwrap())
        .collect()
}
