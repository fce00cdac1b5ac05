//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which owns a temporary media root, scans it into a
//! [`RouteRegistry`] and builds the full router around it. Requests are driven
//! through `tower::ServiceExt::oneshot`, so no socket is bound.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use media_proxy::registry::RouteRegistry;
use media_proxy::server::{create_router, AppContext};

pub struct TestHarness {
    pub media_root: TempDir,
    pub base_route: String,
}

impl TestHarness {
    /// Empty media root served under `/media`.
    pub fn new() -> Self {
        Self::with_base_route("/media")
    }

    pub fn with_base_route(base_route: &str) -> Self {
        Self {
            media_root: tempfile::tempdir().expect("failed to create media root"),
            base_route: base_route.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        self.media_root.path()
    }

    /// Write `data` to `relative` under the media root, creating parents.
    pub fn add_file(&self, relative: &str, data: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, data).unwrap();
        path
    }

    /// Scan the media root as it stands now.
    pub fn registry(&self) -> RouteRegistry {
        RouteRegistry::build(self.root(), self.base_route.clone()).expect("scan failed")
    }

    /// Scan and wrap the result in the application router.
    pub fn router(&self) -> Router {
        create_router(AppContext::new(self.registry()))
    }
}

/// Deterministic, position-dependent file content.
pub fn patterned_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub async fn get(app: Router, uri: &str, range: Option<&str>) -> Response<Body> {
    let mut request = Request::get(uri);
    if let Some(range) = range {
        request = request.header("range", range);
    }
    app.oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .map(|value| value.to_str().unwrap())
}
