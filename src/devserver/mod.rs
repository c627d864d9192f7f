//! Fixture API Server
//!
//! A read-only stand-in for the OctoFit REST API, built with Axum. It serves
//! in-memory collections so the client and CLI can run without a backend.
//!
//! # Endpoints
//!
//! - `GET /api/` - Index of collection URLs
//! - `GET /api/:resource/` - One collection, as a bare array or wrapped in a
//!   `{"count", "next", "previous", "results"}` page
//!
//! Each collection request is counted, and a collection can be told to fail
//! with a given status code.

mod error;
pub mod seed;

pub use error::DevServerError;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::DevServerConfig;
use crate::resources::ResourceKind;

/// Collections, injected failures and request counters
pub struct FixtureStore {
    collections: RwLock<HashMap<ResourceKind, Vec<Value>>>,
    failures: RwLock<HashMap<ResourceKind, u16>>,
    hits: HashMap<ResourceKind, AtomicUsize>,
    envelope: AtomicBool,
}

impl FixtureStore {
    /// Every collection present and empty
    pub fn empty(envelope: bool) -> Self {
        Self::with_collections(HashMap::new(), envelope)
    }

    /// Populated with [`seed::collections`]
    pub fn seeded(envelope: bool) -> Self {
        Self::with_collections(seed::collections(), envelope)
    }

    fn with_collections(collections: HashMap<ResourceKind, Vec<Value>>, envelope: bool) -> Self {
        Self {
            collections: RwLock::new(collections),
            failures: RwLock::new(HashMap::new()),
            hits: ResourceKind::ALL
                .iter()
                .map(|kind| (*kind, AtomicUsize::new(0)))
                .collect(),
            envelope: AtomicBool::new(envelope),
        }
    }

    /// Replace one collection
    pub async fn set_collection(&self, kind: ResourceKind, records: Vec<Value>) {
        self.collections.write().await.insert(kind, records);
    }

    pub async fn collection(&self, kind: ResourceKind) -> Vec<Value> {
        self.collections
            .read()
            .await
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Make every request for `kind` answer with `status`
    pub async fn fail(&self, kind: ResourceKind, status: u16) {
        self.failures.write().await.insert(kind, status);
    }

    pub async fn recover(&self, kind: ResourceKind) {
        self.failures.write().await.remove(&kind);
    }

    async fn failure(&self, kind: ResourceKind) -> Option<u16> {
        self.failures.read().await.get(&kind).copied()
    }

    pub fn set_envelope(&self, envelope: bool) {
        self.envelope.store(envelope, Ordering::SeqCst);
    }

    pub fn envelope(&self) -> bool {
        self.envelope.load(Ordering::SeqCst)
    }

    /// Requests received for `kind`, failed ones included
    pub fn hits(&self, kind: ResourceKind) -> usize {
        self.hits
            .get(&kind)
            .map(|count| count.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    fn record_hit(&self, kind: ResourceKind) {
        if let Some(count) = self.hits.get(&kind) {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Build the fixture router
pub fn build_router(store: Arc<FixtureStore>) -> Router {
    Router::new()
        .route("/api/", get(api_index))
        .route("/api/:resource/", get(list_collection))
        .route("/api/:resource", get(list_collection))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(store)
}

async fn api_index() -> Json<Value> {
    let index: Map<String, Value> = ResourceKind::ALL
        .iter()
        .map(|kind| (kind.noun().to_string(), Value::from(kind.endpoint())))
        .collect();
    Json(Value::Object(index))
}

async fn list_collection(
    State(store): State<Arc<FixtureStore>>,
    Path(resource): Path<String>,
) -> Result<Json<Value>, DevServerError> {
    let kind: ResourceKind = resource.parse().map_err(DevServerError::NotFound)?;
    store.record_hit(kind);

    if let Some(status) = store.failure(kind).await {
        return Err(DevServerError::Injected(status));
    }

    let records = store.collection(kind).await;
    tracing::debug!(resource = %kind, count = records.len(), "Serving collection");

    let body = if store.envelope() {
        json!({
            "count": records.len(),
            "next": null,
            "previous": null,
            "results": records,
        })
    } else {
        Value::Array(records)
    };

    Ok(Json(body))
}

/// A server running on a background task; aborted on drop
pub struct RunningServer {
    pub base_url: String,
    pub store: Arc<FixtureStore>,
    handle: JoinHandle<()>,
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve `store` on an ephemeral local port
pub async fn spawn(store: Arc<FixtureStore>) -> Result<RunningServer, DevServerError> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let router = build_router(Arc::clone(&store));

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("Fixture server stopped: {}", e);
        }
    });

    Ok(RunningServer {
        base_url: format!("http://{}", addr),
        store,
        handle,
    })
}

/// Start the fixture server and run until Ctrl+C or SIGTERM
pub async fn serve(store: Arc<FixtureStore>, config: &DevServerConfig) -> Result<(), DevServerError> {
    let router = build_router(store);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("OctoFit fixture API listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DevServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Fixture API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
