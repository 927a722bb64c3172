//! amyarc-ar library - Archive Retrieval module
//!
//! Read-only HTTP service over a flat archive folder of conversation
//! analysis records (`amy_analysis_<id>.json`) and their audio clips.

use std::path::PathBuf;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod repository;
pub mod resolver;

pub use error::{ApiError, ApiResult};
use repository::AnalysisRepository;
use resolver::ArchiveFileResolver;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Analysis record discovery and retrieval
    pub repository: AnalysisRepository,
    /// Safe name-to-path resolution for audio clips
    pub resolver: ArchiveFileResolver,
}

impl AppState {
    /// Create application state rooted at the archive folder
    pub fn new(archive_folder: impl Into<PathBuf>) -> Self {
        let resolver = ArchiveFileResolver::new(archive_folder);
        Self {
            repository: AnalysisRepository::new(resolver.clone()),
            resolver,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/analyses", get(api::list_analyses))
        .route("/api/analysis/:id", get(api::get_analysis))
        .route("/api/audio/:filename", get(api::get_audio))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The review client is served from another origin
        .layer(CorsLayer::permissive())
}
