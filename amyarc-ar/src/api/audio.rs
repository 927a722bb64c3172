//! Audio clip serving

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /api/audio/:filename
///
/// Streams the raw bytes of one clip from the archive folder. The content
/// type is always `audio/mpeg`, matching what the capture pipeline writes;
/// the actual file extension is not inspected.
pub async fn get_audio(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> ApiResult<Response> {
    let path = state.resolver.resolve(&filename)?;
    if !state.resolver.exists(&path) {
        return Err(ApiError::NotFound(format!(
            "Audio file '{}' not found",
            filename
        )));
    }

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        ApiError::Retrieval(format!("Error retrieving audio file '{}': {}", filename, e))
    })?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], bytes).into_response())
}
