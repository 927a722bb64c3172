//! Analysis record endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use amyarc_common::model::SavedAnalysis;

use crate::error::ApiResult;
use crate::AppState;

/// GET /api/analyses
///
/// Returns every analysis record in the archive folder, one element per
/// `amy_analysis_*.json` file. One corrupt record fails the whole listing
/// with a 500; partial listings are never returned.
pub async fn list_analyses(State(state): State<AppState>) -> ApiResult<Json<Vec<SavedAnalysis>>> {
    let analyses = state.repository.list_all().await?;
    Ok(Json(analyses))
}

/// GET /api/analysis/:id
///
/// Returns the single validated record for `id`, 404 if no record file
/// exists, 500 if the file cannot be read or fails validation.
pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SavedAnalysis>> {
    let analysis = state.repository.get_by_id(&id).await?;
    Ok(Json(analysis))
}
