//! 标注 API 路由。

use std::sync::Arc;

use annotator_api_types::{SaveAnnotationRequest, SaveAnnotationResponse};
use annotator_core::AnnotationKey;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde_json::Value;

use super::error::ApiError;
use super::state::AppState;

/// 创建标注 API 路由。
pub fn create_annotation_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/load_annotation/{filename}", get(load_annotation))
        .route("/save", post(save_annotation))
}

/// 读取图片对应的标注，按基础名查找，忽略扩展名。
async fn load_annotation(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let key = AnnotationKey::from_filename(&filename)?;
    let annotation = state.store.load_annotation(&key).await?;
    Ok(Json(annotation))
}

/// 覆盖保存标注。
async fn save_annotation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SaveAnnotationRequest>,
) -> Result<Json<SaveAnnotationResponse>, ApiError> {
    let key = AnnotationKey::from_filename(&request.filename)?;
    state.store.save_annotation(&key, &request.annotation).await?;
    Ok(Json(SaveAnnotationResponse::success()))
}
