//! 图片 API 路由。
//!
//! 列表页、图片读取与上传。

use std::sync::Arc;

use annotator_api_types::{ImageListResponse, ImageSummary, ListQuery};
use annotator_core::UploadOutcome;
use annotator_storage::{UploadRequest, UploadedFile};
use axum::{
    Json, Router,
    body::Body,
    extract::{Multipart, Path, Query, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tracing::{debug, info};

use super::error::ApiError;
use super::state::AppState;
use crate::page;

/// 创建图片 API 路由。
pub fn create_image_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/image/{filename}", get(get_image))
        .route("/upload", post(upload))
        .route("/api/images", get(list_images))
}

/// 图片列表页面。
async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let images = state.store.list_images().await?;
    Ok(Html(page::render_index(&images, query.selected.as_deref())))
}

/// 以 JSON 形式列出图片。
async fn list_images(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ImageListResponse>, ApiError> {
    let images = state
        .store
        .list_images()
        .await?
        .into_iter()
        .map(|entry| ImageSummary {
            name: entry.name,
            size: entry.size,
            modified: entry.modified,
        })
        .collect();
    Ok(Json(ImageListResponse { images }))
}

/// 读取图片字节，内容类型按扩展名推断。
async fn get_image(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let path = state.store.resolve_image(&filename).await?;
    debug!(filename = %filename, "serving image");

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.map(Body::new)),
        Err(never) => match never {},
    }
}

/// 处理上传表单：`image` 文件与可选的 `annotation` 文件。
///
/// 未选择文件的表单项会以空文件名提交，按缺失处理。
async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut request = UploadRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().unwrap_or("").to_string();
        match name.as_str() {
            "image" if !file_name.is_empty() => {
                let bytes = field.bytes().await?;
                request.image = Some(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "annotation" if !file_name.is_empty() => {
                let bytes = field.bytes().await?;
                request.annotation = Some(bytes.to_vec());
            }
            _ => {} // 忽略其他字段
        }
    }

    let outcome = state.store.upload(request).await?;
    match &outcome {
        UploadOutcome::Uploaded {
            filename,
            annotation,
        } => info!(
            filename = %filename,
            with_annotation = annotation.is_some(),
            "upload stored"
        ),
        UploadOutcome::NoImage => info!("upload without image, nothing stored"),
    }

    Ok(redirect_to_index(&outcome))
}

fn redirect_to_index(outcome: &UploadOutcome) -> Response {
    // 清洗后的文件名只包含 URL 安全字符
    let location = match outcome.selected() {
        Some(filename) => format!("/?selected={filename}"),
        None => "/".to_string(),
    };
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
