//! API 路由模块。
//!
//! 将图片与标注接口组装为完整的应用路由。

pub mod annotations;
pub mod assets;
pub mod error;
pub mod images;
pub mod state;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub use annotations::create_annotation_router;
pub use assets::create_asset_router;
pub use error::ApiError;
pub use images::create_image_router;
pub use state::AppState;

/// 创建完整的应用路由。
///
/// 请求体大小受 `max_upload_bytes` 限制，超出时由框架直接返回 413。
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .merge(create_image_router())
        .merge(create_annotation_router())
        .merge(create_asset_router())
        .nest_service("/static", static_files)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}
