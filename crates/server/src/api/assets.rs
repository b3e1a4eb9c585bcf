//! 内置前端资源。

use std::sync::Arc;

use axum::{
    Router,
    http::header,
    response::IntoResponse,
    routing::get,
};

use super::state::AppState;

/// 标注编辑器脚本，随二进制一起发布。
pub const ANNOTATION_SCRIPT: &str = include_str!("../../static/js/annotation.js");
pub const ANNOTATION_SCRIPT_PATH: &str = "/assets/js/annotation.js";

/// 创建内置资源路由。
pub fn create_asset_router() -> Router<Arc<AppState>> {
    Router::new().route(ANNOTATION_SCRIPT_PATH, get(annotation_script))
}

async fn annotation_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        ANNOTATION_SCRIPT,
    )
}
