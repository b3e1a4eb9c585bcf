//! 统一的应用状态。

use std::sync::Arc;

use annotator_storage::FileSystemStore;

use crate::config::ServerConfig;

/// 统一的应用状态，包含所有路由共享的数据。
#[derive(Clone)]
pub struct AppState {
    /// 服务配置。
    pub config: Arc<ServerConfig>,
    /// 图片与标注存储。
    pub store: FileSystemStore,
}

impl AppState {
    /// 根据配置创建应用状态。
    pub fn new(config: ServerConfig) -> Self {
        let store = FileSystemStore::new(config.image_dir.clone(), config.annotation_dir.clone());
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
