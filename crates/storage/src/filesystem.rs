//! 文件系统存储模块。
//!
//! 提供图片列表、图片路径解析、图片写入以及标注读写能力。

use std::path::{Path, PathBuf};

use annotator_core::{
    AnnotationKey, DomainError, SanitizedFilename, UploadOutcome, is_single_component,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, info};

/// 存储错误类型。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("文件不存在: {0}")]
    NotFound(String),

    #[error("非法路径: {0}")]
    InvalidPath(String),

    #[error("标注不是合法的 JSON: {0}")]
    InvalidAnnotation(#[source] serde_json::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// 尚未保存过标注时返回的默认值。
pub fn empty_annotation() -> Value {
    json!({ "shapes": [] })
}

/// 图片目录中的一个条目。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// 文件名。
    pub name: String,
    /// 文件大小（字节）。
    pub size: u64,
    /// 修改时间（Unix 时间戳）。
    pub modified: Option<u64>,
}

/// 上传请求中的一个文件部分。
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 客户端提供的原始文件名，尚未清洗。
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 一次上传的全部内容。
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub image: Option<UploadedFile>,
    /// 标注文件内容，以图片基础名保存。
    pub annotation: Option<Vec<u8>>,
}

/// 基于本地目录的图片与标注存储。
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    image_dir: PathBuf,
    annotation_dir: PathBuf,
}

impl FileSystemStore {
    /// 创建新的存储实例，不会触碰文件系统。
    pub fn new(image_dir: impl Into<PathBuf>, annotation_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            annotation_dir: annotation_dir.into(),
        }
    }

    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    pub fn annotation_dir(&self) -> &Path {
        &self.annotation_dir
    }

    /// 确保图片目录与标注目录存在。
    pub async fn ensure_layout(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.image_dir).await?;
        tokio::fs::create_dir_all(&self.annotation_dir).await?;
        info!(
            image_dir = %self.image_dir.display(),
            annotation_dir = %self.annotation_dir.display(),
            "storage layout ready"
        );
        Ok(())
    }

    /// 列出图片目录中的普通文件，顺序即目录枚举顺序。
    pub async fn list_images(&self) -> Result<Vec<ImageEntry>> {
        let mut entries = tokio::fs::read_dir(&self.image_dir).await?;
        let mut images = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().to_string();
            // 跳过隐藏文件
            if name.starts_with('.') {
                continue;
            }

            let Ok(metadata) = tokio::fs::metadata(entry.path()).await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = metadata.modified().ok().and_then(|t| {
                t.duration_since(std::time::UNIX_EPOCH)
                    .ok()
                    .map(|d| d.as_secs())
            });

            images.push(ImageEntry {
                name,
                size: metadata.len(),
                modified,
            });
        }

        debug!(count = images.len(), "listed images");
        Ok(images)
    }

    /// 解析已存在图片的路径。
    ///
    /// 名称必须是单个普通路径分量，任何可能逃出图片目录的名称都会被拒绝，
    /// 且不会访问文件系统。
    pub async fn resolve_image(&self, name: &str) -> Result<PathBuf> {
        if !is_single_component(name) {
            return Err(StoreError::InvalidPath(name.to_string()));
        }

        let path = self.image_dir.join(name);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_file() => Ok(path),
            Ok(_) => Err(StoreError::NotFound(name.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    /// 写入图片，覆盖同名文件。
    pub async fn write_image(&self, name: &SanitizedFilename, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.image_dir.join(name.as_str());
        tokio::fs::write(&path, bytes).await?;
        info!(filename = %name, size = bytes.len(), "image stored");
        Ok(path)
    }

    fn annotation_path(&self, key: &AnnotationKey) -> PathBuf {
        self.annotation_dir.join(key.file_name())
    }

    /// 读取标注；不存在时返回 `{"shapes": []}`。
    ///
    /// 磁盘上的非法 JSON 视为读取失败。
    pub async fn load_annotation(&self, key: &AnnotationKey) -> Result<Value> {
        let path = self.annotation_path(key);
        let content = match tokio::fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key = %key, "no annotation stored, returning empty set");
                return Ok(empty_annotation());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        Ok(serde_json::from_slice(&content)?)
    }

    /// 序列化并覆盖保存标注。
    pub async fn save_annotation(&self, key: &AnnotationKey, annotation: &Value) -> Result<PathBuf> {
        let content = serde_json::to_vec(annotation)?;
        let path = self.annotation_path(key);
        tokio::fs::write(&path, &content).await?;
        info!(key = %key, size = content.len(), "annotation saved");
        Ok(path)
    }

    /// 原样写入上传的标注文件，内容必须是合法 JSON。
    pub async fn write_annotation_bytes(&self, key: &AnnotationKey, bytes: &[u8]) -> Result<PathBuf> {
        validate_annotation(bytes)?;
        self.write_validated_annotation(key, bytes).await
    }

    async fn write_validated_annotation(&self, key: &AnnotationKey, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.annotation_path(key);
        tokio::fs::write(&path, bytes).await?;
        info!(key = %key, size = bytes.len(), "annotation uploaded");
        Ok(path)
    }

    /// 处理一次上传：写入图片，若附带标注则覆盖同基础名的标注。
    ///
    /// 没有图片时什么都不写。标注在写入图片之前校验，校验失败时
    /// 图片也不会落盘。
    pub async fn upload(&self, request: UploadRequest) -> Result<UploadOutcome> {
        let Some(image) = request.image else {
            debug!("upload without image part ignored");
            return Ok(UploadOutcome::NoImage);
        };

        let filename = SanitizedFilename::new(&image.file_name)?;
        if filename.as_str() != image.file_name {
            debug!(original = %image.file_name, sanitized = %filename, "upload filename sanitized");
        }

        if let Some(annotation) = &request.annotation {
            validate_annotation(annotation)?;
        }

        self.write_image(&filename, &image.bytes).await?;

        let annotation = match request.annotation {
            Some(bytes) => {
                let key = AnnotationKey::from_sanitized(&filename);
                self.write_validated_annotation(&key, &bytes).await?;
                Some(key)
            }
            None => None,
        };

        Ok(UploadOutcome::uploaded(filename, annotation))
    }
}

fn validate_annotation(bytes: &[u8]) -> Result<()> {
    serde_json::from_slice::<serde::de::IgnoredAny>(bytes)
        .map(|_| ())
        .map_err(StoreError::InvalidAnnotation)
}
