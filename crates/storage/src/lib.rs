//! Annotator Storage - 图片与标注的文件系统存储。
//!
//! 两个平级目录：图片目录保存原始图片字节，标注目录保存
//! 以图片基础名命名的 JSON 文件。

pub mod filesystem;

pub use filesystem::{
    FileSystemStore, ImageEntry, StoreError, UploadRequest, UploadedFile, empty_annotation,
};
