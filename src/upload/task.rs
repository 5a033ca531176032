use std::path::{Path, PathBuf};

use crate::upload::key::object_key;
use crate::upload::walker::SourceFile;

/// 无法按扩展名识别时使用的 Content-Type
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// 单个文件的上传任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    pub source_path: PathBuf,
    pub key: String,
    pub content_type: String,
    pub size: u64,
}

impl UploadTask {
    pub fn new(file: SourceFile, prefix: &str) -> Self {
        Self {
            key: object_key(prefix, &file.relative),
            content_type: content_type_for(&file.path),
            source_path: file.path,
            size: file.size,
        }
    }
}

/// 按扩展名推断 Content-Type
pub fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

/// 为所有文件生成上传任务，保持输入顺序
pub fn plan_tasks(files: Vec<SourceFile>, prefix: &str) -> Vec<UploadTask> {
    files
        .into_iter()
        .map(|file| UploadTask::new(file, prefix))
        .collect()
}
