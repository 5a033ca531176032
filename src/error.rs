use thiserror::Error;

use crate::oss::ObjectStoreError;

/// 上传流程错误
///
/// 所有错误都是致命的：一旦出现，整次运行失败且不输出任何结果。
#[derive(Error, Debug)]
pub enum UploadError {
    /// 缺少必填输入或输入值非法，发生在任何 IO 之前
    #[error("configuration error: {0}")]
    Configuration(String),

    /// 源目录不存在、不可读或包含无法处理的文件名
    #[error("cannot enumerate {path}: {source}")]
    Enumeration {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 任意一个对象上传失败
    #[error("failed to upload {key}: {source}")]
    Upload {
        key: String,
        #[source]
        source: ObjectStoreError,
    },

    /// 写出运行结果失败
    #[error("cannot write outputs: {0}")]
    Output(#[from] std::io::Error),
}

impl UploadError {
    pub fn enumeration(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        UploadError::Enumeration {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
