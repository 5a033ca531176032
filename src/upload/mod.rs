//! 目录上传
//!
//! 遍历源目录 -> 计算对象 key -> 并发上传 -> 汇总结果。

pub mod key;
pub mod progress;
pub mod result;
pub mod task;
pub mod uploader;
pub mod walker;

pub use key::{destination_prefix, object_key, random_id, RANDOM_PREFIX_MARKER};
pub use progress::UploadProgress;
pub use result::RunResult;
pub use task::{content_type_for, plan_tasks, UploadTask, DEFAULT_CONTENT_TYPE};
pub use uploader::Uploader;
pub use walker::{collect_files, resolve_source_dir, SourceFile};
