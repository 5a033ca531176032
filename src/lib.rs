//! oss-upload - 把本地目录上传到对象存储的 CI 工具
//!
//! 递归上传源目录下的全部文件，对象 key 为目标前缀加上文件的相对路径，
//! 运行结束后把前缀和对象列表写回 CI 步骤输出。
//!
//! ## 模块
//!
//! - **cfg**: 上传配置（配置文件、命名输入、命令行逐层覆盖）
//! - **action**: CI 运行器协议（输入、输出、错误注解）
//! - **oss**: 对象存储接口及 S3 实现
//! - **upload**: 目录遍历、key 计算、并发上传

pub mod action;
pub mod cfg;
pub mod error;
pub mod oss;
pub mod upload;

// 重新导出主要的公共 API
pub use cfg::{load_config, AclMode, ConfigLayer, OutputMode, UploadConfig};
pub use error::UploadError;
pub use oss::{AwsS3ObjectStore, AwsS3ObjectStoreConfig, ObjectStore, ObjectStoreError};
pub use upload::{RunResult, UploadProgress, Uploader};
