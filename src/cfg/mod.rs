//! cfg 模块 - 上传配置
//!
//! 配置按 配置文件 < 命名输入 < 命令行 的顺序逐层覆盖，
//! 校验通过后得到不可变的 `UploadConfig`。

pub mod loader;
pub mod upload_config;

pub use loader::{default_config_path, load_config, parse_bool, ConfigLayer, INPUT_NAMES};
pub use upload_config::{AclMode, OutputMode, UploadConfig};
