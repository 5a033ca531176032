//! CI 运行器协议
//!
//! 命名输入来自 `INPUT_<NAME>` 环境变量，输出写入 `GITHUB_OUTPUT` 指向的文件，
//! 错误以 workflow command 的形式打印到标准输出。

mod command;
mod inputs;
mod outputs;

pub use command::{error_annotation, escape_data, escape_property, issue_error};
pub use inputs::{get_input, input_env_name};
pub use outputs::{ActionOutput, OutputValue};
