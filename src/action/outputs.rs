use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::action::command::{escape_data, escape_property};

/// 输出值：字符串原样输出，列表序列化为 JSON 数组
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputValue {
    String(String),
    List(Vec<String>),
}

impl OutputValue {
    fn render(&self) -> String {
        match self {
            OutputValue::String(s) => s.clone(),
            OutputValue::List(items) => {
                serde_json::to_string(items).unwrap_or_else(|_| String::from("[]"))
            }
        }
    }
}

impl From<&str> for OutputValue {
    fn from(value: &str) -> Self {
        OutputValue::String(value.to_string())
    }
}

impl From<String> for OutputValue {
    fn from(value: String) -> Self {
        OutputValue::String(value)
    }
}

impl From<Vec<String>> for OutputValue {
    fn from(value: Vec<String>) -> Self {
        OutputValue::List(value)
    }
}

/// 步骤输出目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutput {
    /// 追加写入输出文件（`GITHUB_OUTPUT`）
    File(PathBuf),
    /// 旧式 `::set-output` 命令，写到标准输出
    Stdout,
}

impl ActionOutput {
    /// 根据 `GITHUB_OUTPUT` 环境变量选择输出目标
    pub fn from_env() -> Self {
        match std::env::var("GITHUB_OUTPUT") {
            Ok(path) if !path.is_empty() => ActionOutput::File(PathBuf::from(path)),
            _ => ActionOutput::Stdout,
        }
    }

    /// 设置一个步骤输出
    pub fn set_output(&self, name: &str, value: impl Into<OutputValue>) -> io::Result<()> {
        let value = value.into().render();
        match self {
            ActionOutput::File(path) => {
                let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
                if name.contains(&delimiter) || value.contains(&delimiter) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("output {} contains the delimiter {}", name, delimiter),
                    ));
                }

                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                write!(
                    file,
                    "{name}<<{delimiter}\n{value}\n{delimiter}\n",
                    name = name,
                    delimiter = delimiter,
                    value = value
                )?;
                file.flush()
            }
            ActionOutput::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(
                    stdout,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(&value)
                )
            }
        }
    }
}
