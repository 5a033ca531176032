use std::io;

use crate::action::ActionOutput;
use crate::cfg::OutputMode;

/// 一次运行的结果，只在所有上传成功后产生
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub destination_prefix: String,
    pub output_mode: OutputMode,
    /// 对象 key 或公网地址，顺序与上传任务一致
    pub objects: Vec<String>,
    pub total_bytes: u64,
}

impl RunResult {
    /// 列表输出的名称
    pub fn objects_output_name(&self) -> &'static str {
        match self.output_mode {
            OutputMode::Keys => "object_keys",
            OutputMode::Urls => "object_locations",
        }
    }

    /// 写出步骤输出：`object_key` 为前缀，列表为 `object_keys` 或 `object_locations`
    pub fn write_outputs(&self, output: &ActionOutput) -> io::Result<()> {
        output.set_output("object_key", self.destination_prefix.as_str())?;
        output.set_output(self.objects_output_name(), self.objects.clone())?;
        Ok(())
    }
}
