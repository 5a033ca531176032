/// 命名输入对应的环境变量名
///
/// 空格替换为 `_` 并转为大写，例如 `aws_key_id` -> `INPUT_AWS_KEY_ID`。
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// 读取命名输入，去除首尾空白，空值视为未设置
pub fn get_input(name: &str) -> Option<String> {
    std::env::var(input_env_name(name))
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
