use std::fs;
use std::path::{Path, PathBuf};

use crate::cfg::{AclMode, OutputMode, UploadConfig};
use crate::error::UploadError;

/// 所有命名输入，与 CI 步骤的 `with:` 字段一一对应
pub const INPUT_NAMES: &[&str] = &[
    "aws_key_id",
    "aws_secret_access_key",
    "aws_bucket",
    "region",
    "source_dir",
    "destination_dir",
    "endpoint",
    "use_path_style_requests",
    "output_mode",
    "acl",
];

/// 一层配置覆盖，None 表示该层未设置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub aws_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub aws_bucket: Option<String>,
    pub region: Option<String>,
    pub source_dir: Option<String>,
    pub destination_dir: Option<String>,
    pub endpoint: Option<String>,
    pub use_path_style_requests: Option<bool>,
    pub output_mode: Option<OutputMode>,
    pub acl: Option<AclMode>,
}

impl ConfigLayer {
    /// 从命名输入构建
    ///
    /// `lookup` 返回 None 或空字符串都视为未设置。
    pub fn from_inputs<F>(lookup: F) -> Result<Self, UploadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Self {
            aws_key_id: get("aws_key_id"),
            aws_secret_access_key: get("aws_secret_access_key"),
            aws_bucket: get("aws_bucket"),
            region: get("region"),
            source_dir: get("source_dir"),
            destination_dir: get("destination_dir"),
            endpoint: get("endpoint"),
            use_path_style_requests: get("use_path_style_requests").map(|v| parse_bool(&v)),
            output_mode: get("output_mode").map(|v| v.parse()).transpose()?,
            acl: get("acl").map(|v| v.parse()).transpose()?,
        })
    }
}

/// 只有 "true"（不区分大小写）为真
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

impl UploadConfig {
    /// 用一层配置覆盖当前值
    pub fn merge(&mut self, layer: ConfigLayer) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut self.aws_key_id, layer.aws_key_id);
        set(&mut self.aws_secret_access_key, layer.aws_secret_access_key);
        set(&mut self.aws_bucket, layer.aws_bucket);
        set(&mut self.region, layer.region);
        set(&mut self.source_dir, layer.source_dir);
        set(&mut self.destination_dir, layer.destination_dir);
        set(&mut self.endpoint, layer.endpoint);
        set(&mut self.use_path_style_requests, layer.use_path_style_requests);
        set(&mut self.output_mode, layer.output_mode);
        set(&mut self.acl, layer.acl);
    }

    /// 从配置文件加载
    ///
    /// `.yaml`/`.yml` 按 YAML 解析，其余按 JSON5 解析；
    /// 内容中的 `${VAR}` 会替换为同名环境变量。
    pub fn from_file(path: &Path) -> Result<Self, UploadError> {
        let content = fs::read_to_string(path).map_err(|e| {
            UploadError::Configuration(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let content = expand_env_vars(&content);

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let result = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            json5::from_str(&content).map_err(|e| e.to_string())
        };

        let mut config: Self = result.map_err(|e| {
            UploadError::Configuration(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        config.trim_values();

        Ok(config)
    }
}

/// 默认配置文件路径 (~/.oss-upload/config.yaml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".oss-upload").join("config.yaml"))
}

/// 按 文件 < 命名输入 < 命令行 的优先级加载并校验配置
///
/// 显式指定的配置文件必须存在；未指定时默认路径存在才加载。
pub fn load_config(
    config_file: Option<&str>,
    inputs: ConfigLayer,
    overrides: ConfigLayer,
) -> Result<UploadConfig, UploadError> {
    let mut config = match config_file {
        Some(path) => {
            let path = PathBuf::from(shellexpand::tilde(path).to_string());
            UploadConfig::from_file(&path)?
        }
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => UploadConfig::from_file(&path)?,
            None => UploadConfig::default(),
        },
    };

    config.merge(inputs);
    config.merge(overrides);
    config.trim_values();
    config.validate_required()?;

    Ok(config)
}

/// 替换 `${VAR_NAME}` 形式的环境变量，未定义的保持原样
fn expand_env_vars(content: &str) -> String {
    let mut result = content.to_string();
    let re = match regex_lite::Regex::new(r"\$\{([^}]+)\}") {
        Ok(re) => re,
        Err(_) => return result,
    };

    for cap in re.captures_iter(content) {
        let var_name = &cap[1];
        let full_match = &cap[0];
        if let Ok(value) = std::env::var(var_name) {
            result = result.replace(full_match, &value);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::io::Write;

    fn inputs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_from_inputs() {
        let layer = ConfigLayer::from_inputs(inputs(&[
            ("aws_key_id", " AKID "),
            ("aws_bucket", "bucket"),
            ("region", ""),
            ("use_path_style_requests", "TRUE"),
            ("output_mode", "urls"),
        ]))
        .unwrap();

        assert_eq!(layer.aws_key_id.as_deref(), Some("AKID"));
        assert_eq!(layer.aws_bucket.as_deref(), Some("bucket"));
        assert_eq!(layer.region, None);
        assert_eq!(layer.use_path_style_requests, Some(true));
        assert_eq!(layer.output_mode, Some(OutputMode::Urls));
        assert_eq!(layer.acl, None);
    }

    #[test]
    fn test_from_inputs_invalid_acl() {
        let result = ConfigLayer::from_inputs(inputs(&[("acl", "world-writable")]));
        assert!(matches!(result, Err(UploadError::Configuration(_))));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true"));
        assert!(parse_bool("True"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool("1"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn test_merge_precedence() {
        let mut config = UploadConfig {
            aws_bucket: "from-file".to_string(),
            region: "eu-west-1".to_string(),
            ..Default::default()
        };
        config.merge(ConfigLayer {
            aws_bucket: Some("from-inputs".to_string()),
            ..Default::default()
        });
        config.merge(ConfigLayer {
            aws_bucket: Some("from-cli".to_string()),
            use_path_style_requests: Some(true),
            ..Default::default()
        });

        assert_eq!(config.aws_bucket, "from-cli");
        assert_eq!(config.region, "eu-west-1");
        assert!(config.use_path_style_requests);
    }

    #[test]
    fn test_load_config_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "aws_bucket: bucket\n").unwrap();

        let err = load_config(
            path.to_str(),
            ConfigLayer::default(),
            ConfigLayer::default(),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("aws_key_id"));
        assert!(message.contains("aws_secret_access_key"));
        assert!(message.contains("source_dir"));
    }

    #[test]
    fn test_load_config_blank_value_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "aws_key_id: ak\naws_secret_access_key: sk\naws_bucket: \"   \"\nsource_dir: \" dist \"\n",
        )
        .unwrap();

        let err = load_config(
            path.to_str(),
            ConfigLayer::default(),
            ConfigLayer::default(),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("aws_bucket"));
        assert!(!message.contains("source_dir"));

        let config = load_config(
            path.to_str(),
            ConfigLayer::default(),
            ConfigLayer {
                aws_bucket: Some("bucket".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(config.source_dir, "dist");
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config(
            Some("/nonexistent/oss-upload.yaml"),
            ConfigLayer::default(),
            ConfigLayer::default(),
        );
        assert!(matches!(result, Err(UploadError::Configuration(_))));
    }

    #[test]
    fn test_from_file_json5() {
        let mut file = tempfile::Builder::new().suffix(".json5").tempfile().unwrap();
        write!(
            file,
            r#"{{
                aws_key_id: "ak",
                aws_secret_access_key: "sk",
                aws_bucket: "bucket",
                source_dir: "dist",
                destination_dir: "/",
            }}"#
        )
        .unwrap();

        let config = UploadConfig::from_file(file.path()).unwrap();
        assert_eq!(config.destination_dir, "/");
        assert!(config.validate_required().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_file_expands_env_vars() {
        std::env::set_var("OSS_UPLOAD_TEST_SECRET", "expanded-secret");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");
        fs::write(
            &path,
            "aws_secret_access_key: ${OSS_UPLOAD_TEST_SECRET}\nregion: ${OSS_UPLOAD_UNDEFINED}\n",
        )
        .unwrap();

        let config = UploadConfig::from_file(&path).unwrap();
        assert_eq!(config.aws_secret_access_key, "expanded-secret");
        assert_eq!(config.region, "${OSS_UPLOAD_UNDEFINED}");

        std::env::remove_var("OSS_UPLOAD_TEST_SECRET");
    }

    #[test]
    fn test_input_names_cover_layer() {
        let pairs: Vec<(&str, &str)> = INPUT_NAMES
            .iter()
            .map(|name| match *name {
                "use_path_style_requests" => (*name, "true"),
                "output_mode" => (*name, "keys"),
                "acl" => (*name, "private"),
                _ => (*name, "value"),
            })
            .collect();
        let layer = ConfigLayer::from_inputs(inputs(&pairs)).unwrap();

        let mut config = UploadConfig::default();
        config.merge(layer);
        assert!(config.validate_required().is_ok());
        assert_eq!(config.acl, AclMode::Private);
    }
}
