use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::str::FromStr;

use crate::error::UploadError;
use crate::oss::{AwsS3ObjectStoreConfig, ObjectAcl, ObjectUrlConfig};

/// 运行结果的输出形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// 输出对象 key（`object_keys`）
    #[default]
    Keys,
    /// 输出对象公网地址（`object_locations`）
    Urls,
}

impl FromStr for OutputMode {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "keys" | "key" => Ok(OutputMode::Keys),
            "urls" | "url" | "locations" => Ok(OutputMode::Urls),
            _ => Err(UploadError::Configuration(format!(
                "invalid output_mode: {} (expected keys or urls)",
                s
            ))),
        }
    }
}

/// 上传对象的访问权限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AclMode {
    /// 不发送 ACL，沿用存储桶默认权限
    #[default]
    None,
    Private,
    PublicRead,
}

impl AclMode {
    pub fn object_acl(&self) -> Option<ObjectAcl> {
        match self {
            AclMode::None => None,
            AclMode::Private => Some(ObjectAcl::Private),
            AclMode::PublicRead => Some(ObjectAcl::PublicRead),
        }
    }
}

impl FromStr for AclMode {
    type Err = UploadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "none" => Ok(AclMode::None),
            "private" => Ok(AclMode::Private),
            "public-read" => Ok(AclMode::PublicRead),
            _ => Err(UploadError::Configuration(format!(
                "invalid acl: {} (expected none, private or public-read)",
                s
            ))),
        }
    }
}

/// 上传配置
///
/// 加载完成后不再修改，显式传给各个组件。
#[derive(Deserialize, Serialize, SmartDefault, Clone, PartialEq, Eq, Validate)]
#[serde(default)]
pub struct UploadConfig {
    #[garde(length(min = 1))]
    pub aws_key_id: String,

    #[garde(length(min = 1))]
    pub aws_secret_access_key: String,

    #[garde(length(min = 1))]
    pub aws_bucket: String,

    /// 为空时客户端使用 `us-east-1`
    #[garde(skip)]
    pub region: String,

    /// 本地源目录，相对路径基于当前工作目录
    #[garde(length(min = 1))]
    pub source_dir: String,

    /// 目标前缀，`/` 表示生成随机前缀
    #[garde(skip)]
    pub destination_dir: String,

    /// 自定义端点，为空表示 AWS S3
    #[garde(skip)]
    pub endpoint: String,

    #[garde(skip)]
    #[default = false]
    pub use_path_style_requests: bool,

    #[garde(skip)]
    pub output_mode: OutputMode,

    #[garde(skip)]
    pub acl: AclMode,
}

impl UploadConfig {
    /// 校验必填项，所有缺失的输入一次性报告
    pub fn validate_required(&self) -> Result<(), UploadError> {
        if let Err(report) = self.validate() {
            let missing: Vec<String> = report.iter().map(|(path, _)| path.to_string()).collect();
            return Err(UploadError::Configuration(format!(
                "input required and not supplied: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// 去掉字符串字段首尾空白，纯空白的必填项随后按缺失处理
    pub fn trim_values(&mut self) {
        for value in [
            &mut self.aws_key_id,
            &mut self.aws_secret_access_key,
            &mut self.aws_bucket,
            &mut self.region,
            &mut self.source_dir,
            &mut self.destination_dir,
            &mut self.endpoint,
        ] {
            let trimmed = value.trim();
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        Some(self.endpoint.as_str()).filter(|e| !e.is_empty())
    }

    pub fn store_config(&self) -> AwsS3ObjectStoreConfig {
        AwsS3ObjectStoreConfig {
            bucket: self.aws_bucket.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint().map(str::to_string),
            force_path_style: self.use_path_style_requests,
            access_key_id: self.aws_key_id.clone(),
            secret_access_key: self.aws_secret_access_key.clone(),
        }
    }

    pub fn url_config(&self) -> ObjectUrlConfig<'_> {
        ObjectUrlConfig {
            bucket: &self.aws_bucket,
            region: &self.region,
            endpoint: self.endpoint(),
            force_path_style: self.use_path_style_requests,
        }
    }
}

impl std::fmt::Debug for UploadConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadConfig")
            .field("aws_key_id", &self.aws_key_id)
            .field("aws_secret_access_key", &"***")
            .field("aws_bucket", &self.aws_bucket)
            .field("region", &self.region)
            .field("source_dir", &self.source_dir)
            .field("destination_dir", &self.destination_dir)
            .field("endpoint", &self.endpoint)
            .field("use_path_style_requests", &self.use_path_style_requests)
            .field("output_mode", &self.output_mode)
            .field("acl", &self.acl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UploadConfig {
        UploadConfig {
            aws_key_id: "AKIDEXAMPLE".to_string(),
            aws_secret_access_key: "secret".to_string(),
            aws_bucket: "my-bucket".to_string(),
            source_dir: "dist".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = UploadConfig::default();
        assert_eq!(config.region, "");
        assert_eq!(config.destination_dir, "");
        assert!(config.endpoint().is_none());
        assert!(!config.use_path_style_requests);
        assert_eq!(config.output_mode, OutputMode::Keys);
        assert_eq!(config.acl, AclMode::None);
    }

    #[test]
    fn test_validate_required() {
        assert!(create_test_config().validate_required().is_ok());

        let config = UploadConfig {
            aws_key_id: String::new(),
            source_dir: String::new(),
            ..create_test_config()
        };
        let err = config.validate_required().unwrap_err();
        assert!(matches!(err, UploadError::Configuration(_)));
        let message = err.to_string();
        assert!(message.contains("aws_key_id"));
        assert!(message.contains("source_dir"));
        assert!(!message.contains("aws_bucket"));
    }

    #[test]
    fn test_trim_values() {
        let mut config = UploadConfig {
            aws_bucket: "   ".to_string(),
            region: " eu-west-1\n".to_string(),
            ..create_test_config()
        };
        config.trim_values();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.aws_bucket, "");

        let err = config.validate_required().unwrap_err();
        assert!(err.to_string().contains("aws_bucket"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", create_test_config());
        assert!(!debug.contains("secret\""));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!("keys".parse::<OutputMode>().unwrap(), OutputMode::Keys);
        assert_eq!("URLs".parse::<OutputMode>().unwrap(), OutputMode::Urls);
        assert!("paths".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_acl_mode_from_str() {
        assert_eq!("".parse::<AclMode>().unwrap(), AclMode::None);
        assert_eq!("public-read".parse::<AclMode>().unwrap(), AclMode::PublicRead);
        assert_eq!(AclMode::PublicRead.object_acl(), Some(ObjectAcl::PublicRead));
        assert_eq!(AclMode::None.object_acl(), None);
        assert!("public-write".parse::<AclMode>().is_err());
    }

    #[test]
    fn test_store_config() {
        let config = UploadConfig {
            endpoint: "http://127.0.0.1:9000".to_string(),
            use_path_style_requests: true,
            ..create_test_config()
        };
        let store_config = config.store_config();
        assert_eq!(store_config.bucket, "my-bucket");
        assert_eq!(store_config.endpoint.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(store_config.force_path_style);
        assert_eq!(store_config.access_key_id, "AKIDEXAMPLE");
    }

    #[test]
    fn test_deserialize_yaml() {
        let config: UploadConfig = serde_yaml::from_str(
            r#"
aws_bucket: site-bucket
source_dir: public
use_path_style_requests: true
output_mode: urls
acl: public-read
"#,
        )
        .unwrap();
        assert_eq!(config.aws_bucket, "site-bucket");
        assert_eq!(config.output_mode, OutputMode::Urls);
        assert_eq!(config.acl, AclMode::PublicRead);
        assert!(config.use_path_style_requests);
        assert_eq!(config.aws_key_id, "");
    }
}
