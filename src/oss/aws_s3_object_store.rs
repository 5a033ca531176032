use aws_config::Region;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{RequestChecksumCalculation, ResponseChecksumValidation};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use async_trait::async_trait;
use garde::Validate;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::path::Path;

use crate::oss::{ObjectAcl, ObjectStore, ObjectStoreError, PutFileOptions};

/// 未配置区域时使用的默认区域
pub const DEFAULT_REGION: &str = "us-east-1";

/// S3 ObjectStore 配置
///
/// 只接受显式配置的访问密钥，不读取默认凭证链，
/// 避免 CI 环境中残留的凭证被意外使用。
#[derive(Deserialize, Serialize, SmartDefault, Clone, Validate)]
#[serde(default)]
pub struct AwsS3ObjectStoreConfig {
    /// 存储桶名称
    #[garde(length(min = 1))]
    pub bucket: String,

    /// 区域，为空时使用 `us-east-1`
    #[garde(skip)]
    pub region: String,

    /// 自定义端点（MinIO、Cloudflare R2、阿里云 OSS S3 兼容接口等）
    #[garde(skip)]
    pub endpoint: Option<String>,

    /// 是否使用 path-style URL（`{endpoint}/{bucket}/{key}`）
    #[garde(skip)]
    #[default = false]
    pub force_path_style: bool,

    /// Access Key ID
    #[garde(length(min = 1))]
    pub access_key_id: String,

    /// Secret Access Key
    #[garde(length(min = 1))]
    pub secret_access_key: String,
}

/// S3 ObjectStore 实现
pub struct AwsS3ObjectStore {
    client: Client,
    config: AwsS3ObjectStoreConfig,
}

impl AwsS3ObjectStore {
    /// 创建 S3 客户端
    pub async fn new(config: AwsS3ObjectStoreConfig) -> Result<Self, ObjectStoreError> {
        // 使用 garde 验证配置
        if let Err(errors) = config.validate() {
            return Err(ObjectStoreError::Configuration(format!("{}", errors)));
        }

        let client = Self::create_client(&config).await;
        Ok(Self { client, config })
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }

    async fn create_client(config: &AwsS3ObjectStoreConfig) -> Client {
        let region = if config.region.is_empty() {
            DEFAULT_REGION.to_string()
        } else {
            config.region.clone()
        };

        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "oss-upload",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region))
            .credentials_provider(credentials)
            .load()
            .await;

        // 多数 S3 兼容存储不支持默认开启的 CRC 校验头
        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
            .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
            .force_path_style(config.force_path_style);

        if let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.is_empty()) {
            builder = builder.endpoint_url(endpoint);
        }

        Client::from_conf(builder.build())
    }
}

fn canned_acl(acl: ObjectAcl) -> ObjectCannedAcl {
    match acl {
        ObjectAcl::Private => ObjectCannedAcl::Private,
        ObjectAcl::PublicRead => ObjectCannedAcl::PublicRead,
    }
}

#[async_trait]
impl ObjectStore for AwsS3ObjectStore {
    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        options: PutFileOptions,
    ) -> Result<(), ObjectStoreError> {
        // from_path 按需读取文件，请求结束（无论成功失败）后句柄随 body 一起释放
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| ObjectStoreError::Io(std::io::Error::other(e)))?;

        let mut request = self
            .client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .body(body);

        if let Some(ct) = &options.content_type {
            request = request.content_type(ct);
        }

        if let Some(acl) = options.acl {
            request = request.acl(canned_acl(acl));
        }

        request
            .send()
            .await
            .map_err(|e| ObjectStoreError::from_provider(e, "S3", "put_object"))?;

        Ok(())
    }
}
