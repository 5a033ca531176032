use aws_sdk_s3::error::ProvideErrorMetadata;
use thiserror::Error;

/// 对象存储统一错误类型
#[derive(Error, Debug)]
pub enum ObjectStoreError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{provider} {operation} failed: {message}")]
    Provider {
        provider: String,
        operation: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectStoreError {
    /// 从厂商 SDK 错误转换
    ///
    /// SDK 错误的 Display 只有 "service error" 之类的概述，
    /// 这里优先取服务端返回的 code 和 message。
    pub fn from_provider<E>(err: E, provider: &str, operation: &str) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    {
        let message = match (err.code(), err.message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None) => code.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => err.to_string(),
        };

        ObjectStoreError::Provider {
            provider: provider.to_string(),
            operation: operation.to_string(),
            message,
            source: Some(Box::new(err)),
        }
    }
}
