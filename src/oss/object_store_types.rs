use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// 对象访问权限（canned ACL）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectAcl {
    Private,
    PublicRead,
}

impl ObjectAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectAcl::Private => "private",
            ObjectAcl::PublicRead => "public-read",
        }
    }
}

impl std::fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 文件上传选项
#[derive(Debug, Clone, PartialEq, Eq, SmartDefault)]
pub struct PutFileOptions {
    /// Content-Type，None 时由服务端决定
    pub content_type: Option<String>,
    /// None 表示不发送 ACL，使用存储桶默认权限
    pub acl: Option<ObjectAcl>,
}
