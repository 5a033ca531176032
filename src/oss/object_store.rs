use async_trait::async_trait;
use std::path::Path;

use crate::oss::{ObjectStoreError, PutFileOptions};

/// 对象存储统一接口
///
/// 上传流程只依赖这一个接口，测试中可以用内存实现替换真实的存储。
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 上传本地文件，已存在的同名对象会被覆盖
    ///
    /// 文件内容以流的方式发送，不会整体读入内存。
    async fn put_file(
        &self,
        key: &str,
        local_path: &Path,
        options: PutFileOptions,
    ) -> Result<(), ObjectStoreError>;
}
