//! 对象存储模块
//!
//! 提供统一的 `ObjectStore` 接口和基于 aws-sdk-s3 的实现，
//! 兼容 AWS S3 以及 MinIO、R2、阿里云 OSS 等 S3 兼容存储。

mod aws_s3_object_store;
mod error;
mod object_store;
mod object_store_types;
mod object_url;

pub use aws_s3_object_store::{AwsS3ObjectStore, AwsS3ObjectStoreConfig, DEFAULT_REGION};
pub use error::ObjectStoreError;
pub use object_store::ObjectStore;
pub use object_store_types::{ObjectAcl, PutFileOptions};
pub use object_url::{object_url, ObjectUrlConfig};
