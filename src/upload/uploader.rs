use futures::future::try_join_all;
use std::sync::Arc;

use crate::cfg::{OutputMode, UploadConfig};
use crate::error::UploadError;
use crate::oss::{object_url, ObjectStore, PutFileOptions};
use crate::upload::key::destination_prefix;
use crate::upload::progress::UploadProgress;
use crate::upload::result::RunResult;
use crate::upload::task::{plan_tasks, UploadTask};
use crate::upload::walker::{collect_files, resolve_source_dir};

/// 目录上传器
///
/// 每个文件发起一次上传请求，所有请求同时发出、整体等待，
/// 任意一个失败即返回该错误；已经开始的上传不会回滚。
pub struct Uploader<'a> {
    store: &'a dyn ObjectStore,
    config: &'a UploadConfig,
    progress: Option<Arc<dyn UploadProgress>>,
}

impl<'a> Uploader<'a> {
    pub fn new(store: &'a dyn ObjectStore, config: &'a UploadConfig) -> Self {
        Self {
            store,
            config,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: Arc<dyn UploadProgress>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// 上传 `source_dir` 下的全部文件
    pub async fn run(&self) -> Result<RunResult, UploadError> {
        self.config.validate_required()?;

        let prefix = destination_prefix(&self.config.destination_dir);

        let root = resolve_source_dir(&self.config.source_dir).await?;
        let files = collect_files(&root).await?;
        let tasks = plan_tasks(files, &prefix);

        let total_bytes: u64 = tasks.iter().map(|t| t.size).sum();
        tracing::debug!(
            "uploading {} files ({} bytes) from {} to bucket {}",
            tasks.len(),
            total_bytes,
            root.display(),
            self.config.aws_bucket
        );
        if let Some(progress) = &self.progress {
            progress.on_start(tasks.len(), total_bytes);
        }

        let keys = try_join_all(tasks.iter().map(|task| self.upload_one(task))).await?;

        let objects = match self.config.output_mode {
            OutputMode::Keys => keys,
            OutputMode::Urls => {
                let url_config = self.config.url_config();
                keys.iter().map(|key| object_url(&url_config, key)).collect()
            }
        };

        tracing::info!("object key prefix - {}", prefix);
        tracing::info!("uploaded objects - {}", objects.join(", "));

        Ok(RunResult {
            destination_prefix: prefix,
            output_mode: self.config.output_mode,
            objects,
            total_bytes,
        })
    }

    async fn upload_one(&self, task: &UploadTask) -> Result<String, UploadError> {
        let options = PutFileOptions {
            content_type: Some(task.content_type.clone()),
            acl: self.config.acl.object_acl(),
        };

        self.store
            .put_file(&task.key, &task.source_path, options)
            .await
            .map_err(|source| UploadError::Upload {
                key: task.key.clone(),
                source,
            })?;

        tracing::info!("uploaded - {}", task.key);
        if let Some(progress) = &self.progress {
            progress.on_file_complete(&task.key, task.size);
        }

        Ok(task.key.clone())
    }
}
