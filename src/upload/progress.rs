/// 上传进度回调
pub trait UploadProgress: Send + Sync {
    /// 开始上传前调用一次
    fn on_start(&self, total_files: usize, total_bytes: u64);
    /// 每个文件上传成功后调用
    fn on_file_complete(&self, key: &str, bytes: u64);
}
