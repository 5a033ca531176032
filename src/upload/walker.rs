use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::UploadError;

/// 源目录下的一个待上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 绝对路径
    pub path: PathBuf,
    /// 相对源目录的路径，分隔符统一为 `/`
    pub relative: String,
    pub size: u64,
}

/// 解析源目录为绝对路径
///
/// 相对路径基于当前工作目录；结果经过规范化，Windows 下不带 `\\?\` 前缀，
/// 保证遍历得到的路径都以它为前缀。
pub async fn resolve_source_dir(source_dir: &str) -> Result<PathBuf, UploadError> {
    let path = Path::new(source_dir);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| UploadError::enumeration(source_dir, e))?
            .join(path)
    };

    let canonical = tokio::fs::canonicalize(&joined)
        .await
        .map_err(|e| UploadError::enumeration(&joined, e))?;
    let root = dunce::simplified(&canonical).to_path_buf();

    let metadata = tokio::fs::metadata(&root)
        .await
        .map_err(|e| UploadError::enumeration(&root, e))?;
    if !metadata.is_dir() {
        return Err(UploadError::enumeration(
            &root,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    Ok(root)
}

/// 递归收集目录中的所有文件（不含目录本身）
///
/// 符号链接按目标处理：指向目录的会展开，指向自身祖先目录的不再展开，
/// 失效的链接视为枚举错误。返回顺序即遍历顺序，不保证有序。
pub async fn collect_files(root: &Path) -> Result<Vec<SourceFile>, UploadError> {
    let mut files = Vec::new();
    let mut ancestors = vec![canonical_dir(root).await?];
    collect_files_recursive(root, root, &mut ancestors, &mut files).await?;
    Ok(files)
}

async fn canonical_dir(path: &Path) -> Result<PathBuf, UploadError> {
    let canonical = tokio::fs::canonicalize(path)
        .await
        .map_err(|e| UploadError::enumeration(path, e))?;
    Ok(dunce::simplified(&canonical).to_path_buf())
}

/// `ancestors` 为当前目录链上各目录的规范路径，用于识别链接环
async fn collect_files_recursive(
    root: &Path,
    current_dir: &Path,
    ancestors: &mut Vec<PathBuf>,
    files: &mut Vec<SourceFile>,
) -> Result<(), UploadError> {
    let mut entries = tokio::fs::read_dir(current_dir)
        .await
        .map_err(|e| UploadError::enumeration(current_dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| UploadError::enumeration(current_dir, e))?
    {
        let path = entry.path();

        // metadata 会跟随符号链接，链接失效时返回 NotFound
        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|e| UploadError::enumeration(&path, e))?;

        if metadata.is_dir() {
            let canonical = canonical_dir(&path).await?;
            if ancestors.contains(&canonical) {
                tracing::warn!("skipping symlink cycle {}", path.display());
                continue;
            }

            ancestors.push(canonical);
            let result = Box::pin(collect_files_recursive(root, &path, ancestors, files)).await;
            ancestors.pop();
            result?;
        } else if metadata.is_file() {
            let relative = relative_path(root, &path)?;
            files.push(SourceFile {
                path,
                relative,
                size: metadata.len(),
            });
        }
    }

    Ok(())
}

/// 计算相对路径，按组件拼接为 `/` 分隔的字符串
///
/// 非 UTF-8 文件名无法作为对象 key，直接报错。
pub fn relative_path(root: &Path, path: &Path) -> Result<String, UploadError> {
    let relative = path.strip_prefix(root).map_err(|e| {
        UploadError::enumeration(path, io::Error::new(io::ErrorKind::InvalidInput, e))
    })?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => {
                let name = name.to_str().ok_or_else(|| {
                    UploadError::enumeration(
                        path,
                        io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
                    )
                })?;
                segments.push(name);
            }
            Component::CurDir => {}
            _ => {
                return Err(UploadError::enumeration(
                    path,
                    io::Error::new(io::ErrorKind::InvalidInput, "unexpected path component"),
                ))
            }
        }
    }

    Ok(segments.join("/"))
}
