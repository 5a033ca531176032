use rand::distributions::Alphanumeric;
use rand::Rng;

/// `destination_dir` 取该值时使用随机前缀
pub const RANDOM_PREFIX_MARKER: &str = "/";

/// 随机前缀长度
pub const RANDOM_PREFIX_LEN: usize = 10;

/// 计算本次运行的目标前缀
///
/// - `/`: 新生成的随机短 id
/// - 其他值（包括空）: 原样使用
pub fn destination_prefix(destination_dir: &str) -> String {
    if destination_dir == RANDOM_PREFIX_MARKER {
        random_id()
    } else {
        destination_dir.to_string()
    }
}

/// 生成随机短 id，字符集为 `[0-9A-Za-z]`
pub fn random_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_PREFIX_LEN)
        .map(char::from)
        .collect()
}

/// 拼接前缀和相对路径得到对象 key
///
/// 按 POSIX 路径规则拼接：`\` 统一为 `/`，去掉空段和 `.`，
/// `..` 回退上一段，前缀开头的 `/` 保留。
pub fn object_key(prefix: &str, relative: &str) -> String {
    let joined = if prefix.is_empty() {
        relative.replace('\\', "/")
    } else {
        format!("{}/{}", prefix, relative).replace('\\', "/")
    };

    let absolute = joined.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !absolute {
                    segments.push("..");
                }
            }
            s => segments.push(s),
        }
    }

    let body = segments.join("/");
    if absolute {
        format!("/{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_prefix() {
        assert_eq!(destination_prefix(""), "");
        assert_eq!(destination_prefix("docs"), "docs");
        assert_eq!(destination_prefix("builds/42/"), "builds/42/");
    }

    #[test]
    fn test_random_prefix() {
        let a = destination_prefix("/");
        let b = destination_prefix("/");
        assert_eq!(a.len(), RANDOM_PREFIX_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_object_key_without_prefix() {
        assert_eq!(object_key("", "a.txt"), "a.txt");
        assert_eq!(object_key("", "nested/b.txt"), "nested/b.txt");
    }

    #[test]
    fn test_object_key_with_prefix() {
        assert_eq!(object_key("docs", "a.txt"), "docs/a.txt");
        assert_eq!(object_key("docs/", "nested/b.txt"), "docs/nested/b.txt");
        assert_eq!(object_key("builds/42", "app.js"), "builds/42/app.js");
    }

    #[test]
    fn test_object_key_normalizes_separators() {
        assert_eq!(object_key("docs\\v1", "nested\\b.txt"), "docs/v1/nested/b.txt");
        assert_eq!(object_key("./docs//v1/", "./a.txt"), "docs/v1/a.txt");
    }

    #[test]
    fn test_object_key_parent_segments() {
        assert_eq!(object_key("docs/v1/..", "a.txt"), "docs/a.txt");
        assert_eq!(object_key("..", "a.txt"), "../a.txt");
        assert_eq!(object_key("/..", "a.txt"), "/a.txt");
    }

    #[test]
    fn test_object_key_keeps_leading_slash() {
        assert_eq!(object_key("/site", "index.html"), "/site/index.html");
    }
}
