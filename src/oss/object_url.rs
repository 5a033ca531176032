//! 对象公网访问地址
//!
//! 地址格式是各厂商的约定，这里只覆盖 AWS S3 和常见的 S3 兼容端点，
//! 生成的地址不做可达性校验。

use http::Uri;

/// 生成对象地址所需的存储信息
#[derive(Debug, Clone, Copy)]
pub struct ObjectUrlConfig<'a> {
    pub bucket: &'a str,
    pub region: &'a str,
    pub endpoint: Option<&'a str>,
    pub force_path_style: bool,
}

/// 计算对象的公网访问地址
///
/// - 自定义端点 + path-style: `{endpoint}/{bucket}/{key}`
/// - 自定义端点: `{scheme}://{bucket}.{host}/{key}`
/// - path-style: `https://s3.{region}.amazonaws.com/{bucket}/{key}`
/// - 默认: `https://{bucket}.s3.{region}.amazonaws.com/{key}`
pub fn object_url(config: &ObjectUrlConfig<'_>, key: &str) -> String {
    let encoded_key = encode_key(key);

    match config.endpoint.filter(|e| !e.is_empty()) {
        Some(endpoint) => {
            let endpoint = parse_endpoint(endpoint);
            if config.force_path_style {
                format!(
                    "{}://{}{}/{}/{}",
                    endpoint.scheme, endpoint.authority, endpoint.path, config.bucket, encoded_key
                )
            } else {
                format!(
                    "{}://{}.{}{}/{}",
                    endpoint.scheme, config.bucket, endpoint.authority, endpoint.path, encoded_key
                )
            }
        }
        None => {
            let host = if config.region.is_empty() {
                "s3.amazonaws.com".to_string()
            } else {
                format!("s3.{}.amazonaws.com", config.region)
            };
            if config.force_path_style {
                format!("https://{}/{}/{}", host, config.bucket, encoded_key)
            } else {
                format!("https://{}.{}/{}", config.bucket, host, encoded_key)
            }
        }
    }
}

/// 按段编码对象 key，保留分隔符 `/`
fn encode_key(key: &str) -> String {
    key.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

struct Endpoint {
    scheme: String,
    authority: String,
    /// 不带结尾 `/` 的路径前缀，可能为空
    path: String,
}

/// 解析端点，缺少 scheme 时按 https 处理
fn parse_endpoint(endpoint: &str) -> Endpoint {
    let endpoint = endpoint.trim().trim_end_matches('/');
    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    };

    match with_scheme.parse::<Uri>() {
        Ok(uri) if uri.authority().is_some() => Endpoint {
            scheme: uri.scheme_str().unwrap_or("https").to_string(),
            authority: uri
                .authority()
                .map(|a| a.as_str().to_string())
                .unwrap_or_default(),
            path: uri.path().trim_end_matches('/').to_string(),
        },
        // 无法解析时原样拼接
        _ => {
            let (scheme, rest) = with_scheme
                .split_once("://")
                .unwrap_or(("https", with_scheme.as_str()));
            Endpoint {
                scheme: scheme.to_string(),
                authority: rest.to_string(),
                path: String::new(),
            }
        }
    }
}
