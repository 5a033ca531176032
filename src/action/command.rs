use std::io::Write;

/// 转义 workflow command 的消息部分
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// 转义 workflow command 的属性值
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// 错误注解 `::error::<message>`，不含换行
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// 打印错误注解
pub fn issue_error(message: &str) {
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", error_annotation(message));
    let _ = stdout.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
        assert_eq!(escape_data("a:b,c"), "a:b,c");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c%"), "a%3Ab%2Cc%25");
    }

    #[test]
    fn test_error_annotation() {
        assert_eq!(
            error_annotation("cannot enumerate /tmp/dist: 50% gone\nretry"),
            "::error::cannot enumerate /tmp/dist: 50%25 gone%0Aretry"
        );
    }
}
