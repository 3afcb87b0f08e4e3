//! 错误处理模块
//!
//! 定义客户端使用的错误类型，以及把 HTTP 状态码映射为错误的分类规则。

use thiserror::Error;

/// 错误类别
///
/// 与 [`LingvanexError::kind`] 一起使用，便于调用方按类别匹配，
/// 无需关心具体的枚举变体。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 本地配置不合法，与网络无关
    Configuration,
    /// 401
    Authentication,
    /// 429
    RateLimit,
    /// 其余 4xx
    InvalidRequest,
    /// 5xx、3xx 以及无法解析的成功响应
    Generic,
    /// 未拿到任何 HTTP 状态的传输层失败（连接、TLS、超时）
    Transport,
    /// 读写 TOML 配置文件失败
    ConfigFile,
}

/// 客户端错误类型
///
/// # 变体说明
///
/// * `Configuration` - 本地前置条件失败，例如缺少 API key
/// * `Api` - 由 HTTP 响应派生的错误，携带状态码和原始响应体
/// * `Transport` - reqwest 在收到响应前失败
/// * `Io` / `TomlParse` / `TomlSerialize` - 配置文件读写失败
#[derive(Debug, Error)]
pub enum LingvanexError {
    /// 配置错误
    #[error("{0}")]
    Configuration(String),

    /// API响应错误
    #[error("{message}")]
    Api {
        /// 错误类别，只会是 Authentication / RateLimit / InvalidRequest / Generic
        kind: ErrorKind,
        /// 错误消息
        message: String,
        /// HTTP 状态码
        status_code: u16,
        /// 未解析的原始响应体
        response_body: String,
    },

    /// HTTP请求错误
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LingvanexError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        LingvanexError::Configuration(message.into())
    }

    fn api(kind: ErrorKind, message: String, status_code: u16, response_body: String) -> Self {
        LingvanexError::Api {
            kind,
            message,
            status_code,
            response_body,
        }
    }

    /// 按状态码对非 2xx 响应分类。
    ///
    /// 调用方需保证 `status` 不在 200–299 范围内；成功响应的解析失败
    /// 由 [`LingvanexError::invalid_json`] 处理。
    pub fn from_status(status_code: u16, response_body: String) -> Self {
        match status_code {
            401 => Self::api(
                ErrorKind::Authentication,
                "Authentication failed".to_string(),
                status_code,
                response_body,
            ),
            429 => Self::api(
                ErrorKind::RateLimit,
                "Rate limit exceeded".to_string(),
                status_code,
                response_body,
            ),
            400..=499 => Self::api(
                ErrorKind::InvalidRequest,
                format!("Invalid request: {}", response_body),
                status_code,
                response_body,
            ),
            _ => Self::api(
                ErrorKind::Generic,
                format!("API error: {}", response_body),
                status_code,
                response_body,
            ),
        }
    }

    /// 成功状态码但响应体不是合法 JSON 对象
    pub fn invalid_json(status_code: u16, response_body: String, source: &serde_json::Error) -> Self {
        Self::api(
            ErrorKind::Generic,
            format!("Invalid JSON response: {}", source),
            status_code,
            response_body,
        )
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LingvanexError::Configuration(_) => ErrorKind::Configuration,
            LingvanexError::Api { kind, .. } => *kind,
            LingvanexError::Transport(_) => ErrorKind::Transport,
            LingvanexError::Io(_) | LingvanexError::TomlParse(_) | LingvanexError::TomlSerialize(_) => {
                ErrorKind::ConfigFile
            }
        }
    }

    /// HTTP 状态码，仅响应派生的错误才有
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LingvanexError::Api { status_code, .. } => Some(*status_code),
            LingvanexError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// 原始响应体，仅响应派生的错误才有
    pub fn response_body(&self) -> Option<&str> {
        match self {
            LingvanexError::Api { response_body, .. } => Some(response_body),
            _ => None,
        }
    }

    /// 是否为 API 响应派生的错误（包括 401/429/4xx 的细分类别）
    pub fn is_api_error(&self) -> bool {
        matches!(self, LingvanexError::Api { .. })
    }
}

/// 结果类型别名
///
/// # 示例
///
/// ```rust
/// use lingvanex::{Result, LingvanexError};
///
/// fn example_function() -> Result<String> {
///     Ok("Success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, LingvanexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = LingvanexError::from_status(401, "Unauthorized".to_string());
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.to_string(), "Authentication failed");
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.response_body(), Some("Unauthorized"));
    }

    #[test]
    fn too_many_requests_maps_to_rate_limit() {
        let err = LingvanexError::from_status(429, "slow down".to_string());
        assert_eq!(err.kind(), ErrorKind::RateLimit);
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn other_client_errors_are_invalid_requests() {
        for status in [400, 403, 404, 422, 499] {
            let err = LingvanexError::from_status(status, "Bad request".to_string());
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "status {}", status);
            assert_eq!(err.to_string(), "Invalid request: Bad request");
            assert_eq!(err.status_code(), Some(status));
        }
    }

    #[test]
    fn server_errors_and_redirects_are_generic() {
        for status in [301, 302, 500, 502, 503] {
            let err = LingvanexError::from_status(status, "boom".to_string());
            assert_eq!(err.kind(), ErrorKind::Generic, "status {}", status);
            assert_eq!(err.to_string(), "API error: boom");
            assert!(err.is_api_error());
        }
    }

    #[test]
    fn invalid_json_keeps_parser_message() {
        let body = "not valid json{".to_string();
        let parse_err = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        let err = LingvanexError::invalid_json(200, body.clone(), &parse_err);

        assert_eq!(err.kind(), ErrorKind::Generic);
        assert!(err.to_string().starts_with("Invalid JSON response: "));
        assert!(err.to_string().contains(&parse_err.to_string()));
        assert_eq!(err.response_body(), Some(body.as_str()));
    }

    #[test]
    fn configuration_errors_carry_no_response() {
        let err = LingvanexError::configuration("API key is required");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.status_code(), None);
        assert_eq!(err.response_body(), None);
        assert!(!err.is_api_error());
    }
}
