//! 客户端核心模块
//!
//! 构建请求、附加认证头、通过TLS发送，并把HTTP响应分类为成功结果或类型化错误。
//! 每次调用恰好发送一个请求，不重试。

use crate::config::Configuration;
use crate::error::{LingvanexError, Result};
use crate::types::{ApiResult, TranslateOptions, TranslateRequest, TranslationText, DEFAULT_LANGUAGE_CODE};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{redirect, tls, Method, RequestBuilder};
use std::time::Duration;
use tracing::debug;

/// Lingvanex API 客户端
///
/// 构造后不可变，可以 `clone` 后在多个任务中并发使用。
///
/// # 示例
///
/// ```rust,no_run
/// use lingvanex::{Client, TranslateOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::with_config(Some("my-api-key".to_string()), |config| {
///         config.timeout_secs = 60;
///     })?;
///
///     let result = client
///         .translate("Hello world", "es_ES", TranslateOptions::new().from("en_GB"))
///         .await?;
///     println!("{}", result["result"]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// HTTP客户端，用于API调用
    http: reqwest::Client,
    config: Configuration,
}

impl Client {
    /// 使用 API key 和默认配置创建客户端
    ///
    /// # 返回
    ///
    /// * `Err(LingvanexError::Configuration)` - API key 为空
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(Some(api_key.into()), |_| {})
    }

    /// 创建客户端，并允许在校验前修改配置
    ///
    /// 从默认配置开始；若给出 `api_key` 则先写入，再调用 `configure`，
    /// 最后校验。`configure` 可以覆盖包括 API key 在内的任意字段。
    ///
    /// # 示例
    ///
    /// ```rust
    /// use lingvanex::Client;
    ///
    /// let client = Client::with_config(None, |config| {
    ///     config.api_key = Some("block_key".to_string());
    ///     config.platform = "custom".to_string();
    /// }).unwrap();
    /// assert_eq!(client.configuration().platform, "custom");
    ///
    /// assert!(Client::with_config(None, |_| {}).is_err());
    /// ```
    pub fn with_config<F>(api_key: Option<String>, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut Configuration),
    {
        let mut config = Configuration::default();
        if let Some(key) = api_key {
            config.api_key = Some(key);
        }
        configure(&mut config);
        Self::from_config(config)
    }

    /// 从完整的配置创建客户端
    pub fn from_config(config: Configuration) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .min_tls_version(tls::Version::TLS_1_2)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { http, config })
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// 翻译文本
    ///
    /// # 参数
    ///
    /// * `text` - 单个字符串或字符串数组
    /// * `to` - 目标语言代码，例如 `"es_ES"`
    /// * `options` - 源语言、翻译模式、音译开关
    ///
    /// # 返回
    ///
    /// * `Ok(ApiResult)` - API 返回的 JSON 对象，未经修改
    /// * `Err(LingvanexError)` - 传输失败或按状态码分类的错误
    pub async fn translate(
        &self,
        text: impl Into<TranslationText>,
        to: &str,
        options: TranslateOptions,
    ) -> Result<ApiResult> {
        let text = text.into();
        let body = TranslateRequest::new(&self.config.platform, to, &text, &options);

        let request = self.request(Method::POST, "/translate").json(&body);
        self.execute(request).await
    }

    /// 获取支持的语言列表
    ///
    /// `code` 为 `None` 时使用 `en_GB`。
    pub async fn get_languages(&self, code: Option<&str>) -> Result<ApiResult> {
        let code = code.unwrap_or(DEFAULT_LANGUAGE_CODE);
        let request = self
            .request(Method::GET, "/getLanguages")
            .query(&[("platform", self.config.platform.as_str()), ("code", code)]);
        self.execute(request).await
    }

    /// 使用默认语言代码 `en_GB` 获取语言列表
    pub async fn get_languages_default(&self) -> Result<ApiResult> {
        self.get_languages(None).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let api_key = self.config.api_key.as_deref().unwrap_or_default();

        self.http
            .request(method, url)
            .header(AUTHORIZATION, api_key)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn execute(&self, request: RequestBuilder) -> Result<ApiResult> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        classify_response(status, body)
    }
}

/// 把状态码和原始响应体映射为成功结果或错误
///
/// 2xx 时把响应体解析为 JSON 对象，其余状态交给 [`LingvanexError::from_status`]。
pub fn classify_response(status: u16, body: String) -> Result<ApiResult> {
    if (200..=299).contains(&status) {
        return match serde_json::from_str::<ApiResult>(&body) {
            Ok(result) => Ok(result),
            Err(e) => Err(LingvanexError::invalid_json(status, body, &e)),
        };
    }

    Err(LingvanexError::from_status(status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn success_returns_parsed_object() {
        let result = classify_response(200, r#"{"result":"Hola mundo"}"#.to_string()).unwrap();
        assert_eq!(result["result"], "Hola mundo");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn any_2xx_is_success() {
        for status in [200, 201, 204, 299] {
            assert!(classify_response(status, "{}".to_string()).is_ok(), "status {}", status);
        }
    }

    #[test]
    fn success_with_garbage_is_generic_error() {
        let err = classify_response(200, "not valid json{".to_string()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert!(err.to_string().contains("Invalid JSON response"));
        assert_eq!(err.status_code(), Some(200));
        assert_eq!(err.response_body(), Some("not valid json{"));
    }

    #[test]
    fn success_with_non_object_is_generic_error() {
        let err = classify_response(200, "[1,2]".to_string()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON response"));
    }

    #[test]
    fn failures_follow_status_table() {
        let cases = [
            (401, ErrorKind::Authentication),
            (429, ErrorKind::RateLimit),
            (400, ErrorKind::InvalidRequest),
            (404, ErrorKind::InvalidRequest),
            (500, ErrorKind::Generic),
            (304, ErrorKind::Generic),
            (199, ErrorKind::Generic),
            (300, ErrorKind::Generic),
        ];
        for (status, kind) in cases {
            let err = classify_response(status, "body".to_string()).unwrap_err();
            assert_eq!(err.kind(), kind, "status {}", status);
            assert_eq!(err.status_code(), Some(status));
            assert_eq!(err.response_body(), Some("body"));
        }
    }

    #[test]
    fn construction_requires_key() {
        let err = Client::from_config(Configuration::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let err = Client::new("").unwrap_err();
        assert_eq!(err.to_string(), "API key is required");
    }

    #[test]
    fn configure_callback_overrides_fields() {
        let client = Client::with_config(Some("test_api_key_123".to_string()), |config| {
            config.timeout_secs = 60;
            config.platform = "custom".to_string();
        })
        .unwrap();

        assert_eq!(client.configuration().api_key.as_deref(), Some("test_api_key_123"));
        assert_eq!(client.configuration().timeout_secs, 60);
        assert_eq!(client.configuration().platform, "custom");
    }

    #[tokio::test]
    async fn timeout_bounds_whole_request() {
        // Accepts the connection but never answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = Client::with_config(Some("key".to_string()), |config| {
            config.base_url = format!("http://{}", addr);
            config.timeout_secs = 1;
        })
        .unwrap();

        let started = std::time::Instant::now();
        let err = client.get_languages(None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(started.elapsed() < Duration::from_secs(10));
        drop(listener);
    }

    #[test]
    fn configure_callback_can_clear_key() {
        let err = Client::with_config(Some("key".to_string()), |config| config.api_key = None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
