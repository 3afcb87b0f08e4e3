//! 类型定义模块
//!
//! 定义翻译请求使用的数据结构。响应不做建模，原样以 JSON 对象返回。

use serde::Serialize;

/// API 成功响应，原样返回的 JSON 对象
pub type ApiResult = serde_json::Map<String, serde_json::Value>;

/// `getLanguages` 的默认语言代码
pub const DEFAULT_LANGUAGE_CODE: &str = "en_GB";

/// 待翻译文本
///
/// API 同时接受单个字符串和字符串数组，两种变体分别序列化为
/// JSON 字符串和 JSON 数组。
///
/// # 示例
///
/// ```rust
/// use lingvanex::TranslationText;
///
/// let single: TranslationText = "Hello".into();
/// let batch: TranslationText = vec!["Hello", "World"].into();
/// assert_eq!(batch.len(), 2);
/// # let _ = single;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationText {
    Single(String),
    Batch(Vec<String>),
}

impl TranslationText {
    /// 文本条数
    pub fn len(&self) -> usize {
        match self {
            TranslationText::Single(_) => 1,
            TranslationText::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for TranslationText {
    fn from(text: &str) -> Self {
        TranslationText::Single(text.to_string())
    }
}

impl From<String> for TranslationText {
    fn from(text: String) -> Self {
        TranslationText::Single(text)
    }
}

impl From<Vec<String>> for TranslationText {
    fn from(texts: Vec<String>) -> Self {
        TranslationText::Batch(texts)
    }
}

impl From<Vec<&str>> for TranslationText {
    fn from(texts: Vec<&str>) -> Self {
        TranslationText::Batch(texts.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TranslationText {
    fn from(texts: &[&str]) -> Self {
        TranslationText::Batch(texts.iter().map(|t| t.to_string()).collect())
    }
}

/// `translate` 的可选参数
///
/// # 字段说明
///
/// * `from` - 源语言代码，缺省时由 API 自动检测
/// * `translate_mode` - 翻译模式，例如 `"html"`
/// * `enable_transliteration` - 是否启用音译；`false` 与缺省等价，都不会发送
///
/// # 示例
///
/// ```rust
/// use lingvanex::TranslateOptions;
///
/// let options = TranslateOptions::new()
///     .from("en_GB")
///     .translate_mode("html")
///     .enable_transliteration(true);
/// assert_eq!(options.from.as_deref(), Some("en_GB"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    pub from: Option<String>,
    pub translate_mode: Option<String>,
    pub enable_transliteration: bool,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn translate_mode(mut self, mode: impl Into<String>) -> Self {
        self.translate_mode = Some(mode.into());
        self
    }

    pub fn enable_transliteration(mut self, enabled: bool) -> Self {
        self.enable_transliteration = enabled;
        self
    }
}

/// `POST /translate` 的请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest<'a> {
    pub platform: &'a str,
    pub to: &'a str,
    pub data: &'a TranslationText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_mode: Option<&'a str>,
    // Only ever Some(true).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_transliteration: Option<bool>,
}

impl<'a> TranslateRequest<'a> {
    pub fn new(
        platform: &'a str,
        to: &'a str,
        data: &'a TranslationText,
        options: &'a TranslateOptions,
    ) -> Self {
        Self {
            platform,
            to,
            data,
            from: options.from.as_deref(),
            translate_mode: options.translate_mode.as_deref(),
            enable_transliteration: options.enable_transliteration.then_some(true),
        }
    }
}
