//! # Lingvanex
//!
//! Lingvanex 翻译 API 的轻量 Rust 客户端：构建请求、附加认证、通过TLS发送，
//! 并把HTTP响应映射为类型化的结果或错误。
//!
//! ## 主要特性
//!
//! - **单次请求**: 每次调用恰好一个HTTP往返，不重试、不缓存
//! - **错误分类**: 401 / 429 / 其余4xx / 其他状态分别映射为不同的错误类别
//! - **批量文本**: `translate` 同时接受单个字符串和字符串数组
//! - **配置灵活**: 支持TOML配置文件、程序化配置和进程级默认配置
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use lingvanex::{Client, TranslateOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let result = client
//!         .translate("Hello world", "es_ES", TranslateOptions::new())
//!         .await?;
//!     println!("Translation: {}", result["result"]);
//!
//!     let languages = client.get_languages(Some("de_DE")).await?;
//!     println!("{} languages", languages["result"].as_array().map_or(0, |l| l.len()));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## 配置文件支持
//!
//! ```toml
//! [lingvanex]
//! api_key = "your-api-key"
//! base_url = "https://api-b2b.backenster.com/b1/api/v3"
//! timeout_secs = 30
//! platform = "api"
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod global;
pub mod types;


pub use client::{classify_response, Client};
pub use config::Configuration;
pub use error::{ErrorKind, LingvanexError, Result};
pub use global::{client, client_with, configuration, configure, reset_configuration};
pub use types::{ApiResult, TranslateOptions, TranslateRequest, TranslationText};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
