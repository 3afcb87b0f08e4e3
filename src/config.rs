//! 配置管理模块
//!
//! 提供客户端配置记录、API key 校验，以及TOML配置文件的读取、写入和自动发现功能。

use crate::error::{LingvanexError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Lingvanex 官方 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api-b2b.backenster.com/b1/api/v3";
/// 默认超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// 默认平台标识
pub const DEFAULT_PLATFORM: &str = "api";

/// 客户端配置
///
/// 所有字段都可以直接修改；校验只在 [`Configuration::validate`] 被调用时进行。
///
/// # 字段说明
///
/// * `api_key` - API key，发起请求前必须非空
/// * `base_url` - API根地址，不带结尾的 `/`
/// * `timeout_secs` - 单次请求的总时限（秒），从连接开始到读完响应体
/// * `platform` - 每个请求都会携带的平台标识
///
/// # 示例
///
/// ```rust
/// use lingvanex::Configuration;
///
/// let mut config = Configuration::default();
/// assert!(config.validate().is_err());
///
/// config.api_key = Some("my-key".to_string());
/// config.timeout_secs = 60;
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub platform: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

/// 配置文件结构，对应 `[lingvanex]` 表
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lingvanex: Configuration,
}

impl Configuration {
    /// 校验配置
    ///
    /// # 返回
    ///
    /// * `Ok(())` - API key 存在且非空
    /// * `Err(LingvanexError::Configuration)` - 缺少 API key
    pub fn validate(&self) -> Result<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(LingvanexError::configuration("API key is required")),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Ok(file.lingvanex)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = ConfigFile {
            lingvanex: self.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from multiple possible locations
    pub fn load_from_default_locations() -> Self {
        let possible_paths = ["lingvanex.toml", ".lingvanex.toml", "config.toml"];

        for path in &possible_paths {
            if Path::new(path).exists() {
                match Self::from_file(path) {
                    Ok(config) => {
                        info!(path = %path, "loaded configuration");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %path, error = %e, "failed to load configuration");
                    }
                }
            }
        }

        info!("no configuration file found, using defaults");
        Self::default()
    }

    /// Generate example configuration file
    pub fn generate_example_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
