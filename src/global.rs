//! 进程级默认配置
//!
//! 核心类型不依赖这里的任何东西；只是为只需要一份配置的程序提供便利。

use crate::client::Client;
use crate::config::Configuration;
use crate::error::Result;
use once_cell::sync::Lazy;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

static CONFIGURATION: Lazy<RwLock<Configuration>> = Lazy::new(|| RwLock::new(Configuration::default()));

// A poisoned lock still holds a complete Configuration.
fn read() -> RwLockReadGuard<'static, Configuration> {
    CONFIGURATION.read().unwrap_or_else(|e| e.into_inner())
}

fn write() -> RwLockWriteGuard<'static, Configuration> {
    CONFIGURATION.write().unwrap_or_else(|e| e.into_inner())
}

/// 修改全局配置
///
/// 修改作用在副本上，只有通过校验才会写回。回调执行期间不持有锁，
/// 可以在回调里读取 [`configuration`]。
///
/// # 示例
///
/// ```rust
/// lingvanex::configure(|config| {
///     config.api_key = Some("global_key".to_string());
///     config.timeout_secs = 60;
/// }).unwrap();
///
/// assert_eq!(lingvanex::configuration().timeout_secs, 60);
/// ```
pub fn configure<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut Configuration),
{
    let mut config = configuration();
    f(&mut config);
    config.validate()?;
    *write() = config;
    Ok(())
}

/// 当前全局配置的副本
pub fn configuration() -> Configuration {
    read().clone()
}

/// 恢复默认配置
pub fn reset_configuration() {
    *write() = Configuration::default();
}

/// 创建客户端
///
/// 给出 `api_key` 时使用默认配置加该 key；否则校验并使用全局配置。
pub fn client(api_key: Option<String>) -> Result<Client> {
    match api_key {
        Some(key) => Client::new(key),
        None => Client::from_config(configuration()),
    }
}

/// 与 [`Client::with_config`] 相同，不读取全局配置
pub fn client_with<F>(api_key: Option<String>, configure: F) -> Result<Client>
where
    F: FnOnce(&mut Configuration),
{
    Client::with_config(api_key, configure)
}
