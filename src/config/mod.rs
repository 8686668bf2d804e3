//! 配置模块
//!
//! 静态配置从 `config.toml` 与环境变量加载（优先级：ENV > 文件 > 默认值），
//! 通过 `init_config()` / `get_config()` 全局访问。

mod structs;

pub use structs::{AppConfig, DatabaseConfig, LoggingConfig, ReportConfig};

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration
///
/// Loads configuration from "config.toml" in the current directory.
/// If the file doesn't exist, uses in-memory defaults.
///
/// # Examples
/// ```no_run
/// use newsgauge::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(AppConfig::load()));
}
