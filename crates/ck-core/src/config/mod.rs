//! # Configuration DTO / 配置数据模块
//!
//! Data structures only. TOML → DTO mapping lives here; reading files,
//! resolving platform directories and clamping values belong to the caller.
//! 仅包含数据结构与 TOML 映射；文件读取、平台目录与取值修正由调用方负责。

mod app_config;

pub use app_config::AppConfig;
