use std::path::PathBuf;

use crate::password::PasswordOptions;

/// Application configuration DTO (pure data, no validation)
/// 应用配置 DTO（纯数据，无验证）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Poll interval in milliseconds. Zero is kept as-is; the watcher decides
    /// what to do with it.
    /// 轮询间隔（毫秒），0 原样保留，由 watcher 决定如何处理。
    pub watcher_interval_ms: u64,

    /// Whether the log file layer is enabled
    /// 是否启用日志文件输出
    pub log_to_file: bool,

    /// Directory for the log file (path only, no existence check)
    /// 日志目录（仅路径信息，不检查是否存在）
    pub log_dir: PathBuf,

    /// Defaults for the `password` command
    pub password: PasswordOptions,
}

impl AppConfig {
    /// Create AppConfig from a TOML value, taking every missing key from `base`.
    /// 从 TOML 值创建 AppConfig，缺失的键取自 `base`。
    ///
    /// Values of the wrong TOML type count as missing. Negative intervals are
    /// truncated to zero rather than rejected.
    pub fn from_toml(toml_value: &toml::Value, base: &AppConfig) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            watcher_interval_ms: section("watcher", "interval_ms")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(base.watcher_interval_ms),
            log_to_file: section("logging", "file_enabled")
                .and_then(|v| v.as_bool())
                .unwrap_or(base.log_to_file),
            log_dir: section("logging", "dir")
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
                .unwrap_or_else(|| base.log_dir.clone()),
            password: PasswordOptions {
                length: section("password", "length")
                    .and_then(|v| v.as_integer())
                    .unwrap_or(base.password.length),
                use_upper: section("password", "use_upper")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(base.password.use_upper),
                use_lower: section("password", "use_lower")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(base.password.use_lower),
                use_special: section("password", "use_special")
                    .and_then(|v| v.as_bool())
                    .unwrap_or(base.password.use_special),
            },
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    /// 创建空的 AppConfig（所有字段为空/零值）
    pub fn empty() -> Self {
        Self {
            watcher_interval_ms: 0,
            log_to_file: false,
            log_dir: PathBuf::new(),
            password: PasswordOptions {
                length: 0,
                use_upper: false,
                use_lower: false,
                use_special: false,
            },
        }
    }

    /// Production defaults with the log directory supplied by the caller
    /// (usually resolved through the `dirs` crate).
    /// 生产环境默认值，日志目录由调用方提供（通常通过 `dirs` 计算）。
    pub fn with_system_defaults(log_dir: PathBuf) -> Self {
        Self {
            watcher_interval_ms: 1000,
            log_to_file: true,
            log_dir,
            password: PasswordOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    fn parse(toml_str: &str) -> Value {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_from_toml_keeps_base_when_keys_missing() {
        let base = AppConfig::with_system_defaults(PathBuf::from("/tmp/logs"));
        let config = AppConfig::from_toml(&parse("[watcher]\n"), &base).unwrap();

        assert_eq!(config, base);
    }

    #[test]
    fn test_from_toml_overlays_present_keys() {
        let base = AppConfig::with_system_defaults(PathBuf::from("/tmp/logs"));
        let toml_str = r#"
            [watcher]
            interval_ms = 250

            [logging]
            file_enabled = false

            [password]
            length = 24
            use_special = false
        "#;

        let config = AppConfig::from_toml(&parse(toml_str), &base).unwrap();

        assert_eq!(config.watcher_interval_ms, 250);
        assert!(!config.log_to_file);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(config.password.length, 24);
        assert!(config.password.use_upper);
        assert!(!config.password.use_special);
    }

    #[test]
    fn test_from_toml_does_not_validate_values() {
        let toml_str = r#"
            [watcher]
            interval_ms = 0

            [password]
            length = -5
        "#;

        let config = AppConfig::from_toml(&parse(toml_str), &AppConfig::empty()).unwrap();

        assert_eq!(config.watcher_interval_ms, 0);
        assert_eq!(config.password.length, -5);
    }

    #[test]
    fn test_from_toml_truncates_negative_interval() {
        let base = AppConfig::with_system_defaults(PathBuf::new());
        let config =
            AppConfig::from_toml(&parse("[watcher]\ninterval_ms = -10\n"), &base).unwrap();

        assert_eq!(config.watcher_interval_ms, 0);
    }

    #[test]
    fn test_from_toml_ignores_wrong_types() {
        let base = AppConfig::with_system_defaults(PathBuf::new());
        let config =
            AppConfig::from_toml(&parse("[logging]\nfile_enabled = \"yes\"\n"), &base).unwrap();

        assert!(config.log_to_file);
    }

    #[test]
    fn test_empty_creates_valid_dto() {
        let config = AppConfig::empty();

        assert_eq!(config.watcher_interval_ms, 0);
        assert!(!config.log_to_file);
        assert_eq!(config.log_dir, PathBuf::new());
        assert_eq!(config.password.length, 0);
    }

    #[test]
    fn test_with_system_defaults() {
        let config = AppConfig::with_system_defaults(PathBuf::from("/var/log/clipkeep"));

        assert_eq!(config.watcher_interval_ms, 1000);
        assert!(config.log_to_file);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/clipkeep"));
        assert_eq!(config.password, PasswordOptions::default());
    }
}
