//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file and maps it onto [`AppConfig`]. Values are accepted
//! as they are; clamping happens where they are used.
//! 仅负责读取与映射，不做验证。

use anyhow::Context;
use ck_core::config::AppConfig;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "clipkeep";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file, overlaying it onto `base`
/// 从 TOML 文件加载配置并覆盖到 `base` 上
///
/// # Errors / 错误
///
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path, base: &AppConfig) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value, base)
}

/// `<config dir>/clipkeep/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Platform log directory; falls back to the temp dir when the platform has
/// no local data dir.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
        .join("logs")
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, the default path is used if it
/// exists, otherwise the system defaults apply.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    resolve_config_with(
        explicit,
        default_config_path().as_deref(),
        AppConfig::with_system_defaults(default_log_dir()),
    )
}

fn resolve_config_with(
    explicit: Option<&Path>,
    default_path: Option<&Path>,
    base: AppConfig,
) -> anyhow::Result<AppConfig> {
    match (explicit, default_path) {
        (Some(path), _) => load_config(path, &base),
        (None, Some(path)) if path.is_file() => load_config(path, &base),
        _ => Ok(base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn base() -> AppConfig {
        AppConfig::with_system_defaults(PathBuf::from("/tmp/clipkeep-logs"))
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[watcher]\ninterval_ms = 500\n\n[password]\nlength = 32\n")
            .unwrap();

        let config = load_config(temp_file.path(), &base()).unwrap();

        assert_eq!(config.watcher_interval_ms, 500);
        assert_eq!(config.password.length, 32);
        assert!(config.log_to_file);
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("absent.toml"), &base()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_reports_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[watcher\ninterval_ms = ").unwrap();

        let err = load_config(temp_file.path(), &base()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_missing_default_file_uses_base() {
        let dir = TempDir::new().unwrap();
        let config =
            resolve_config_with(None, Some(&dir.path().join("config.toml")), base()).unwrap();
        assert_eq!(config, base());
    }

    #[test]
    fn test_existing_default_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nfile_enabled = false\n").unwrap();

        let config = resolve_config_with(None, Some(&path), base()).unwrap();

        assert!(!config.log_to_file);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(resolve_config_with(Some(&missing), None, base()).is_err());
    }

    #[test]
    fn test_default_paths_end_with_app_dir() {
        assert!(default_log_dir().ends_with("clipkeep/logs"));
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("clipkeep/config.toml"));
        }
    }
}
