//! 配置管理模块
//!
//! 配置按以下顺序叠加，后者覆盖前者：
//! 1. 内置默认值
//! 2. JSON配置文件（可选）
//! 3. 以 `PASSGEN_` 为前缀的环境变量，嵌套字段用 `__` 分隔，
//!    例如 `PASSGEN_GENERATOR__LENGTH=16`

use crate::error::{AppError, Result};
use crate::gen_password::{GeneratorConfig, DEFAULT_LENGTH, DEFAULT_LETTERS};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "PASSGEN";

/// 应用程序配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 密码生成配置
    pub generator: GeneratorSettings,
}

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库连接URL
    pub url: String,
}

/// 密码生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// 密码长度
    pub length: usize,
    /// 基础字母表
    pub letters: String,
    /// 是否包含数字
    pub include_digits: bool,
    /// 是否包含符号
    pub include_symbols: bool,
    /// 最大尝试次数，0表示不限
    pub max_attempts: u32,
    /// 随机数种子，未设置时使用系统熵源
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    /// 转换为生成器配置
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.length,
            self.letters.clone(),
            self.include_digits,
            self.include_symbols,
        )
    }
}

/// 环境变量来源：`PASSGEN_` 前缀，嵌套字段以 `__` 分隔
fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// 加载配置：默认值 → 配置文件 → 环境变量
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_env(path, env_source())
    }

    fn load_with_env<P: AsRef<Path>>(path: P, environment: Environment) -> Result<Self> {
        let path = path.as_ref();
        let defaults = serde_json::to_string(&AppConfig::default())?;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Json))
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if self.database.url.is_empty() {
            return Err(AppError::validation("数据库URL不能为空"));
        }

        if self.generator.length == 0 {
            return Err(AppError::validation("密码长度必须大于0"));
        }

        if self.generator.generator_config().charset().is_empty() {
            return Err(AppError::validation("有效字符集不能为空"));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:./data/passwords.db".to_string(),
            },
            generator: GeneratorSettings {
                length: DEFAULT_LENGTH,
                letters: DEFAULT_LETTERS.to_string(),
                include_digits: false,
                include_symbols: false,
                max_attempts: 10_000,
                seed: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::{NamedTempFile, TempDir};

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(vars))
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_ok());

        config.generator.length = 0;
        assert!(config.validate().is_err());

        config.generator.length = 8;
        config.generator.letters.clear();
        assert!(config.validate().is_err());

        // 字母表为空但包含数字时仍然有效
        config.generator.include_digits = true;
        assert!(config.validate().is_ok());

        config.database.url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let config = AppConfig::load(dir.path().join("missing.json"))?;

        assert_eq!(config, AppConfig::default());
        Ok(())
    }

    #[test]
    fn test_config_file_operations() -> Result<()> {
        let mut config = AppConfig::default();
        config.database.url = "sqlite:/tmp/other.db".to_string();
        config.generator.length = 20;
        config.generator.include_symbols = true;
        config.generator.seed = Some(99);

        let temp_file = NamedTempFile::new()?;
        config.save_to_file(temp_file.path())?;

        let loaded = AppConfig::load(temp_file.path())?;
        assert_eq!(config, loaded);

        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_defaults() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        std::fs::write(temp_file.path(), r#"{ "generator": { "length": 6 } }"#)?;

        let loaded = AppConfig::load(temp_file.path())?;
        assert_eq!(loaded.generator.length, 6);
        assert_eq!(loaded.generator.letters, DEFAULT_LETTERS);
        assert_eq!(loaded.database, AppConfig::default().database);

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_rejected() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        std::fs::write(
            temp_file.path(),
            r#"{ "generator": { "letters": "", "include_digits": false, "include_symbols": false } }"#,
        )?;

        assert!(matches!(
            AppConfig::load(temp_file.path()),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn test_env_overrides_file() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        std::fs::write(
            temp_file.path(),
            r#"{ "generator": { "length": 6, "include_digits": false } }"#,
        )?;

        let env = env_with(&[
            ("PASSGEN_GENERATOR__LENGTH", "16"),
            ("PASSGEN_GENERATOR__INCLUDE_DIGITS", "true"),
            ("PASSGEN_DATABASE__URL", "sqlite:/tmp/env.db"),
        ]);
        let loaded = AppConfig::load_with_env(temp_file.path(), env)?;

        assert_eq!(loaded.generator.length, 16);
        assert!(loaded.generator.include_digits);
        assert_eq!(loaded.database.url, "sqlite:/tmp/env.db");
        // 未覆盖的字段保持默认值
        assert_eq!(loaded.generator.letters, DEFAULT_LETTERS);
        Ok(())
    }

    #[test]
    fn test_env_requires_single_underscore_prefix() -> Result<()> {
        let dir = TempDir::new()?;
        let env = env_with(&[
            ("PASSGEN__GENERATOR__LENGTH", "30"),
            ("OTHER_GENERATOR__LENGTH", "40"),
        ]);
        let loaded = AppConfig::load_with_env(dir.path().join("missing.json"), env)?;

        assert_eq!(loaded.generator.length, DEFAULT_LENGTH);
        Ok(())
    }

    #[test]
    fn test_env_invalid_value_is_rejected() -> Result<()> {
        let dir = TempDir::new()?;
        let env = env_with(&[("PASSGEN_GENERATOR__LENGTH", "0")]);

        assert!(matches!(
            AppConfig::load_with_env(dir.path().join("missing.json"), env),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }
}
