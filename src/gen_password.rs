//! 密码生成模块
//!
//! 根据配置的字母表、数字和符号组合出有效字符集，逐位独立均匀采样生成密码

use crate::error::{AppError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 默认字母表（大小写英文字母）
pub const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// 数字字符集
pub const DIGITS: &str = "0123456789";

/// 符号字符集
pub const SYMBOLS: &str = "!@#$%^&*()_+{}:\"<>?,./;'[]\\=-`~";

/// 默认密码长度
pub const DEFAULT_LENGTH: usize = 12;

/// 生成器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// 密码长度
    pub length: usize,
    /// 基础字母表
    pub letters: String,
    /// 是否追加数字
    pub include_digits: bool,
    /// 是否追加符号
    pub include_symbols: bool,
}

impl GeneratorConfig {
    pub fn new<T: Into<String>>(
        length: usize,
        letters: T,
        include_digits: bool,
        include_symbols: bool,
    ) -> Self {
        Self {
            length,
            letters: letters.into(),
            include_digits,
            include_symbols,
        }
    }

    /// 有效字符集：字母表 + 可选数字 + 可选符号
    ///
    /// 重复字符原样保留，会相应改变采样分布
    pub fn charset(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.letters.chars().collect();
        if self.include_digits {
            chars.extend(DIGITS.chars());
        }
        if self.include_symbols {
            chars.extend(SYMBOLS.chars());
        }
        chars
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_LETTERS, false, false)
    }
}

/// 随机密码生成器
///
/// 生成器持有自己的随机数源，只在创建时播种一次
pub struct PasswordGenerator<R = StdRng> {
    config: GeneratorConfig,
    rng: R,
}

impl PasswordGenerator<StdRng> {
    /// 使用操作系统熵源播种
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// 使用固定种子，结果可复现
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// 使用调用方提供的随机数源
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// 一次性修改全部配置（不做校验）
    pub fn configure<T: Into<String>>(
        &mut self,
        length: usize,
        letters: T,
        include_digits: bool,
        include_symbols: bool,
    ) {
        self.config = GeneratorConfig::new(length, letters, include_digits, include_symbols);
    }

    pub fn set_length(&mut self, length: usize) {
        self.config.length = length;
    }

    pub fn set_letters<T: Into<String>>(&mut self, letters: T) {
        self.config.letters = letters.into();
    }

    pub fn set_digits(&mut self, include_digits: bool) {
        self.config.include_digits = include_digits;
    }

    pub fn set_symbols(&mut self, include_symbols: bool) {
        self.config.include_symbols = include_symbols;
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 生成一个候选密码
    ///
    /// 每一位独立地从有效字符集中均匀抽取（有放回），字符可以重复。
    /// 有效字符集为空时返回验证错误。
    pub fn generate(&mut self) -> Result<String> {
        let charset = self.config.charset();
        if charset.is_empty() {
            return Err(AppError::validation("有效字符集为空，无法生成密码"));
        }

        let password = (0..self.config.length)
            .map(|_| charset[self.rng.random_range(0..charset.len())])
            .collect();

        Ok(password)
    }
}
