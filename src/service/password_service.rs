//! 唯一密码服务 - 生成候选密码并对照历史记录去重

use crate::error::{AppError, Result};
use crate::gen_password::PasswordGenerator;
use crate::store::{InsertOutcome, PasswordStore};
use rand::rngs::StdRng;
use rand::Rng;

/// 唯一密码服务
///
/// 循环生成候选密码，直到存储端确认不存在，再写入存储。
/// 任何存储错误都直接返回，不做重试。
pub struct UniquePasswordService<S, R = StdRng> {
    generator: PasswordGenerator<R>,
    store: S,
    /// 最大尝试次数，None表示不限
    max_attempts: Option<u32>,
}

impl<S: PasswordStore, R: Rng> UniquePasswordService<S, R> {
    /// 创建新的服务实例
    pub fn new(generator: PasswordGenerator<R>, store: S) -> Self {
        Self {
            generator,
            store,
            max_attempts: None,
        }
    }

    /// 设置最大尝试次数，0表示不限
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = (max_attempts > 0).then_some(max_attempts);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 生成一个历史上未出现过的密码并记录
    pub async fn generate_unique(&mut self) -> Result<String> {
        let mut attempts: u32 = 0;

        loop {
            if let Some(max) = self.max_attempts {
                if attempts >= max {
                    log::error!("已尝试 {} 次，仍未找到未使用的密码", attempts);
                    return Err(AppError::Exhausted { attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let candidate = self.generator.generate()?;

            if self.store.exists(&candidate).await? {
                log::debug!("第 {} 次尝试：候选密码已存在，重新生成", attempts);
                continue;
            }

            match self.store.insert(&candidate).await? {
                InsertOutcome::Inserted => {
                    log::info!("✅ 第 {} 次尝试生成唯一密码", attempts);
                    return Ok(candidate);
                }
                InsertOutcome::Duplicate => {
                    // 检查与写入之间被其他写入方抢先
                    log::warn!("第 {} 次尝试：写入时发现重复，重新生成", attempts);
                }
            }
        }
    }
}
