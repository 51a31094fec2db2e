//! 唯一性存储接口

use crate::error::Result;

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// 新记录已写入
    Inserted,
    /// 唯一约束冲突，密码已被其他写入方占用
    Duplicate,
}

/// 已发放密码的持久化边界
#[allow(async_fn_in_trait)]
pub trait PasswordStore {
    /// 是否存在与给定密码完全相同的记录
    async fn exists(&self, password: &str) -> Result<bool>;

    /// 写入一条记录，创建时间由存储端分配
    async fn insert(&self, password: &str) -> Result<InsertOutcome>;
}
