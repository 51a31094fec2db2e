//! 错误处理模块

use thiserror::Error;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    #[error("数据库连接错误: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("密码查询失败: {0}")]
    Query(#[source] sqlx::Error),

    #[error("密码写入失败: {0}")]
    Write(#[source] sqlx::Error),

    #[error("尝试 {attempts} 次后仍未生成唯一密码")]
    Exhausted { attempts: u32 },

    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("验证错误: {0}")]
    Validation(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 创建验证错误
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    /// 查询阶段的sqlx错误分类：连接类错误归为Connection
    pub fn query(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            Self::Connection(err)
        } else {
            Self::Query(err)
        }
    }

    /// 写入阶段的sqlx错误分类：连接类错误归为Connection
    pub fn write(err: sqlx::Error) -> Self {
        if is_connection_error(&err) {
            Self::Connection(err)
        } else {
            Self::Write(err)
        }
    }

    /// 建立连接阶段的错误
    pub fn connection(err: sqlx::Error) -> Self {
        Self::Connection(err)
    }
}

fn is_connection_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::PoolClosed
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed
    )
}

/// 应用程序Result类型
pub type Result<T> = std::result::Result<T, AppError>;
