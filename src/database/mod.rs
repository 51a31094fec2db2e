//! 数据库模块

pub mod password;

// 重新导出数据库操作
pub use password::PasswordRepository;

use crate::error::{AppError, Result};
use crate::store::{InsertOutcome, PasswordStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;

/// 数据库连接池类型
pub type DbPool = Pool<Sqlite>;

/// 数据库管理器
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// 初始化数据库连接
    pub async fn new(database_url: &str) -> Result<Self> {
        // 确保数据库文件所在目录存在
        if let Some(path) = database_url.strip_prefix("sqlite:") {
            let path = path.trim_start_matches("//");
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(AppError::connection)?
            .create_if_missing(true);

        // 整个进程只使用一条长连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(AppError::connection)?;

        let database = Self { pool };

        // 初始化数据库表结构
        database.init_tables().await?;

        Ok(database)
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// 初始化数据库表结构
    async fn init_tables(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS passwords (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                password TEXT NOT NULL UNIQUE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        log::info!("数据库表结构初始化完成");
        Ok(())
    }

    /// 检查数据库连接
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::connection)?;
        Ok(())
    }

    /// 关闭数据库连接
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl PasswordStore for Database {
    async fn exists(&self, password: &str) -> Result<bool> {
        PasswordRepository::exists(&self.pool, password).await
    }

    async fn insert(&self, password: &str) -> Result<InsertOutcome> {
        PasswordRepository::insert(&self.pool, password).await
    }
}
