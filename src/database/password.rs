//! passwords表操作模块

use crate::error::{AppError, Result};
use crate::store::InsertOutcome;
use crate::types::PasswordRecord;
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

/// 密码历史数据库操作
pub struct PasswordRepository;

impl PasswordRepository {
    /// 检查密码是否已存在（精确匹配）
    pub async fn exists(pool: &sqlx::Pool<Sqlite>, password: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            SELECT 1 FROM passwords WHERE password = ? LIMIT 1
            "#,
        )
        .bind(password)
        .fetch_optional(pool)
        .await
        .map_err(AppError::query)?;

        Ok(result.is_some())
    }

    /// 写入新密码
    ///
    /// 唯一约束冲突不视为错误，返回 `InsertOutcome::Duplicate`
    pub async fn insert(pool: &sqlx::Pool<Sqlite>, password: &str) -> Result<InsertOutcome> {
        let result = sqlx::query(
            r#"
            INSERT INTO passwords (password)
            VALUES (?)
            "#,
        )
        .bind(password)
        .execute(pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Ok(InsertOutcome::Duplicate)
            }
            Err(e) => Err(AppError::write(e)),
        }
    }

    /// 按密码查找记录
    pub async fn find(
        pool: &sqlx::Pool<Sqlite>,
        password: &str,
    ) -> Result<Option<PasswordRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, password, created_at
            FROM passwords
            WHERE password = ?
            "#,
        )
        .bind(password)
        .fetch_optional(pool)
        .await
        .map_err(AppError::query)?;

        row.map(Self::row_to_record).transpose()
    }

    /// 统计已发放密码数量
    pub async fn count(pool: &sqlx::Pool<Sqlite>) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM passwords")
            .fetch_one(pool)
            .await
            .map_err(AppError::query)?;

        Ok(row.get("count"))
    }

    /// 最近发放的密码，按写入顺序倒序
    pub async fn list_recent(
        pool: &sqlx::Pool<Sqlite>,
        limit: i64,
    ) -> Result<Vec<PasswordRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, password, created_at
            FROM passwords
            ORDER BY id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(AppError::query)?;

        rows.into_iter().map(Self::row_to_record).collect()
    }

    fn row_to_record(row: SqliteRow) -> Result<PasswordRecord> {
        let created_at: NaiveDateTime = row.try_get("created_at").map_err(AppError::query)?;

        Ok(PasswordRecord {
            id: row.try_get("id").map_err(AppError::query)?,
            password: row.try_get("password").map_err(AppError::query)?,
            created_at: created_at.and_utc(),
        })
    }
}
