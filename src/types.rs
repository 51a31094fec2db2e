//! 系统类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// passwords表实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// 数据库唯一ID
    pub id: i64,
    /// 密码明文
    pub password: String,
    /// 创建时间（由数据库分配）
    pub created_at: DateTime<Utc>,
}

