//! 唯一随机密码生成器
//!
//! 按配置的字符组合生成随机密码，并通过SQLite中的历史记录保证：
//! - 每个发放出去的密码都未曾出现过
//! - 每个被接受的密码只写入一次
//! - 并发写入时由唯一约束兜底，冲突视为重复并重新生成

pub mod config;
pub mod database;
pub mod error;
pub mod gen_password;
pub mod service;
pub mod store;
pub mod types;

// 重新导出常用类型
pub use config::AppConfig;
pub use database::Database;
pub use error::{AppError, Result};
pub use gen_password::{GeneratorConfig, PasswordGenerator};
pub use service::UniquePasswordService;
pub use store::{InsertOutcome, PasswordStore};
pub use types::PasswordRecord;
