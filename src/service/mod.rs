//! 服务模块

pub mod password_service;

pub use password_service::UniquePasswordService;
