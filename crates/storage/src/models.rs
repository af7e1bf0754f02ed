//! 存储模型模块
//!
//! 这里定义内存存储中的结构体和相关操作

pub mod user;

// 重新导出具体的模型
pub use user::{UserCreate, UserInfo, UserUpdate};
