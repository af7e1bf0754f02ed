//! 用户存储模块
//!
//! 这个模块提供了基于内存的用户数据存储、查询等功能

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;
pub use models::user::{UserCreate, UserInfo, UserUpdate};
pub use repositories::{traits::UserRepositoryTrait, user::UserRepository};

/// 存储操作结果类型
pub type StoreResult<T> = Result<T, StoreError>;
