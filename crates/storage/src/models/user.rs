//! 用户存储模型
//!
//! 定义用户相关的存储模型结构体

/// 用户信息结构体
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 用户创建参数
///
/// `id` 不在其中，由存储层在创建时自动生成
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// 用户更新参数
///
/// `name` 和 `email` 都是必填项，更新时会整体覆盖原有值
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}
