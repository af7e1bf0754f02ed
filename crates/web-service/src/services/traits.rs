//! 服务层 trait 定义
//!
//! 定义服务层的抽象接口，遵循六边形架构的端口适配器模式

use storage::{StoreResult, UserCreate, UserInfo, UserUpdate};

/// 用户服务 trait 定义
///
/// 定义了用户相关的业务逻辑接口，作为应用层的端口(Port)
///
/// 该 trait 作为业务逻辑的抽象接口，具体实现由 [`UserService`](crate::services::UserService) 提供
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync + 'static {
    /// 查询所有用户
    async fn list_users(&self) -> StoreResult<Vec<UserInfo>>;

    /// 根据 ID 获取用户信息
    async fn get_user_by_id(&self, id: &str) -> StoreResult<UserInfo>;

    /// 创建新用户
    async fn create_user(&self, user: UserCreate) -> StoreResult<UserInfo>;

    /// 更新用户信息
    async fn update_user(&self, id: &str, update: UserUpdate) -> StoreResult<UserInfo>;

    /// 删除用户
    async fn delete_user(&self, id: &str) -> StoreResult<UserInfo>;
}
