//! 用户仓库 trait 定义
//!
//! 定义用户存储操作的抽象接口

use crate::models::user::{UserCreate, UserInfo, UserUpdate};
use crate::StoreResult;

/// 用户仓库trait定义
///
/// 定义了用户相关的存储操作接口，支持：
/// - 用户列表查询
/// - 用户创建
/// - 用户查询
/// - 用户更新
/// - 用户删除
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync + 'static {
    /// 查询所有用户
    ///
    /// # 返回值
    /// 按插入顺序返回当前存储的全部用户
    async fn list_users(&self) -> StoreResult<Vec<UserInfo>>;

    /// 根据 ID 获取用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回用户信息，不存在时返回 [`StoreError::NotFound`](crate::StoreError::NotFound)
    async fn get_user_by_id(&self, id: &str) -> StoreResult<UserInfo>;

    /// 创建新用户
    ///
    /// # 参数
    /// - `user`: 用户创建信息
    ///
    /// # 返回值
    /// 返回创建的用户信息，其中 `id` 由存储层生成
    async fn create_user(&self, user: UserCreate) -> StoreResult<UserInfo>;

    /// 更新用户信息
    ///
    /// # 参数
    /// - `id`: 用户 ID
    /// - `update`: 更新信息
    ///
    /// # 返回值
    /// 返回更新后的用户信息，不存在时返回 [`StoreError::NotFound`](crate::StoreError::NotFound)
    async fn update_user(&self, id: &str, update: UserUpdate) -> StoreResult<UserInfo>;

    /// 删除用户
    ///
    /// # 参数
    /// - `id`: 用户 ID
    ///
    /// # 返回值
    /// 返回被删除的用户信息，不存在时返回 [`StoreError::NotFound`](crate::StoreError::NotFound)
    async fn delete_user(&self, id: &str) -> StoreResult<UserInfo>;
}
