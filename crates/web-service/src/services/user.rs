//! 用户服务
//!
//! 提供用户相关的业务逻辑操作

use crate::services::traits::UserServiceTrait;
use storage::{StoreResult, UserCreate, UserInfo, UserRepositoryTrait, UserUpdate};

#[derive(Debug)]
pub struct UserService<UR: UserRepositoryTrait> {
    user_repository: UR,
}

impl<UR: UserRepositoryTrait> UserService<UR> {
    pub fn new(user_repository: UR) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<UR: UserRepositoryTrait> UserServiceTrait for UserService<UR> {
    async fn list_users(&self) -> StoreResult<Vec<UserInfo>> {
        self.user_repository.list_users().await
    }

    async fn get_user_by_id(&self, id: &str) -> StoreResult<UserInfo> {
        self.user_repository.get_user_by_id(id).await
    }

    async fn create_user(&self, user: UserCreate) -> StoreResult<UserInfo> {
        self.user_repository.create_user(user).await
    }

    async fn update_user(&self, id: &str, update: UserUpdate) -> StoreResult<UserInfo> {
        self.user_repository.update_user(id, update).await
    }

    async fn delete_user(&self, id: &str) -> StoreResult<UserInfo> {
        self.user_repository.delete_user(id).await
    }
}
