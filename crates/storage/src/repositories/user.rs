//! 用户仓库
//!
//! 负责用户数据的内存存储操作

use crate::models::user::{UserCreate, UserInfo, UserUpdate};
use crate::repositories::traits::UserRepositoryTrait;
use crate::{StoreError, StoreResult};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::debug;

/// 生成的用户ID长度
const ID_LENGTH: usize = 8;

/// 用户ID字符表，与URL安全的base64字符集一致
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// 用户仓库结构体
///
/// 内部使用 [`RwLock`] 保护用户列表。tokio是多线程运行时，
/// 多个请求可能并发读写同一份数据，每次变更都在一个写锁临界区内完成。
#[derive(Debug)]
pub struct UserRepository {
    users: RwLock<Vec<UserInfo>>,
}

impl UserRepository {
    /// 创建空的用户仓库实例
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// 创建带种子数据的用户仓库实例
    ///
    /// 服务启动时预置5个用户。数据只存在于进程内存中，重启后会恢复为种子数据。
    pub fn seeded() -> Self {
        let users = vec![
            seed_user("ytSDc_pM", "usman", "usman@gmail.com"),
            seed_user("ytSgc_pM", "farooq", "usman1@gmail.com"),
            seed_user("ytsWc_pM", "ehsan", "usman2@gmail.com"),
            seed_user("ytSDc_PM", "ali", "usman3@gmail.com"),
            seed_user("ytSFc_VM", "hamza", "usman4@gmail.com"),
        ];

        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_user(id: &str, name: &str, email: &str) -> UserInfo {
    UserInfo {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// 生成短随机用户ID
///
/// 注意：这里不做唯一性校验，依赖8位随机字符的取值空间来避免碰撞
fn generate_user_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    /// 查询所有用户
    ///
    /// 按插入顺序返回当前存储的全部用户，不支持过滤和分页。
    async fn list_users(&self) -> StoreResult<Vec<UserInfo>> {
        let users = self.users.read().await;

        debug!("🔍 查询所有用户 - 共 {} 个", users.len());

        Ok(users.clone())
    }

    /// 根据 ID 获取用户信息
    async fn get_user_by_id(&self, id: &str) -> StoreResult<UserInfo> {
        debug!("🔍 根据 ID 获取用户: {}", id);

        let users = self.users.read().await;

        users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))
    }

    /// 创建新用户
    ///
    /// 生成新的随机ID并追加到列表末尾，保证List的插入顺序语义。
    async fn create_user(&self, user: UserCreate) -> StoreResult<UserInfo> {
        debug!("📝 创建用户: {:#?}", user);

        let user_info = UserInfo {
            id: generate_user_id(),
            name: user.name,
            email: user.email,
        };

        let mut users = self.users.write().await;
        users.push(user_info.clone());

        debug!("✅ 用户创建成功: {:#?}", user_info);
        Ok(user_info)
    }

    /// 更新用户信息
    ///
    /// 只覆盖 `name` 和 `email`，`id` 保持不变。
    async fn update_user(&self, id: &str, update: UserUpdate) -> StoreResult<UserInfo> {
        debug!("🔄 更新用户 {} 信息: {:#?}", id, update);

        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        users[index].name = update.name;
        users[index].email = update.email;

        debug!("✅ 用户更新成功: {:#?}", users[index]);
        Ok(users[index].clone())
    }

    /// 删除用户
    ///
    /// 按定位到的下标原地删除，其余元素保持原有顺序。
    async fn delete_user(&self, id: &str) -> StoreResult<UserInfo> {
        debug!("🗑️ 删除用户: {}", id);

        let mut users = self.users.write().await;
        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        let user = users.remove(index);

        debug!("✅ 用户删除成功: {:#?}", user);
        Ok(user)
    }
}
