use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 用户信息
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct UserInfo {
    #[schema(example = "d5fE_asz")]
    /// 用户ID，创建时由服务端自动生成
    pub id: String,

    #[schema(example = "Usman Bakhsh")]
    /// 用户名称
    pub name: String,

    #[schema(example = "ehmusman@gmail.com")]
    /// 用户邮箱
    pub email: String,
}

/// 创建用户参数
///
/// - `id` 不由客户端提供，由服务端生成
#[derive(Deserialize, Debug, ToSchema)]
pub struct UserCreate {
    #[schema(example = "Usman Bakhsh")]
    /// 新建用户名称
    pub name: String,

    #[schema(example = "ehmusman@gmail.com")]
    /// 新建用户邮箱
    pub email: String,
}

/// 更新用户参数
///
/// `name` 和 `email` 都是必填项，会整体覆盖原有值
#[derive(Deserialize, Debug, ToSchema)]
pub struct UserUpdate {
    #[schema(example = "Usman Bakhsh")]
    /// 更新后的用户名称
    pub name: String,

    #[schema(example = "ehmusman@gmail.com")]
    /// 更新后的用户邮箱
    pub email: String,
}

/// 更新用户的返回对象
#[derive(Deserialize, Debug, ToSchema, Serialize)]
pub struct UserUpdated {
    #[schema(example = "The User Was Updated")]
    /// 更新结果描述
    pub description: String,

    /// 更新后的用户信息
    pub content: UserInfo,
}

impl From<storage::UserInfo> for UserInfo {
    fn from(user: storage::UserInfo) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
