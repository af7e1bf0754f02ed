//! 用户相关接口
//!

use crate::models::err::AppError;
use crate::models::users::{UserCreate, UserInfo, UserUpdate, UserUpdated};
use crate::services::UserServiceTrait;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use color_eyre::Result;
use tracing::debug;

/// 获取所有用户
///
/// 返回当前存储的全部用户，按插入顺序排列，不支持过滤和分页。
///
/// ## 返回值
///
/// 返回值的类型是 [`Result<Json<Vec<UserInfo>>, AppError>`]：
///
/// 1. [`Json`] 会对内部类型进行json序列化，保证返回的数据是一个合法的json字符串
/// 2. [`UserInfo`] 是实际的业务返回对象
/// 3. [`AppError`] 是错误时返回的Error类型，会自动转换为相应的http错误码
#[utoipa::path(get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "The list of the users", body = Vec<UserInfo>)
    ),
)]
pub async fn list_users<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
) -> Result<Json<Vec<UserInfo>>, AppError> {
    debug!("🔍 查询所有用户");

    // 获取用户服务实例
    let user_service = state.user_service.clone();

    let users = user_service.list_users().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// 查询指定用户信息
#[utoipa::path(get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    responses(
        (status = 200, description = "The user description by id", body = UserInfo),
        (status = 404, description = "The user was not found")
    ),
)]
pub async fn get_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserInfo>, AppError> {
    debug!("Getting user id {:#?}", user_id);

    let user_service = state.user_service.clone();
    let user = user_service.get_user_by_id(&user_id).await?;

    Ok(Json(user.into()))
}

/// 创建用户
///
/// 根据用户输入参数创建用户信息，用户ID由服务端自动生成。
///
/// 通过`Json(user): Json<UserCreate>`这种语法，框架能自动将body数据反序列化为[`UserCreate`]对象，如果
/// 反序列化失败会直接返回错误。
#[utoipa::path(post,
    path = "/users",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "The user was successfully created", body = String),
        (status = 500, description = "Some server error")
    ),
)]
pub async fn create_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Json(user): Json<UserCreate>,
) -> Result<String, AppError> {
    debug!("Creating user {:#?}", user);

    let user_service = state.user_service.clone();
    let db_user = storage::UserCreate {
        name: user.name,
        email: user.email,
    };
    user_service.create_user(db_user).await?;

    Ok("The User Was Successfully created".to_string())
}

/// 更新用户信息
///
/// 根据用户指定的 `id` 和 修改信息 [`UserUpdate`] 来更新用户信息。
/// `id` 不可修改，`name` 和 `email` 会被整体覆盖。
#[utoipa::path(put,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "The user was updated", body = UserUpdated),
        (status = 404, description = "The user was not found"),
        (status = 500, description = "Some error happened")
    ),
)]
pub async fn update_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<String>,
    Json(info): Json<UserUpdate>,
) -> Result<Json<UserUpdated>, AppError> {
    debug!("Updating user {} with {:#?}", user_id, info);

    let user_service = state.user_service.clone();
    let db_update = storage::UserUpdate {
        name: info.name,
        email: info.email,
    };
    let user = user_service.update_user(&user_id, db_update).await?;

    Ok(Json(UserUpdated {
        description: "The User Was Updated".to_string(),
        content: user.into(),
    }))
}

/// 删除指定的用户
#[utoipa::path(delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "The user id")
    ),
    responses(
        (status = 200, description = "The user was deleted", body = String),
        (status = 404, description = "The user was not found")
    ),
)]
pub async fn delete_user<US: UserServiceTrait>(
    State(state): State<AppState<US>>,
    Path(user_id): Path<String>,
) -> Result<String, AppError> {
    debug!("delete user {:#?}", user_id);

    let user_service = state.user_service.clone();
    user_service.delete_user(&user_id).await?;

    Ok("The User Was Deleted".to_string())
}

#[cfg(test)]
mod tests {
    use crate::routes::create_app_router;
    use crate::services::UserService;
    use crate::AppState;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use std::sync::Arc;
    use storage::UserRepository;
    use tower::ServiceExt;

    /// 构造带种子数据的测试应用
    ///
    /// 每个测试都会拿到一个独立的内存仓库，测试之间互不影响
    fn test_app() -> Router {
        let state = AppState {
            user_service: Arc::new(UserService::new(UserRepository::seeded())),
        };
        create_app_router(state)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn request_with_json(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_list_users_returns_seed_data() {
        let app = test_app();

        let response = app.oneshot(get("/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let users = body_json(response).await;
        let users = users.as_array().unwrap().clone();

        // 种子数据按插入顺序返回
        assert_eq!(users.len(), 5);
        assert_eq!(users[0]["id"], "ytSDc_pM");
        assert_eq!(users[0]["name"], "usman");
        assert_eq!(users[0]["email"], "usman@gmail.com");
        assert_eq!(users[4]["name"], "hamza");
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let app = test_app();

        let response = app.oneshot(get("/users/ytSDc_pM")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let user = body_json(response).await;
        assert_eq!(user["id"], "ytSDc_pM");
        assert_eq!(user["name"], "usman");
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let app = test_app();

        let response = app.oneshot(get("/users/no-such-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_user() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(request_with_json(
                Method::POST,
                "/users",
                serde_json::json!({"name": "x", "email": "y"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "The User Was Successfully created");

        // 新用户被追加到列表末尾，ID由服务端生成
        let response = app.oneshot(get("/users")).await.unwrap();
        let users = body_json(response).await;
        let users = users.as_array().unwrap().clone();

        assert_eq!(users.len(), 6);
        assert_eq!(users[5]["name"], "x");
        assert_eq!(users[5]["email"], "y");
        let new_id = users[5]["id"].as_str().unwrap();
        assert!(!new_id.is_empty());
        assert!(users[..5].iter().all(|u| u["id"] != new_id));
    }

    #[tokio::test]
    async fn test_create_twice_creates_two_records() {
        let app = test_app();

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(request_with_json(
                    Method::POST,
                    "/users",
                    serde_json::json!({"name": "x", "email": "y"}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(get("/users")).await.unwrap();
        let users = body_json(response).await;
        assert_eq!(users.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_update_user() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(request_with_json(
                Method::PUT,
                "/users/ytSgc_pM",
                serde_json::json!({"name": "farooq2", "email": "farooq2@gmail.com"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let reply = body_json(response).await;
        assert_eq!(reply["description"], "The User Was Updated");
        assert_eq!(reply["content"]["id"], "ytSgc_pM");
        assert_eq!(reply["content"]["name"], "farooq2");
        assert_eq!(reply["content"]["email"], "farooq2@gmail.com");

        // 更新结果对后续查询可见
        let response = app.oneshot(get("/users/ytSgc_pM")).await.unwrap();
        let user = body_json(response).await;
        assert_eq!(user["name"], "farooq2");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let app = test_app();

        let response = app
            .oneshot(request_with_json(
                Method::PUT,
                "/users/no-such-id",
                serde_json::json!({"name": "x", "email": "y"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_then_get_returns_404() {
        let app = test_app();

        // 种子用户可以被查询到
        let response = app.clone().oneshot(get("/users/ytSDc_pM")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // 删除该用户
        let response = app.clone().oneshot(delete("/users/ytSDc_pM")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "The User Was Deleted");

        // 删除后再查询返回404
        let response = app.oneshot(get("/users/ytSDc_pM")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let app = test_app();

        let response = app.oneshot(delete("/users/no-such-id")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_docs_available() {
        let app = test_app();

        let response = app.oneshot(get("/docs")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
