//! 存储仓库 trait 定义
//!
//! 这里定义了用户存储仓库的抽象接口
//!
//! 所有 Repository trait 都遵循统一的设计模式：
//!
//! ```rust
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! `Send + Sync` 保证仓库实例可以在多个请求之间安全共享，`'static`
//! 保证异步方法返回的 `Future` 可以在整个程序生命周期内存活。

pub mod user;

// 重新导出
pub use user::UserRepositoryTrait;
