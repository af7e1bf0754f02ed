use thiserror::Error;

/// 存储操作错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    /// 记录不存在
    #[error("记录不存在: {0}")]
    NotFound(String),
}

impl StoreError {
    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(id: T) -> Self {
        Self::NotFound(id.to_string())
    }
}
