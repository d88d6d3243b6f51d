use thiserror::Error;

/// 服务器启动/运行错误
///
/// 只出现在进程边界 (初始化、监听)，请求级错误使用 [`shared::AppError`]。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("初始数据解析失败: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("无效监听地址: {0}")]
    InvalidAddress(String),

    #[error("HTTP 服务错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
