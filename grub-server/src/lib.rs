//! GrubDash Server - 外卖菜品与订单 REST 服务
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): `/dishes`、`/orders`、`/health` 路由
//! - **存储** (`db`): 进程内存储，读写锁保护，启动时载入 fixtures
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! grub-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由、处理器、校验
//! ├── db/            # 内存表、仓库、初始数据
//! ├── middleware/    # 请求日志
//! └── utils/         # 日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use core::{Config, Server, ServerError, ServerState};
pub use db::repository::{DishRepository, OrderRepository};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 设置运行环境: 载入 `.env`，初始化日志
///
/// 返回载入后的配置。
pub fn setup_environment() -> Config {
    // .env 不存在不是错误
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
   ______           __    ____             __
  / ____/______  __/ /_  / __ \____ ______/ /_
 / / __/ ___/ / / / __ \/ / / / __ `/ ___/ __ \
/ /_/ / /  / /_/ / /_/ / /_/ / /_/ (__  ) / / /
\____/_/   \__,_/_.___/_____/\__,_/____/_/ /_/
    "#
    );
}
