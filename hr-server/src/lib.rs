//! HR Server - 人力资源管理后端
//!
//! # 架构概述
//!
//! 本模块是 HR 后端的主入口，提供以下核心功能：
//!
//! - **存储** (`db`): 内存表存储，进程生命周期内持有全部状态
//! - **HTTP API** (`api`): RESTful API 接口，每个实体一个资源族
//! - **校验** (`utils/validation`): 基于 payload 契约的请求体校验
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 内存存储：模型 + 仓储
//! └── utils/         # 错误、日志、校验、提取器
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::Store;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: .env file, then logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ______     _____
   / / / / __ \   / ___/___  ______   _____  _____
  / /_/ / /_/ /   \__ \/ _ \/ ___/ | / / _ \/ ___/
 / __  / _, _/   ___/ /  __/ /   | |/ /  __/ /
/_/ /_/_/ |_|   /____/\___/_/    |___/\___/_/
    "#
    );
}
