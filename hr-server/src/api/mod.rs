//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`users`] - 用户管理接口
//! - [`employees`] - 员工管理接口 (含嵌套资源)
//! - [`documents`] - 员工文档接口
//! - [`attendance`] - 考勤接口
//! - [`leaves`] - 请假接口
//! - [`payroll`] - 工资单接口
//! - [`performance`] - 绩效评估接口
//! - [`activities`] - 活动流接口
//! - [`tasks`] - 个人任务接口
//! - [`announcements`] - 公告接口
//! - [`events`] - 日历事件接口

pub mod health;

// Resource families
pub mod activities;
pub mod announcements;
pub mod attendance;
pub mod documents;
pub mod employees;
pub mod events;
pub mod leaves;
pub mod payroll;
pub mod performance;
pub mod tasks;
pub mod users;

use axum::{Router, middleware};
use serde::Deserialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::middleware::log_request;

/// Optional `?limit=N` query for the recency endpoints
#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        // People
        .merge(users::router())
        .merge(employees::router())
        // Records
        .merge(documents::router())
        .merge(attendance::router())
        .merge(leaves::router())
        .merge(payroll::router())
        .merge(performance::router())
        // Dashboard
        .merge(activities::router())
        .merge(tasks::router())
        .merge(announcements::router())
        .merge(events::router())
}

/// Bind state and attach the middleware stack
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
