//! Catalog Server - movie catalog REST backend
//!
//! Public reads over a movie collection, JWT-gated admin mutations,
//! backed by an embedded SurrealDB document store.
//!
//! # Module structure
//!
//! ```text
//! catalog-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── auth/          # JWT 认证、角色检查
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger;
