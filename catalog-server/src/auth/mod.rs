//! Authentication Module
//!
//! JWT 令牌服务 + 认证/角色中间件

mod extractor;
mod jwt;
mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
