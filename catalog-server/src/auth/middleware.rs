//! 认证中间件
//!
//! 为 JWT 认证和角色检查提供 Axum 中间件。两个中间件按顺序组合在
//! 需要保护的路由组上：先 [`require_auth`] 注入身份，再
//! [`require_admin`] 检查角色。读接口不挂任何中间件 (公开访问)。

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// 认证中间件 - 要求携带有效令牌
///
/// 从 `Authorization: Bearer <token>` 头提取并验证 JWT。
/// 验证成功后将 [`CurrentUser`] 注入请求扩展。
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 Authorization 头 / 非 Bearer | 401 |
/// | 令牌过期 | 401 |
/// | 无效令牌 | 401 |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let jwt_service = state.get_jwt_service();
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => {
            JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?
        }
        None => {
            tracing::warn!(uri = %req.uri(), "Request without authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    // 验证令牌
    match jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// 管理员中间件 - 要求 admin 角色
///
/// 必须挂在 [`require_auth`] 之后；未认证的请求在上一层就被拒绝
/// (401)，到这里的请求一定带身份，非 admin 返回 403。
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        tracing::warn!(
            user_id = %user.id,
            email = %user.email,
            "Admin access denied"
        );
        return Err(AppError::forbidden("Admin access required"));
    }

    Ok(next.run(req).await)
}
