//! 统一错误处理
//!
//! 提供应用级错误类型 [`AppError`] 及其 HTTP 映射。
//!
//! # 错误分类
//!
//! | 分类 | 状态码 |
//! |------|--------|
//! | 未登录 / 无效令牌 | 401 |
//! | 无权限 | 403 |
//! | 资源不存在 | 404 |
//! | 校验失败 / 无效 ID | 400 |
//! | 数据库 / 内部错误 | 500 (详情只写日志) |
//!
//! 响应体固定为 `{ "message": ... }`，校验错误附加 `"errors"` 列表。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::db::repository::RepoError;
use shared::client::ErrorResponse;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (401) ==========
    #[error("Access denied. No token provided.")]
    Unauthorized,

    #[error("Access denied. Token expired.")]
    TokenExpired,

    #[error("Access denied. Invalid token.")]
    InvalidToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    // ========== 权限错误 (403) ==========
    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    NotFound(String),

    #[error("Validation error")]
    Validation(Vec<String>),

    #[error("Invalid movie ID format")]
    InvalidId,

    #[error("{0}")]
    Invalid(String),

    // ========== 系统错误 (500) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Access denied. No token provided.".to_string(),
                vec![],
            ),
            AppError::TokenExpired | AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Access denied. Invalid token.".to_string(),
                vec![],
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
                vec![],
            ),

            // Authorization errors (403)
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), vec![]),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), vec![]),

            // Validation (400), with field-level messages
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation error".to_string(),
                errors.clone(),
            ),

            // Malformed identifier (400)
            AppError::InvalidId => (
                StatusCode::BAD_REQUEST,
                "Invalid movie ID format".to_string(),
                vec![],
            ),

            // Other bad requests (400)
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, msg.clone(), vec![]),

            // Database errors (500) - cause stays server-side
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    vec![],
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    vec![],
                )
            }
        };

        let body = Json(ErrorResponse { message, errors });
        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Invalid(msg),
            RepoError::Validation(msg) => AppError::Validation(vec![msg]),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result type used by API handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn errors_map_to_expected_status_codes() {
        assert_eq!(status_of(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AppError::InvalidToken), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AppError::forbidden("admin only")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::not_found("Movie not found")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::InvalidId), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::validation("Title is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::database("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repo_errors_convert_at_the_boundary() {
        let err: AppError = RepoError::NotFound("Movie not found".into()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = RepoError::Validation("Title is required".into()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
