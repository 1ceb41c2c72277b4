//! Auth API Handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use shared::client::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};
use shared::Role;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::UserRepository;
use crate::utils::validation::{validate_email, validate_password};
use crate::utils::{AppError, AppResult};

/// POST /api/auth/register - 注册新用户
///
/// 新用户始终以 user 角色创建；管理员通过运维手段提升。
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let email = payload.email.trim().to_lowercase();
    validate_email(&email)?;
    validate_password(&payload.password)?;

    let repo = UserRepository::new(state.get_db());
    if repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::invalid("Email already registered"));
    }

    let hash_pass = User::hash_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let user = repo
        .create(User {
            id: None,
            email,
            hash_pass,
            role: Role::User,
            created_at: Utc::now(),
        })
        .await?;

    tracing::info!(email = %user.email, "User registered");

    let token = issue_token(&state, &user)?;
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user.to_info(),
            token,
        }),
    ))
}

/// POST /api/auth/login - 登录
///
/// 未知邮箱和错误密码返回同一个 401，不泄露账号是否存在。
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = payload.email.trim().to_lowercase();

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let verified = user
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !verified {
        tracing::warn!(email = %email, "Login failed: wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let token = issue_token(&state, &user)?;
    Ok(Json(AuthResponse {
        user: user.to_info(),
        token,
    }))
}

/// GET /api/auth/me - 当前用户信息
///
/// Claims alone would do, but the lookup returns the stored record so a
/// deleted account stops resolving even with a live token.
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<UserInfo>> {
    let key = current_user
        .id
        .strip_prefix("user:")
        .unwrap_or(&current_user.id);

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(key)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user.to_info()))
}

fn issue_token(state: &ServerState, user: &User) -> Result<String, AppError> {
    let user_id = user.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
    state
        .get_jwt_service()
        .generate_token(&user_id, &user.email, user.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))
}
