//! Movie API 模块
//!
//! 读接口公开；写接口先认证 (401) 再查角色 (403)。

mod handler;

use axum::middleware as axum_middleware;
use axum::{
    routing::{get, post, put},
    Router,
};

use crate::auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/movies", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    // Public read routes (static paths before /{id} to avoid capture)
    let public = Router::new()
        .route("/", get(handler::list))
        .route("/search", get(handler::search))
        .route("/sorted", get(handler::sorted));

    // Admin-only mutations. route_layer order matters: the outer layer
    // (added last) runs first, so require_auth rejects before
    // require_admin ever sees the request.
    let protected = Router::new()
        .route("/", post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .route_layer(axum_middleware::from_fn(auth::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    public.merge(protected)
}
