use std::sync::Arc;

use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Clone 是浅拷贝 (数据库句柄和 Arc)，可以随意跨请求传递。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式数据库 (SurrealDB) |
/// | jwt_service | JWT 认证服务 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库
    pub db: Surreal<Db>,
    /// JWT 认证服务
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态：打开数据库、应用表定义、构建 JWT 服务
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.data_dir).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
