use crate::auth::JwtConfig;

/// 服务器配置
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATA_DIR | ./data | 数据库目录 |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | CLIENT_ORIGIN | http://localhost:5173 | 允许的跨域来源 |
/// | JWT_SECRET | (dev fallback) | JWT 密钥 |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 (分钟) |
/// | ENVIRONMENT | development | 运行环境 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据库存储目录
    pub data_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 允许跨域请求的前端来源 (单个 origin, 带凭据)
    pub client_origin: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置，未设置时使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            client_origin: std::env::var("CLIENT_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            jwt: JwtConfig::from_env(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }
}
