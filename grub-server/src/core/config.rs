/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT (或 PORT) | 5000 | HTTP 服务端口 |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | 是否输出 JSON 日志 |
/// | LOG_DIR | - | 日志目录 (设置后按天滚动写文件) |
/// | SEED_FIXTURES | true | 启动时是否载入初始数据 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 SEED_FIXTURES=false cargo run -p grub-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 监听地址
    pub http_host: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别
    pub log_level: String,
    /// JSON 格式日志
    pub log_json: bool,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 启动时载入 fixtures
    pub seed_fixtures: bool,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_fixtures: std::env::var("SEED_FIXTURES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_fixtures: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_fixtures = seed_fixtures;
        config
    }

    /// 监听地址 (host:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(6123, false);
        assert_eq!(config.http_port, 6123);
        assert!(!config.seed_fixtures);
        assert!(config.bind_addr().ends_with(":6123"));
    }
}
