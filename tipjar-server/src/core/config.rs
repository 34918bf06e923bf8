use std::path::PathBuf;

/// 服务器配置 - 所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | WORK_DIR | /var/lib/tipjar | 工作目录 (数据库文件) |
/// | PUBLIC_BASE_URL | http://localhost:3000 | 对外地址，用于令牌和跳转 URL |
/// | STRIPE_SECRET_KEY | (未设置) | 未设置时使用模拟支付 |
/// | CURRENCY | usd | 支付货币 |
/// | NOTE_MAX_CHARS | 100 | 备注截断长度 |
/// | CHECKOUT_TIMEOUT_MS | 10000 | 支付处理器请求超时(毫秒) |
/// | LOG_DIR | (未设置) | 可选的日志文件目录 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/tipjar HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 工作目录，存储数据库文件
    pub work_dir: String,
    /// 对外基础地址 (令牌 URL 和支付跳转 URL)
    pub public_base_url: String,
    /// Stripe 密钥；`None` 时选择模拟支付路径
    pub stripe_secret_key: Option<String>,
    /// 支付货币 (处理器的 currency 字段)
    pub currency: String,
    /// 备注截断长度 (字符数)
    pub note_max_chars: usize,
    /// 支付处理器请求超时 (毫秒)
    pub checkout_timeout_ms: u64,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tipjar".into()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            stripe_secret_key: std::env::var("STRIPE_SECRET_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "usd".into()),
            note_max_chars: std::env::var("NOTE_MAX_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            checkout_timeout_ms: std::env::var("CHECKOUT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.stripe_secret_key = None;
        config
    }

    /// 数据库文件路径
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("tipjar.redb")
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
