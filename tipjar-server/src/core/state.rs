use std::sync::Arc;

use crate::core::Config;
use crate::db::TipStore;
use crate::db::repository::QrRepository;
use crate::services::checkout::CheckoutService;
use crate::services::payment::{self, PaymentProcessor};
use crate::utils::{IdGenerator, UuidGenerator};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | TipStore | 单文档存储 (redb) |
/// | ids | Arc<dyn IdGenerator> | 标识符生成 |
/// | processor | Arc<dyn PaymentProcessor> | 支付处理器 (真实/模拟) |
/// | checkout | CheckoutService | 支付会话编排 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 单文档存储
    pub store: TipStore,
    /// 标识符生成能力
    pub ids: Arc<dyn IdGenerator>,
    /// 支付处理器
    pub processor: Arc<dyn PaymentProcessor>,
    /// 支付会话编排服务
    pub checkout: CheckoutService,
}

impl ServerState {
    /// 从已打开的存储构造状态 (测试使用内存存储)
    pub fn with_store(config: Config, store: TipStore) -> anyhow::Result<Self> {
        let ids: Arc<dyn IdGenerator> = Arc::new(UuidGenerator);
        let processor = payment::from_config(&config)?;
        let checkout = CheckoutService::new(
            QrRepository::new(store.clone(), ids.clone()),
            processor.clone(),
            &config,
        );

        Ok(Self {
            config,
            store,
            ids,
            processor,
            checkout,
        })
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (确保存在)
    /// 2. 数据库 (work_dir/tipjar.redb，首次打开时写入空文档)
    /// 3. 支付处理器 (依据配置选择真实/模拟)
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir()?;

        let store = TipStore::open(config.store_path())?;
        tracing::info!(path = %config.store_path().display(), "Document store opened");

        Self::with_store(config.clone(), store)
    }
}
