//! TipJar Server - QR 小费收取服务
//!
//! # 架构概述
//!
//! 本模块是 TipJar Server 的主入口，提供以下核心功能：
//!
//! - **存储** (`db`): 嵌入式 redb 单文档存储 (staff / qr / tips 三个集合)
//! - **令牌** (`db::repository::qr`): 铸造绑定员工与物理点位的扫码令牌并解析
//! - **支付** (`services`): 支付会话编排，Stripe REST 或无处理器时的模拟路径
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! tipjar-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 存储层：文档存储、模型、仓储
//! ├── services/      # 支付处理器与会话编排
//! └── utils/         # 错误、标识符、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
