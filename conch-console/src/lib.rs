//! Conch Console - 卖家目录控制台
//!
//! # 架构概述
//!
//! 本模块是卖家目录控制台的核心库，提供以下功能：
//!
//! - **目录表格** (`catalog`): 排序、过滤与行内编辑
//! - **会话守卫** (`session`): 卖家会话校验，未通过则阻断目录访问
//! - **商品草稿** (`draft`): 新商品表单与提交
//! - **图片摄取** (`ingest`): 并发读取图片并编码为 data URL
//! - **事件队列** (`events`): 面向 UI 的通知与导航事件
//! - **编排** (`console`): 串联客户端、守卫、表格与草稿
//!
//! # 模块结构
//!
//! ```text
//! conch-console/src/
//! ├── catalog/       # 表格状态、排序过滤、编辑会话
//! ├── config.rs      # 环境变量配置
//! ├── console.rs     # 编排
//! ├── draft.rs       # 新商品草稿
//! ├── error.rs       # 错误类型
//! ├── events.rs      # UI 事件
//! ├── ingest.rs      # 图片摄取
//! ├── logger.rs      # 日志初始化
//! └── session.rs     # 会话守卫
//! ```

pub mod catalog;
pub mod config;
pub mod console;
pub mod draft;
pub mod error;
pub mod events;
pub mod ingest;
pub mod logger;
pub mod session;

// Re-export 公共类型
pub use catalog::{
    CatalogTable, EditBuffer, EditField, EditSession, SortConfig, SortDirection, SortKey,
};
pub use config::ConsoleConfig;
pub use console::CatalogConsole;
pub use draft::DraftForm;
pub use error::{ConsoleError, ConsoleResult};
pub use events::{ConsoleEvent, Notice, NoticeLevel};
pub use session::{GuardState, SessionGuard};

// Re-export logger functions
pub use logger::{init_logger, init_logger_with_file};
