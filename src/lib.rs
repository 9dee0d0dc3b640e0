//! FlatGraph - 内存图数据结构与平面文件持久化
//!
//! 轻量的单线程图抽象数据类型，支持：
//! - 有向/无向、加权/无权四种模式，构造时一次性选定加边策略
//! - 顶点与边的增删查，变更操作以布尔值报告结果
//! - 完全图与强连通的结构判定
//! - 三行文本格式的平面文件保存与加载，按名称管理

pub mod cli;
pub mod error;
pub mod graph;
pub mod storage;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphCatalog, InsertPolicy, Vertex};
pub use types::{GraphMode, VertexId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
