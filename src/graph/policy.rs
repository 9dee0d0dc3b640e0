//! 加边策略
//!
//! 由 (加权, 有向) 两个标志位在图构造时一次性选定的 4 种固定策略。
//! 策略只负责边的创建方向与权重传递，不做端点校验（由 Graph 负责）。

use super::edge::Edge;
use super::vertex::Vertex;
use crate::types::{GraphMode, VertexId, Weight};
use std::collections::BTreeMap;

/// 加边策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPolicy {
    /// 无权无向：正反两条无权边
    UnweightedUndirected,
    /// 加权无向：正反两条边共用同一权重
    WeightedUndirected,
    /// 无权有向：单条无权边
    UnweightedDirected,
    /// 加权有向：单条加权边
    WeightedDirected,
}

impl InsertPolicy {
    /// 根据图模式选择策略
    pub fn select(mode: GraphMode) -> Self {
        match (mode.weighted, mode.directed) {
            (false, false) => Self::UnweightedUndirected,
            (true, false) => Self::WeightedUndirected,
            (false, true) => Self::UnweightedDirected,
            (true, true) => Self::WeightedDirected,
        }
    }

    /// 执行加边
    ///
    /// 加权策略要求 `weight` 为 `Some`，否则返回 `false`；
    /// 无权策略忽略传入的权重。
    pub(crate) fn insert(
        &self,
        vertices: &mut BTreeMap<VertexId, Vertex>,
        origin: VertexId,
        dst: VertexId,
        weight: Option<Weight>,
    ) -> bool {
        match self {
            Self::UnweightedUndirected => {
                insert_pair(vertices, origin, dst, Edge::new(dst), Edge::new(origin))
            }
            Self::WeightedUndirected => match weight {
                Some(w) => insert_pair(
                    vertices,
                    origin,
                    dst,
                    Edge::weighted(dst, w),
                    Edge::weighted(origin, w),
                ),
                None => false,
            },
            Self::UnweightedDirected => insert_one(vertices, origin, Edge::new(dst)),
            Self::WeightedDirected => match weight {
                Some(w) => insert_one(vertices, origin, Edge::weighted(dst, w)),
                None => false,
            },
        }
    }
}

/// 单向插入
fn insert_one(vertices: &mut BTreeMap<VertexId, Vertex>, origin: VertexId, edge: Edge) -> bool {
    match vertices.get_mut(&origin) {
        Some(v) => v.add_edge(edge),
        None => false,
    }
}

/// 双向插入
///
/// 两个方向都成功才算成功；反向已存在时整体返回失败，已插入的正向边保留
fn insert_pair(
    vertices: &mut BTreeMap<VertexId, Vertex>,
    origin: VertexId,
    dst: VertexId,
    forward: Edge,
    backward: Edge,
) -> bool {
    let forward_ok = insert_one(vertices, origin, forward);
    let backward_ok = insert_one(vertices, dst, backward);
    forward_ok && backward_ok
}
