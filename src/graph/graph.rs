//! 图数据结构
//!
//! 内存图：按 ID 升序持有顶点，变更操作以布尔值报告结果，
//! 结构判定（完全性、连通性）在此实现

use super::edge::Edge;
use super::policy::InsertPolicy;
use super::vertex::Vertex;
use crate::types::{GraphMode, VertexId, Weight};
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::fmt;

/// 图
///
/// 名称仅作标签，不强制唯一；加权/有向两个标志在构造时固定。
/// 不变式：任何顶点持有的边，其目标 ID 必然是本图的顶点键（无悬挂边）。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 图名称
    name: String,
    /// 图模式
    mode: GraphMode,
    /// 加边策略（由模式一次性选定）
    policy: InsertPolicy,
    /// 顶点表，按 ID 升序
    vertices: BTreeMap<VertexId, Vertex>,
}

impl Graph {
    /// 创建空图
    pub fn new(name: &str, weighted: bool, directed: bool) -> Self {
        let mode = GraphMode::new(weighted, directed);
        Self {
            name: name.to_string(),
            mode,
            policy: InsertPolicy::select(mode),
            vertices: BTreeMap::new(),
        }
    }

    /// 生成无权无向完全图，顶点为 `0..n`
    ///
    /// 通过公开的变更接口逐条加边，而非特殊构造
    pub fn complete(name: &str, n: u64) -> Self {
        let mut graph = Self::new(name, false, false);
        for id in 0..n {
            graph.add_vertex(id);
        }
        for a in 0..n {
            for b in (a + 1)..n {
                graph.add_edge(a, b, None);
            }
        }
        graph
    }

    /// 获取图名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取图模式
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// 是否加权
    pub fn is_weighted(&self) -> bool {
        self.mode.weighted
    }

    /// 是否有向
    pub fn is_directed(&self) -> bool {
        self.mode.directed
    }

    /// 顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 边数（按有向弧计数，无向图的一条边计两条弧）
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// 是否为空图
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 按 ID 升序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    // ==================== 变更操作 ====================

    /// 添加顶点
    ///
    /// ID 已存在时返回 `false`
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, Vertex::new(id));
        true
    }

    /// 添加边
    ///
    /// 端点缺失、自环、边已存在、或加权图未给权重时返回 `false`；
    /// 否则交由加边策略执行（无向图写入两个方向）
    pub fn add_edge(&mut self, origin: VertexId, dst: VertexId, weight: Option<Weight>) -> bool {
        if origin == dst {
            return false;
        }
        if !self.vertices.contains_key(&origin) || !self.vertices.contains_key(&dst) {
            return false;
        }
        if self.has_edge(origin, dst) {
            return false;
        }
        self.policy.insert(&mut self.vertices, origin, dst, weight)
    }

    /// 移除顶点
    ///
    /// 级联：其余所有顶点指向该 ID 的边一并移除
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if self.vertices.remove(&id).is_none() {
            return false;
        }
        for vertex in self.vertices.values_mut() {
            vertex.remove_edge(id);
        }
        true
    }

    /// 移除边
    ///
    /// 端点缺失或边不存在时返回 `false`；无向图同时移除反向边
    pub fn remove_edge(&mut self, origin: VertexId, dst: VertexId) -> bool {
        if !self.vertices.contains_key(&origin) || !self.vertices.contains_key(&dst) {
            return false;
        }
        if !self.has_edge(origin, dst) {
            return false;
        }
        let removed = match self.vertices.get_mut(&origin) {
            Some(v) => v.remove_edge(dst),
            None => false,
        };
        if self.mode.directed {
            return removed;
        }
        let reverse = match self.vertices.get_mut(&dst) {
            Some(v) => v.remove_edge(origin),
            None => false,
        };
        removed && reverse
    }

    /// 是否存在边 origin -> dst
    pub fn has_edge(&self, origin: VertexId, dst: VertexId) -> bool {
        self.vertices
            .get(&origin)
            .map(|v| v.has_edge(dst))
            .unwrap_or(false)
    }

    /// 直接写入一条边，绕过加边策略与校验
    ///
    /// 仅供文件加载重放使用：文件中已显式保存了规范的有向表示
    pub(crate) fn insert_edge_raw(&mut self, origin: VertexId, edge: Edge) -> bool {
        match self.vertices.get_mut(&origin) {
            Some(v) => v.add_edge(edge),
            None => false,
        }
    }

    // ==================== 结构判定 ====================

    /// 是否为完全图（出度定义）
    ///
    /// 空图视为完全；否则每个顶点的出度都等于 n-1
    pub fn is_complete(&self) -> bool {
        if self.vertices.is_empty() {
            return true;
        }
        let n = self.vertices.len();
        self.vertices.values().all(|v| v.out_degree() == n - 1)
    }

    /// 是否为完全图（全序偶对定义）
    ///
    /// 任意两个不同顶点的有序对之间都存在边。
    /// 与出度定义等价（无自环、无平行边），两者独立实现、独立可测
    pub fn is_complete_all_pairs(&self) -> bool {
        self.vertices.keys().all(|&a| {
            self.vertices
                .keys()
                .all(|&b| a == b || self.has_edge(a, b))
        })
    }

    /// 是否强连通（单源闭包判定）
    ///
    /// 空图视为连通；否则从最小 ID 顶点出发沿出边做可达闭包，
    /// 要求覆盖全部顶点。注意：对有向图这只检查从起点出发的可达性，
    /// 弱于全偶对的强连通，见 [`is_strongly_connected_exact`]
    ///
    /// [`is_strongly_connected_exact`]: Graph::is_strongly_connected_exact
    pub fn is_strongly_connected(&self) -> bool {
        let start = match self.vertices.keys().next() {
            Some(&id) => id,
            None => return true,
        };
        self.reachable_from(start).len() == self.vertices.len()
    }

    /// 是否强连通（全源判定）
    ///
    /// 每个顶点出发的可达闭包都必须覆盖全部顶点
    pub fn is_strongly_connected_exact(&self) -> bool {
        let n = self.vertices.len();
        self.vertices
            .keys()
            .all(|&id| self.reachable_from(id).len() == n)
    }

    /// 从起点出发的可达闭包（广度优先，访问标记由查询自持）
    fn reachable_from(&self, start: VertexId) -> HashSet<VertexId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if let Some(vertex) = self.vertices.get(&current) {
                for edge in vertex.edges() {
                    if visited.insert(edge.dst()) {
                        queue.push_back(edge.dst());
                    }
                }
            }
        }
        visited
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "图 \"{}\" ({}), {} 个顶点",
            self.name,
            self.mode,
            self.vertices.len()
        )?;
        for vertex in self.vertices.values() {
            writeln!(f, "  {}", vertex)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_duplicate() {
        let mut g = Graph::new("g", false, false);
        assert!(g.add_vertex(1));
        assert!(!g.add_vertex(1));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_undirected_symmetric() {
        let mut g = Graph::new("g", false, false);
        g.add_vertex(0);
        g.add_vertex(1);

        assert!(g.add_edge(0, 1, None));
        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn test_add_edge_directed_asymmetric() {
        let mut g = Graph::new("g", false, true);
        g.add_vertex(0);
        g.add_vertex(1);

        assert!(g.add_edge(0, 1, None));
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
    }

    #[test]
    fn test_add_edge_validation() {
        let mut g = Graph::new("g", false, true);
        g.add_vertex(0);
        g.add_vertex(1);

        // 自环
        assert!(!g.add_edge(0, 0, None));
        // 端点缺失
        assert!(!g.add_edge(0, 9, None));
        assert!(!g.add_edge(9, 0, None));
        // 重复边
        assert!(g.add_edge(0, 1, None));
        assert!(!g.add_edge(0, 1, None));
    }

    #[test]
    fn test_add_edge_weighted_requires_weight() {
        let mut g = Graph::new("g", true, true);
        g.add_vertex(0);
        g.add_vertex(1);

        assert!(!g.add_edge(0, 1, None));
        assert!(g.add_edge(0, 1, Some(5)));
        assert_eq!(g.vertex(0).unwrap().edges().next().unwrap().weight(), Some(5));
    }

    #[test]
    fn test_remove_vertex_cascade() {
        let mut g = Graph::new("g", false, true);
        for id in 0..3 {
            g.add_vertex(id);
        }
        g.add_edge(0, 2, None);
        g.add_edge(1, 2, None);

        assert!(g.remove_vertex(2));
        assert!(!g.remove_vertex(2));
        // 级联：指向 2 的边全部消失
        assert!(!g.has_edge(0, 2));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn test_remove_edge_undirected_both_directions() {
        let mut g = Graph::new("g", false, false);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);

        assert!(g.remove_edge(0, 1));
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        assert!(!g.remove_edge(0, 1));
    }

    #[test]
    fn test_remove_edge_directed_one_direction() {
        let mut g = Graph::new("g", false, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);
        g.add_edge(1, 0, None);

        assert!(g.remove_edge(0, 1));
        assert!(!g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
    }

    #[test]
    fn test_is_complete() {
        let mut g = Graph::new("g", false, false);
        // 空图与单顶点图视为完全
        assert!(g.is_complete());
        g.add_vertex(0);
        assert!(g.is_complete());

        let mut g = Graph::complete("k4", 4);
        assert!(g.is_complete());
        assert!(g.is_complete_all_pairs());

        // 少一条边即不完全
        g.remove_edge(1, 2);
        assert!(!g.is_complete());
        assert!(!g.is_complete_all_pairs());
    }

    #[test]
    fn test_complete_all_pairs_directed_needs_both_arcs() {
        let mut g = Graph::new("g", false, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);

        assert!(!g.is_complete_all_pairs());
        g.add_edge(1, 0, None);
        assert!(g.is_complete_all_pairs());
    }

    #[test]
    fn test_strongly_connected_weighted_undirected() {
        let mut g = Graph::new("g", true, false);
        for id in 0..3 {
            g.add_vertex(id);
        }
        g.add_edge(0, 1, Some(5));
        g.add_edge(1, 2, Some(3));

        assert!(g.is_strongly_connected());
        g.remove_edge(1, 2);
        assert!(!g.is_strongly_connected());
    }

    #[test]
    fn test_strongly_connected_single_source_semantics() {
        // 有向图 0 -> 1：单源闭包判定为真（1 无回路也算），全源判定为假
        let mut g = Graph::new("g", false, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);

        assert!(g.is_strongly_connected());
        assert!(!g.is_strongly_connected_exact());

        g.add_edge(1, 0, None);
        assert!(g.is_strongly_connected_exact());
    }

    #[test]
    fn test_strongly_connected_empty() {
        let g = Graph::new("g", false, true);
        assert!(g.is_strongly_connected());
        assert!(g.is_strongly_connected_exact());
    }

    #[test]
    fn test_complete_generator() {
        let g = Graph::complete("k3", 3);
        assert_eq!(g.vertex_count(), 3);
        assert!(!g.is_weighted());
        assert!(!g.is_directed());
        // 无向完全图：每对顶点两条弧
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new("demo", true, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, Some(5));

        let text = g.to_string();
        assert!(text.contains("demo"));
        assert!(text.contains("-> 1 (5)"));
    }
}
