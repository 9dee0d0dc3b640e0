//! 平面文件编解码
//!
//! 三行文本格式：
//!   第 1 行：两个 '0'/'1' 字符，依次为加权标志、有向标志
//!   第 2 行：分号结尾的顶点 ID 列表，如 "0;1;2;"
//!   第 3 行：分号结尾的边列表，"起点-终点"（无权）或 "起点-终点-权重"（加权）
//!
//! 写出时按顶点 ID 升序、每个顶点内按目标 ID 升序，结果是确定的。
//! 无向图的两个方向都显式写出，因此加载重放直接写入邻接表，不经过加边策略。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::types::{GraphMode, VertexId, Weight};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 图数据文件扩展名
pub const GRAPH_FILE_EXT: &str = "gph";

/// 图名对应的数据文件名
pub fn graph_file_name(name: &str) -> String {
    format!("{}.{}", name, GRAPH_FILE_EXT)
}

/// 序列化为三行文本
pub fn encode(graph: &Graph) -> String {
    let mut out = String::new();
    out.push_str(&graph.mode().to_header());
    out.push('\n');

    for vertex in graph.vertices() {
        out.push_str(&format!("{};", vertex.id()));
    }
    out.push('\n');

    for vertex in graph.vertices() {
        for edge in vertex.edges() {
            match edge.weight() {
                Some(w) => out.push_str(&format!("{}-{}-{};", vertex.id(), edge.dst(), w)),
                None => out.push_str(&format!("{}-{};", vertex.id(), edge.dst())),
            }
        }
    }
    out.push('\n');
    out
}

/// 从三行文本重建图
///
/// 任何一行缺失或畸形都使整个加载失败，不产生部分图。
/// 空的第 3 行合法（无边图）。
pub fn decode(name: &str, content: &str) -> Result<Graph> {
    let mut lines = content.lines();
    let header = lines
        .next()
        .ok_or_else(|| Error::FormatError("缺少头部行".to_string()))?;
    let vertex_line = lines
        .next()
        .ok_or_else(|| Error::FormatError("缺少顶点行".to_string()))?;
    let edge_line = lines
        .next()
        .ok_or_else(|| Error::FormatError("缺少边行".to_string()))?;

    let mode = GraphMode::from_header(header)?;
    let mut graph = Graph::new(name, mode.weighted, mode.directed);

    for part in vertex_line.split(';').filter(|s| !s.is_empty()) {
        let id = parse_id(part)?;
        if !graph.add_vertex(id) {
            return Err(Error::FormatError(format!("顶点 ID 重复: {}", id)));
        }
    }

    for part in edge_line.split(';').filter(|s| !s.is_empty()) {
        let (origin, edge) = parse_edge(part, mode)?;
        if origin == edge.dst() {
            return Err(Error::FormatError(format!("自环边: {:?}", part)));
        }
        if graph.vertex(origin).is_none() || graph.vertex(edge.dst()).is_none() {
            return Err(Error::FormatError(format!("边端点不存在: {:?}", part)));
        }
        if !graph.insert_edge_raw(origin, edge) {
            return Err(Error::FormatError(format!("边重复: {:?}", part)));
        }
    }

    Ok(graph)
}

/// 写入文件
pub fn save_to<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    fs::write(path.as_ref(), encode(graph))?;
    debug!(
        graph = graph.name(),
        path = %path.as_ref().display(),
        "图已写入文件"
    );
    Ok(())
}

/// 读取文件
pub fn load_from<P: AsRef<Path>>(name: &str, path: P) -> Result<Graph> {
    let content = fs::read_to_string(path.as_ref())?;
    let graph = decode(name, &content)?;
    debug!(
        graph = name,
        path = %path.as_ref().display(),
        "图已从文件加载"
    );
    Ok(graph)
}

fn parse_id(text: &str) -> Result<VertexId> {
    text.parse::<VertexId>()
        .map_err(|e| Error::ParseError(format!("无效的顶点 ID {:?}: {}", text, e)))
}

fn parse_weight(text: &str) -> Result<Weight> {
    text.parse::<Weight>()
        .map_err(|e| Error::ParseError(format!("无效的权重 {:?}: {}", text, e)))
}

/// 解析单条边
///
/// 加权模式取三段（权重段可为负数），无权模式取两段；
/// 段数与模式不符视为格式错误
fn parse_edge(text: &str, mode: GraphMode) -> Result<(VertexId, Edge)> {
    if mode.weighted {
        let mut parts = text.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(origin), Some(dst), Some(weight)) => Ok((
                parse_id(origin)?,
                Edge::weighted(parse_id(dst)?, parse_weight(weight)?),
            )),
            _ => Err(Error::FormatError(format!("加权边应为三段: {:?}", text))),
        }
    } else {
        let mut parts = text.splitn(2, '-');
        match (parts.next(), parts.next()) {
            (Some(origin), Some(dst)) => Ok((parse_id(origin)?, Edge::new(parse_id(dst)?))),
            _ => Err(Error::FormatError(format!("无权边应为两段: {:?}", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use tempfile::tempdir;

    /// 收集 (顶点, 目标, 权重) 三元组用于比较
    fn edge_set(graph: &Graph) -> Vec<(VertexId, VertexId, Option<Weight>)> {
        graph
            .vertices()
            .flat_map(|v| v.edges().map(move |e| (v.id(), e.dst(), e.weight())))
            .collect()
    }

    #[test]
    fn test_encode_weighted_directed() {
        let mut g = Graph::new("g", true, true);
        for id in 0..3 {
            g.add_vertex(id);
        }
        g.add_edge(0, 1, Some(5));
        g.add_edge(1, 2, Some(3));

        assert_eq!(encode(&g), "11\n0;1;2;\n0-1-5;1-2-3;\n");
    }

    #[test]
    fn test_encode_undirected_both_directions() {
        let mut g = Graph::new("g", false, false);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);

        assert_eq!(encode(&g), "00\n0;1;\n0-1;1-0;\n");
    }

    #[test]
    fn test_decode_roundtrip() {
        let mut g = Graph::new("g", true, false);
        for id in [0, 1, 2] {
            g.add_vertex(id);
        }
        g.add_edge(0, 1, Some(5));
        g.add_edge(1, 2, Some(-3));

        let restored = decode("g", &encode(&g)).unwrap();
        assert_eq!(restored.mode(), g.mode());
        assert_eq!(edge_set(&restored), edge_set(&g));
    }

    #[test]
    fn test_decode_edgeless() {
        let g = decode("g", "01\n0;1;2;\n\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_directed());
        assert!(!g.is_weighted());
    }

    #[test]
    fn test_decode_missing_lines() {
        assert!(decode("g", "").is_err());
        assert!(decode("g", "00").is_err());
        assert!(decode("g", "00\n0;1;").is_err());
    }

    #[test]
    fn test_decode_bad_header() {
        assert!(decode("g", "0\n0;\n\n").is_err());
        assert!(decode("g", "0x\n0;\n\n").is_err());
        assert!(decode("g", "000\n0;\n\n").is_err());
    }

    #[test]
    fn test_decode_weight_arity_mismatch() {
        // 加权图缺权重
        assert!(decode("g", "10\n0;1;\n0-1;1-0;\n").is_err());
        // 无权图带权重
        assert!(decode("g", "00\n0;1;\n0-1-5;1-0-5;\n").is_err());
    }

    #[test]
    fn test_decode_rejects_inconsistent_edges() {
        // 悬挂边
        assert!(decode("g", "01\n0;1;\n0-9;\n").is_err());
        // 自环
        assert!(decode("g", "01\n0;1;\n0-0;\n").is_err());
        // 重复边
        assert!(decode("g", "01\n0;1;\n0-1;0-1;\n").is_err());
        // 顶点 ID 重复
        assert!(decode("g", "01\n0;0;\n\n").is_err());
    }

    #[test]
    fn test_decode_negative_weight() {
        let g = decode("g", "11\n0;1;\n0-1--7;\n").unwrap();
        let weights: Vec<_> = g.vertex(0).unwrap().edges().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![Some(-7)]);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(graph_file_name("demo"));

        let mut g = Graph::new("demo", false, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, None);

        save_to(&g, &path).unwrap();
        let restored = load_from("demo", &path).unwrap();
        assert_eq!(restored.name(), "demo");
        assert_eq!(edge_set(&restored), edge_set(&g));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(load_from("nope", dir.path().join("nope.gph")).is_err());
    }

    #[test]
    fn test_random_roundtrip() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let weighted = rng.gen_bool(0.5);
            let directed = rng.gen_bool(0.5);
            let n = rng.gen_range(1..10u64);

            let mut g = Graph::new("rand", weighted, directed);
            for id in 0..n {
                g.add_vertex(id);
            }
            for _ in 0..rng.gen_range(0..20) {
                let a = rng.gen_range(0..n);
                let b = rng.gen_range(0..n);
                let w = weighted.then(|| rng.gen_range(-100i64..100));
                g.add_edge(a, b, w);
            }

            let restored = decode("rand", &encode(&g)).unwrap();
            assert_eq!(restored.mode(), g.mode());
            assert_eq!(edge_set(&restored), edge_set(&g));
        }
    }
}
