//! 结果打印器
//!
//! 提供表格和垂直格式的图输出

use crate::graph::Graph;
use prettytable::{format, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 图打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印图的邻接结构
    pub fn print_graph(&self, graph: &Graph) -> String {
        if graph.is_empty() {
            return format!("图 \"{}\" 为空\n", graph.name());
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(graph),
            PrintMode::Vertical => self.format_vertical(graph),
        };

        format!(
            "{}\n{} 个顶点, {} 条弧\n",
            output,
            graph.vertex_count(),
            graph.edge_count()
        )
    }

    /// 表格格式
    fn format_table(&self, graph: &Graph) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(vec![
            Cell::new("顶点"),
            Cell::new("出度"),
            Cell::new("出边"),
        ]));

        for vertex in graph.vertices() {
            let edges: Vec<String> = vertex.edges().map(|e| e.to_string()).collect();
            table.add_row(Row::new(vec![
                Cell::new(&vertex.id().to_string()),
                Cell::new(&vertex.out_degree().to_string()),
                Cell::new(&edges.join("  ")),
            ]));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, graph: &Graph) -> String {
        let mut output = String::new();
        for (i, vertex) in graph.vertices().enumerate() {
            output.push_str(&format!(
                "*************************** {}. 顶点 ***************************\n",
                i + 1
            ));
            output.push_str(&format!("  ID: {}\n", vertex.id()));
            output.push_str(&format!("  出度: {}\n", vertex.out_degree()));
            for edge in vertex.edges() {
                output.push_str(&format!("  {}\n", edge));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut g = Graph::new("demo", true, true);
        g.add_vertex(0);
        g.add_vertex(1);
        g.add_edge(0, 1, Some(5));
        g
    }

    #[test]
    fn test_table_contains_edges() {
        let text = Printer::default().print_graph(&sample());
        assert!(text.contains("-> 1 (5)"));
        assert!(text.contains("2 个顶点"));
    }

    #[test]
    fn test_vertical_mode() {
        let text = Printer::new(PrintMode::Vertical).print_graph(&sample());
        assert!(text.contains("1. 顶点"));
        assert!(text.contains("ID: 0"));
    }

    #[test]
    fn test_empty_graph() {
        let g = Graph::new("空", false, false);
        let text = Printer::default().print_graph(&g);
        assert!(text.contains("为空"));
    }
}
