//! 控制台命令处理
//!
//! 解析控制台输入并调用图的公开操作。整数与权重的输入校验
//! 都在这一层完成，核心接口只接收已校验的值。

use crate::graph::{Graph, GraphCatalog};
use crate::types::{VertexId, Weight};

use super::printer::{PrintMode, Printer};

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 控制台状态
pub struct ConsoleState {
    /// 图目录
    pub catalog: GraphCatalog,
    /// 当前操作的图
    pub current: Option<Graph>,
    /// 打印器
    pub printer: Printer,
}

impl ConsoleState {
    pub fn new(catalog: GraphCatalog) -> Self {
        Self {
            catalog,
            current: None,
            printer: Printer::default(),
        }
    }
}

/// 解析并执行控制台命令
pub fn execute_command(input: &str, state: &mut ConsoleState) -> CommandResult {
    let parts: Vec<&str> = input.trim().splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let args: Vec<&str> = parts
        .get(1)
        .copied()
        .unwrap_or("")
        .split_whitespace()
        .collect();

    match cmd.as_str() {
        "help" | "h" | "?" => CommandResult::Message(get_help_text()),

        "quit" | "exit" | "q" => CommandResult::Exit,

        "create" => {
            if args.len() != 3 {
                return CommandResult::Error("用法: create <名称> <加权 0|1> <有向 0|1>".to_string());
            }
            match (parse_cli_flag(args[1]), parse_cli_flag(args[2])) {
                (Some(weighted), Some(directed)) => {
                    let graph = Graph::new(args[0], weighted, directed);
                    let mode = graph.mode();
                    state.current = Some(graph);
                    CommandResult::Message(format!("已创建图 \"{}\" ({})", args[0], mode))
                }
                _ => CommandResult::Error("标志位必须为 0 或 1".to_string()),
            }
        }

        "complete" => {
            if args.len() != 2 {
                return CommandResult::Error("用法: complete <名称> <顶点数>".to_string());
            }
            match args[1].parse::<u64>() {
                Ok(n) if n >= 1 => {
                    state.current = Some(Graph::complete(args[0], n));
                    CommandResult::Message(format!("已生成 {} 个顶点的完全图 \"{}\"", n, args[0]))
                }
                _ => CommandResult::Error("顶点数必须为正整数".to_string()),
            }
        }

        "addv" => with_graph(state, |graph| match parse_vertex_id(args.first()) {
            Some(id) => {
                if graph.add_vertex(id) {
                    CommandResult::Message(format!("已添加顶点 {}", id))
                } else {
                    CommandResult::Error(format!("顶点已存在: {}", id))
                }
            }
            None => CommandResult::Error("用法: addv <顶点 ID>".to_string()),
        }),

        "adde" => with_graph(state, |graph| {
            let (origin, dst) = match (parse_vertex_id(args.first()), parse_vertex_id(args.get(1))) {
                (Some(a), Some(b)) => (a, b),
                _ => return CommandResult::Error("用法: adde <起点> <终点> [权重]".to_string()),
            };
            let weight: Option<Weight> = match args.get(2) {
                Some(text) => match text.parse() {
                    Ok(w) => Some(w),
                    Err(_) => return CommandResult::Error("无效的权重".to_string()),
                },
                None => None,
            };
            if graph.is_weighted() && weight.is_none() {
                return CommandResult::Error("加权图需要权重: adde <起点> <终点> <权重>".to_string());
            }
            if graph.add_edge(origin, dst, weight) {
                CommandResult::Message(format!("已添加边 {} -> {}", origin, dst))
            } else {
                CommandResult::Error("无法添加边（端点缺失、自环或边已存在）".to_string())
            }
        }),

        "rmv" => with_graph(state, |graph| match parse_vertex_id(args.first()) {
            Some(id) => {
                if graph.remove_vertex(id) {
                    CommandResult::Message(format!("已移除顶点 {} 及其关联边", id))
                } else {
                    CommandResult::Error(format!("顶点不存在: {}", id))
                }
            }
            None => CommandResult::Error("用法: rmv <顶点 ID>".to_string()),
        }),

        "rme" => with_graph(state, |graph| {
            match (parse_vertex_id(args.first()), parse_vertex_id(args.get(1))) {
                (Some(a), Some(b)) => {
                    if graph.remove_edge(a, b) {
                        CommandResult::Message(format!("已移除边 {} -> {}", a, b))
                    } else {
                        CommandResult::Error("边不存在".to_string())
                    }
                }
                _ => CommandResult::Error("用法: rme <起点> <终点>".to_string()),
            }
        }),

        "show" => {
            if args.first() == Some(&"-v") {
                state.printer.set_mode(PrintMode::Vertical);
            } else {
                state.printer.set_mode(PrintMode::Table);
            }
            match &state.current {
                Some(graph) => CommandResult::Message(state.printer.print_graph(graph)),
                None => CommandResult::Error(NO_GRAPH.to_string()),
            }
        }

        "info" | "stats" => match &state.current {
            Some(graph) => CommandResult::Message(format!(
                "图 \"{}\" ({})\n  顶点数: {}\n  弧数: {}",
                graph.name(),
                graph.mode(),
                graph.vertex_count(),
                graph.edge_count()
            )),
            None => CommandResult::Error(NO_GRAPH.to_string()),
        },

        "iscomplete" => match &state.current {
            Some(graph) => {
                let result = if args.first() == Some(&"pairs") {
                    graph.is_complete_all_pairs()
                } else {
                    graph.is_complete()
                };
                CommandResult::Message(format!(
                    "图 \"{}\" {}",
                    graph.name(),
                    if result { "是完全图" } else { "不是完全图" }
                ))
            }
            None => CommandResult::Error(NO_GRAPH.to_string()),
        },

        "connected" => match &state.current {
            Some(graph) => {
                let result = if args.first() == Some(&"exact") {
                    graph.is_strongly_connected_exact()
                } else {
                    graph.is_strongly_connected()
                };
                CommandResult::Message(format!(
                    "图 \"{}\" {}",
                    graph.name(),
                    if result { "强连通" } else { "非强连通" }
                ))
            }
            None => CommandResult::Error(NO_GRAPH.to_string()),
        },

        "save" => match &state.current {
            Some(graph) => match state.catalog.save_graph(graph) {
                Ok(_) => CommandResult::Message(format!("图 \"{}\" 已保存", graph.name())),
                Err(e) => CommandResult::Error(format!("保存失败: {}", e)),
            },
            None => CommandResult::Error(NO_GRAPH.to_string()),
        },

        "load" => {
            let name = match args.first() {
                Some(&name) => name,
                None => return CommandResult::Error("用法: load <名称>".to_string()),
            };
            match state.catalog.load_graph(name) {
                Ok(graph) => {
                    let message = format!(
                        "已加载图 \"{}\" ({}), {} 个顶点",
                        graph.name(),
                        graph.mode(),
                        graph.vertex_count()
                    );
                    state.current = Some(graph);
                    CommandResult::Message(message)
                }
                Err(e) => CommandResult::Error(format!("加载失败: {}", e)),
            }
        }

        "drop" => {
            let name = match args.first() {
                Some(&name) => name,
                None => return CommandResult::Error("用法: drop <名称>".to_string()),
            };
            match state.catalog.drop_graph(name) {
                Ok(_) => CommandResult::Message(format!("已删除图 \"{}\"", name)),
                Err(e) => CommandResult::Error(format!("删除失败: {}", e)),
            }
        }

        "graphs" => {
            let names = state.catalog.list_graphs();
            if names.is_empty() {
                CommandResult::Message("没有已保存的图".to_string())
            } else {
                CommandResult::Message(names.join("\n"))
            }
        }

        "clear" => {
            print!("\x1B[2J\x1B[1;1H");
            CommandResult::Continue
        }

        _ => CommandResult::Error(format!("未知命令: {}。输入 help 查看帮助。", cmd)),
    }
}

const NO_GRAPH: &str = "没有选中的图，请先 create 或 load";

fn with_graph(
    state: &mut ConsoleState,
    f: impl FnOnce(&mut Graph) -> CommandResult,
) -> CommandResult {
    match state.current.as_mut() {
        Some(graph) => f(graph),
        None => CommandResult::Error(NO_GRAPH.to_string()),
    }
}

fn parse_vertex_id(text: Option<&&str>) -> Option<VertexId> {
    text.and_then(|t| t.parse().ok())
}

fn parse_cli_flag(text: &str) -> Option<bool> {
    match text {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn get_help_text() -> String {
    r#"
╔════════════════════════════════════════════════════════════════╗
║                      FlatGraph 命令帮助                        ║
╠════════════════════════════════════════════════════════════════╣
║ create <名称> <加权 0|1> <有向 0|1>   创建空图                 ║
║ complete <名称> <顶点数>              生成无权无向完全图       ║
║ addv <ID>                             添加顶点                 ║
║ adde <起点> <终点> [权重]             添加边（加权图必填权重） ║
║ rmv <ID>                              移除顶点及其关联边       ║
║ rme <起点> <终点>                     移除边                   ║
║ show [-v]                             显示邻接结构（-v 垂直）  ║
║ info, stats                           显示图统计信息           ║
║ iscomplete [pairs]                    完全图判定               ║
║ connected [exact]                     强连通判定               ║
║ save                                  保存当前图               ║
║ load <名称>                           加载图                   ║
║ drop <名称>                           删除已保存的图           ║
║ graphs                                列出已保存的图           ║
║ clear                                 清屏                     ║
║ help, h, ?                            显示帮助                 ║
║ quit, exit, q                         退出程序                 ║
╚════════════════════════════════════════════════════════════════╝
"#
    .to_string()
}
