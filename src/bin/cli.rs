//! FlatGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use flatgraph::cli::{execute_command, CommandResult, ConsoleState};
use flatgraph::graph::GraphCatalog;
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "flatgraph-cli")]
#[command(about = "FlatGraph 命令行工具")]
struct Args {
    /// 数据目录
    #[arg(short, long, default_value = "./data")]
    data_dir: String,

    /// 执行单条命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("FlatGraph CLI - 内存图与平面文件持久化");
    println!("======================================");

    let catalog = GraphCatalog::open(&args.data_dir)
        .with_context(|| format!("无法打开数据目录 {}", args.data_dir))?;

    println!("数据目录: {}", args.data_dir);
    println!("  已保存图: {} 个", catalog.list_graphs().len());

    let mut state = ConsoleState::new(catalog);

    // 单条命令模式
    if let Some(command) = args.execute {
        run_command(&mut state, &command);
        return Ok(());
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("flatgraph> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if run_command(&mut state, line) {
            break;
        }
    }

    println!("再见！");
    Ok(())
}

/// 执行一条命令，返回是否退出
fn run_command(state: &mut ConsoleState, input: &str) -> bool {
    match execute_command(input, state) {
        CommandResult::Exit => true,
        CommandResult::Continue => false,
        CommandResult::Message(msg) => {
            println!("{}", msg);
            false
        }
        CommandResult::Error(msg) => {
            println!("{} {}", "错误:".red(), msg);
            false
        }
    }
}
