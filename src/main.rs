//! # lmpgen - LAMMPS 平衡模拟输入生成工具箱
//!
//! 将分散的 MD 前处理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `generate` - 生成 LAMMPS 平衡模拟输入脚本 (in.lmp)
//! - `plot`     - 绘制相边界曲线 (温度-压强)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── lammps/   (输入脚本合成核心)
//!   │     ├── boundary/ (相边界解析与绘图)
//!   │     └── models/   (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod boundary;
mod cli;
mod commands;
mod error;
mod lammps;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
