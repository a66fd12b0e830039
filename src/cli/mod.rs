//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 生成 LAMMPS 平衡模拟输入脚本
//! - `plot`: 绘制相边界曲线
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate, plot

pub mod generate;
pub mod plot;

use clap::{Parser, Subcommand};

/// lmpgen - LAMMPS 平衡模拟输入生成工具箱
#[derive(Parser)]
#[command(name = "lmpgen")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A LAMMPS equilibration input generation and phase boundary toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate LAMMPS equilibration input scripts
    Generate(generate::GenerateArgs),

    /// Plot phase boundary curves from lcurve data files
    Plot(plot::PlotArgs),
}
