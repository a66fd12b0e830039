//! # plot 子命令 CLI 定义
//!
//! 绘制相边界曲线 (温度-压强相图)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::Args;
use std::path::PathBuf;

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input lcurve file or directory containing lcurve files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Glob pattern for input files when input is a directory
    #[arg(short, long, default_value = "*.out")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Output image path
    #[arg(short, long, default_value = "phase_diagram.png")]
    pub output: PathBuf,

    /// Chart title
    #[arg(long, default_value = "Phase diagram")]
    pub title: String,

    // ─────────────────────────────────────────────────────────────
    // Axis options
    // ─────────────────────────────────────────────────────────────
    /// Lower pressure limit (GPa)
    #[arg(long, default_value_t = 0.0)]
    pub pres_min: f64,

    /// Upper pressure limit (GPa)
    #[arg(long, default_value_t = 30.0)]
    pub pres_max: f64,

    /// Lower temperature limit (K)
    #[arg(long, default_value_t = 0.0)]
    pub temp_min: f64,

    /// Upper temperature limit (K)
    #[arg(long, default_value_t = 2000.0)]
    pub temp_max: f64,

    // ─────────────────────────────────────────────────────────────
    // Rendering options
    // ─────────────────────────────────────────────────────────────
    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1000)]
    pub height: u32,

    /// Render as SVG instead of PNG
    #[arg(long, default_value_t = false)]
    pub svg: bool,

    /// Also export the parsed records to a CSV file
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}
