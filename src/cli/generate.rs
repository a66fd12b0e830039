//! # generate 子命令 CLI 定义
//!
//! 生成 LAMMPS 平衡模拟输入脚本（单点或温度扫描）
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Target temperature(s) in K: single value, comma list, or 'start:stop:step'
    #[arg(short, long)]
    pub temp: String,

    /// Target pressure in bar
    #[arg(short, long)]
    pub pres: f64,

    /// Atomic masses in g/mol, one per atom type (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub mass: Vec<f64>,

    /// Output file (single temperature) or root directory (scan)
    #[arg(short, long, default_value = "in.lmp")]
    pub output: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // MD options
    // ─────────────────────────────────────────────────────────────
    /// Total number of MD steps
    #[arg(long, default_value_t = 1_000_000)]
    pub nsteps: u64,

    /// Thermo output interval in steps
    #[arg(long, default_value_t = 10)]
    pub thermo_freq: u64,

    /// Trajectory dump interval in steps (must divide nsteps)
    #[arg(long, default_value_t = 100_000)]
    pub dump_freq: u64,

    /// Temperature coupling constant in ps
    #[arg(long, default_value_t = 0.2)]
    pub tau_t: f64,

    /// Pressure coupling constant in ps
    #[arg(long, default_value_t = 2.0)]
    pub tau_p: f64,

    /// Integration timestep in ps
    #[arg(long, default_value_t = 0.002)]
    pub timestep: f64,

    /// Statistical ensemble: npt-iso, npt-aniso, nvt, nve
    #[arg(long, default_value = "npt-iso")]
    pub ens: String,

    /// Initial configuration file referenced by the script
    #[arg(long, default_value = "conf.lmp")]
    pub conf: String,

    /// Also dump averaged atomic positions
    #[arg(long, default_value_t = false)]
    pub dump_avg_posi: bool,

    // ─────────────────────────────────────────────────────────────
    // Force field options
    // ─────────────────────────────────────────────────────────────
    /// Potential backend: deepmd, table
    #[arg(long, default_value = "deepmd")]
    pub backend: String,

    /// Potential reference (deepmd model or table file)
    #[arg(long, default_value = "graph.pb")]
    pub model: String,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Fixed velocity seed for reproducible scripts (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of parallel jobs for scans (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
