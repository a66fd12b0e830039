//! # 相边界模块
//!
//! 提供相边界数据文件的解析、图表渲染与数据导出。
//! 与 `lammps/` 脚本合成核心互不依赖。
//!
//! ## 子模块
//! - `parser`: lcurve 数据文件解析
//! - `plot`: 图表生成
//! - `export`: 数据导出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/boundary.rs`

pub mod export;
pub mod parser;
pub mod plot;
