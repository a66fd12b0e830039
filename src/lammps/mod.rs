//! # LAMMPS 输入脚本合成模块
//!
//! 从 `EquiSettings` 合成逐字节确定的平衡模拟控制脚本。
//!
//! ## 子模块
//! - `format`: 数值格式化规则（六位小数定点 / 普通整数）
//! - `sections`: 七个脚本区块的纯构造函数
//! - `assembler`: 固定顺序拼装与区块横幅
//! - `seed`: 初速度随机种子来源
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/settings.rs`

pub mod assembler;
pub mod format;
pub mod sections;
pub mod seed;

pub use assembler::synthesize;
pub use seed::{EngineSeed, FixedSeed, SeedProvider};
