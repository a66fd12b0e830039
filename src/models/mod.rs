//! # 数据模型模块
//!
//! 定义统一的模拟设置和相边界数据模型。
//!
//! ## 依赖关系
//! - 被 `lammps/`, `boundary/`, `commands/` 使用
//! - 子模块: settings, boundary

pub mod boundary;
pub mod settings;

pub use boundary::{BoundaryCurve, CurveRecord};
pub use settings::{Backend, Ensemble, EquiSettings};
