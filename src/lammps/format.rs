//! # 数值格式化规则
//!
//! 所有物理量一律六位小数定点表示，计数类整数一律普通十进制。
//! 输出脚本逐字节比对，任何区块都必须经由这里格式化，
//! 不得自行调用格式化宏。
//!
//! ## 依赖关系
//! - 被 `lammps/sections.rs` 使用

/// 物理量：六位小数定点，小数点固定为 '.'，无分组分隔符
pub fn fmt_f64(v: f64) -> String {
    format!("{:.6}", v)
}

/// 计数：普通十进制，无填充
pub fn fmt_u64(v: u64) -> String {
    v.to_string()
}
