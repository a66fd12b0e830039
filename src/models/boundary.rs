//! # 相边界数据模型
//!
//! 定义相边界曲线的统一表示：一条曲线是一组按文件顺序排列的
//! (温度, 压强) 记录。
//!
//! ## 依赖关系
//! - 被 `boundary/` 解析、绘图与导出模块使用

use serde::{Deserialize, Serialize};

/// 相边界上的一个数据点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    /// 温度 (K)
    pub temperature: f64,

    /// 压强 (GPa)
    pub pressure: f64,
}

/// 一条相边界曲线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryCurve {
    /// 曲线名称（取自数据文件名）
    pub name: String,

    /// 数据点，保持文件中的顺序
    pub records: Vec<CurveRecord>,
}

impl BoundaryCurve {
    pub fn new(name: impl Into<String>, records: Vec<CurveRecord>) -> Self {
        BoundaryCurve {
            name: name.into(),
            records,
        }
    }

    /// 曲线是否为空
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
