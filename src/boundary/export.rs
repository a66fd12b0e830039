//! # 相边界数据导出
//!
//! 将解析后的相边界曲线导出为 CSV，便于电子表格或脚本后处理。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/boundary.rs` 的 BoundaryCurve 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{LmpgenError, Result};
use crate::models::BoundaryCurve;

use std::path::Path;

/// 导出曲线集合为 CSV 格式
pub fn curves_to_csv(curves: &[BoundaryCurve], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(LmpgenError::CsvError)?;

    wtr.write_record(["curve", "temperature_K", "pressure_GPa"])
        .map_err(LmpgenError::CsvError)?;

    for curve in curves {
        for record in &curve.records {
            wtr.write_record([
                curve.name.clone(),
                format!("{:.6}", record.temperature),
                format!("{:.6}", record.pressure),
            ])
            .map_err(LmpgenError::CsvError)?;
        }
    }

    wtr.flush().map_err(|e| LmpgenError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
