//! # 相边界数据文件解析器
//!
//! 解析 lcurve 格式：每行两个空白分隔字段 `(温度, 压强)`，
//! `#` 开头为注释行，空行忽略。文件中的压强为 bar（metal 单位），
//! 解析时换算为 GPa。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 使用
//! - 使用 `models/boundary.rs`

use crate::error::{LmpgenError, Result};
use crate::models::{BoundaryCurve, CurveRecord};
use std::fs;
use std::path::Path;

/// bar → GPa 换算系数
pub const GPA_PER_BAR: f64 = 1.0e-4;

/// 解析 lcurve 文件
pub fn parse_curve_file(path: &Path) -> Result<BoundaryCurve> {
    let content = fs::read_to_string(path).map_err(|e| LmpgenError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_curve_content(&content, &curve_name_from_path(path))
}

/// 从字符串内容解析 lcurve 格式
pub fn parse_curve_content(content: &str, name: &str) -> Result<BoundaryCurve> {
    let mut records = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 2 {
            return Err(LmpgenError::ParseError {
                format: "lcurve".to_string(),
                path: name.to_string(),
                reason: format!("expected 2 fields at line {}, found {}", idx + 1, fields.len()),
            });
        }

        let temperature: f64 = fields[0].parse().map_err(|_| LmpgenError::ParseError {
            format: "lcurve".to_string(),
            path: name.to_string(),
            reason: format!("invalid temperature '{}' at line {}", fields[0], idx + 1),
        })?;
        let pressure_bar: f64 = fields[1].parse().map_err(|_| LmpgenError::ParseError {
            format: "lcurve".to_string(),
            path: name.to_string(),
            reason: format!("invalid pressure '{}' at line {}", fields[1], idx + 1),
        })?;

        records.push(CurveRecord {
            temperature,
            pressure: pressure_bar * GPA_PER_BAR,
        });
    }

    Ok(BoundaryCurve::new(name, records))
}

/// 从文件名推断曲线名称（首个 '.' 之前的部分）
fn curve_name_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.split('.').next().unwrap_or(n).to_string())
        .unwrap_or_else(|| "curve".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_curve_content() {
        let content = r#"# phase boundary of Sn
# temp(K)  pres(bar)
400.0   200000
500.0   150000.0

600.0   100000
"#;
        let curve = parse_curve_content(content, "bct-beta").unwrap();
        assert_eq!(curve.name, "bct-beta");
        assert_eq!(curve.records.len(), 3);

        // bar -> GPa
        assert!((curve.records[0].pressure - 20.0).abs() < 1e-12);
        assert!((curve.records[0].temperature - 400.0).abs() < 1e-12);
        assert!((curve.records[2].pressure - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = "# only comments\n\n#\n";
        let curve = parse_curve_content(content, "empty").unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn test_parse_rejects_short_record() {
        let content = "400.0\n";
        let err = parse_curve_content(content, "bad").unwrap_err();
        assert!(matches!(err, LmpgenError::ParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_field() {
        let content = "400.0 abc\n";
        let err = parse_curve_content(content, "bad").unwrap_err();
        assert!(matches!(err, LmpgenError::ParseError { .. }));
    }

    #[test]
    fn test_curve_name_from_path() {
        assert_eq!(
            curve_name_from_path(Path::new("/data/bct-beta.pb.out")),
            "bct-beta"
        );
        assert_eq!(curve_name_from_path(Path::new("pb.out")), "pb");
    }
}
