//! # 相边界图表生成
//!
//! 使用 `plotters` 库绘制温度-压强相图。
//!
//! ## 功能
//! - 多条曲线叠加，颜色循环
//! - 每条曲线在首个数据点处标注温度
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/boundary.rs` 的 BoundaryCurve 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{LmpgenError, Result};
use crate::models::BoundaryCurve;

use plotters::prelude::*;
use std::path::Path;

/// 曲线颜色循环表
const CURVE_COLORS: [RGBColor; 6] = [
    RGBColor(0, 153, 51),
    RGBColor(0, 102, 204),
    RGBColor(204, 0, 0),
    RGBColor(153, 0, 153),
    RGBColor(230, 126, 0),
    RGBColor(0, 153, 153),
];

/// 生成相边界图表
#[allow(clippy::too_many_arguments)]
pub fn generate_boundary_plot(
    curves: &[BoundaryCurve],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    pres_range: (f64, f64),
    temp_range: (f64, f64),
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_boundary_chart(&root, curves, title, pres_range, temp_range)?;
        root.present()
            .map_err(|e| LmpgenError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_boundary_chart(&root, curves, title, pres_range, temp_range)?;
        root.present()
            .map_err(|e| LmpgenError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制相图的核心逻辑
fn draw_boundary_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    curves: &[BoundaryCurve],
    title: &str,
    pres_range: (f64, f64),
    temp_range: (f64, f64),
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(pres_range.0..pres_range.1, temp_range.0..temp_range.1)
        .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Pressure (GPa)")
        .y_desc("Temperature (K)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;

    for (idx, curve) in curves.iter().enumerate() {
        let color = CURVE_COLORS[idx % CURVE_COLORS.len()];
        let points: Vec<(f64, f64)> = curve
            .records
            .iter()
            .map(|r| (r.pressure, r.temperature))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
            .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?
            .label(curve.name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(
                points
                    .iter()
                    .map(|(p, t)| Circle::new((*p, *t), 3, color.filled())),
            )
            .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;

        // 在首个数据点处标注温度
        if let Some((p0, t0)) = points.first() {
            let label = format!("{:.1}", t0);
            chart
                .draw_series(std::iter::once(Text::new(
                    label,
                    (*p0, *t0),
                    ("sans-serif", 12).into_font().color(&BLACK),
                )))
                .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| LmpgenError::Other(format!("{:?}", e)))?;

    Ok(())
}
