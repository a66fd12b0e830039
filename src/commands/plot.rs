//! # plot 命令实现
//!
//! 从 lcurve 数据文件绘制相边界曲线。
//!
//! ## 功能
//! - 收集单文件或目录下匹配模式的数据文件
//! - 解析 (温度, 压强) 记录并换算单位
//! - 渲染 PNG/SVG 相图，可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的参数
//! - 使用 `boundary/` 解析、绘图与导出
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::boundary::{export, parser, plot};
use crate::cli::plot::PlotArgs;
use crate::error::{LmpgenError, Result};
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Phase Boundary Plot");

    if !args.input.exists() {
        return Err(LmpgenError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = collect_curve_files(&args.input, &args.pattern, args.recursive)?;
    if files.is_empty() {
        return Err(LmpgenError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }
    output::print_info(&format!("Found {} curve file(s)", files.len()));

    let pb = progress::create_progress_bar(files.len() as u64, "Parsing");
    let mut curves = Vec::new();

    for path in &files {
        match parser::parse_curve_file(path) {
            Ok(curve) if curve.is_empty() => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "{}: no data points, skipping",
                        path.display()
                    ));
                });
            }
            Ok(curve) => curves.push(curve),
            Err(e) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", path.display(), e));
                });
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if curves.is_empty() {
        return Err(LmpgenError::Other("No curve data to plot".to_string()));
    }

    output::print_info(&format!("Plotting {} curve(s)", curves.len()));

    let spinner = progress::create_spinner("Rendering chart");
    plot::generate_boundary_plot(
        &curves,
        &args.output,
        &args.title,
        args.width,
        args.height,
        (args.pres_min, args.pres_max),
        (args.temp_min, args.temp_max),
        args.svg,
    )?;
    spinner.finish_and_clear();

    output::print_success(&format!(
        "Phase diagram saved to '{}'",
        args.output.display()
    ));

    if let Some(ref csv_path) = args.export_csv {
        export::curves_to_csv(&curves, csv_path)?;
        output::print_success(&format!(
            "Curve data exported to '{}'",
            csv_path.display()
        ));
    }

    Ok(())
}

/// 收集输入文件
fn collect_curve_files(input: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let walker = if recursive {
        WalkDir::new(input)
    } else {
        WalkDir::new(input).max_depth(1)
    };

    let glob_pattern = glob::Pattern::new(pattern).map_err(|e| {
        LmpgenError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let mut files = Vec::new();
    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }

    files.sort();
    Ok(files)
}
