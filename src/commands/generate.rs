//! # generate 命令实现
//!
//! 生成 LAMMPS 平衡模拟输入脚本。
//!
//! ## 功能
//! - 单温度点：直接写出一个脚本文件
//! - 温度扫描：每个状态点一个任务目录，并行生成
//! - 可注入固定种子以获得可复现输出
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `lammps/` 脚本合成核心
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::generate::GenerateArgs;
use crate::error::{LmpgenError, Result};
use crate::lammps::{self, EngineSeed, FixedSeed, SeedProvider};
use crate::models::settings::{Backend, Ensemble, EquiSettings};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 任务汇总表行
#[derive(Debug, Clone, Tabled)]
struct TaskRow {
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Temp (K)")]
    temp: String,
    #[tabled(rename = "Pres (bar)")]
    pres: String,
    #[tabled(rename = "Seed")]
    seed: u32,
    #[tabled(rename = "Output")]
    output: String,
}

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("LAMMPS Equilibration Input Generation");

    let temps = parse_temp_spec(&args.temp)?;
    let ens: Ensemble = args.ens.parse()?;
    let backend: Backend = args.backend.parse()?;

    // 先完成全部状态点的校验，再落盘，避免写出部分任务
    let mut points = Vec::new();
    for &temp in &temps {
        let settings = EquiSettings::builder()
            .nsteps(args.nsteps)
            .thermo_freq(args.thermo_freq)
            .dump_freq(args.dump_freq)
            .temp(temp)
            .pres(args.pres)
            .tau_t(args.tau_t)
            .tau_p(args.tau_p)
            .mass_map(args.mass.clone())
            .equi_conf(args.conf.clone())
            .timestep(args.timestep)
            .ens(ens)
            .backend(backend)
            .model(args.model.clone())
            .if_dump_avg_posi(args.dump_avg_posi)
            .build()?;
        points.push(settings);
    }

    output::print_info(&format!(
        "{} state point(s) at {} bar, ensemble '{}', backend '{}'",
        points.len(),
        args.pres,
        ens,
        backend
    ));

    if let Some(seed) = args.seed {
        output::print_warning(&format!(
            "Fixed velocity seed {} will be used for every script",
            seed
        ));
    }

    // 单点：输出即脚本文件
    if points.len() == 1 {
        let seed = draw_seed(args.seed);
        let script = lammps::synthesize(&points[0], seed);
        write_script(&args.output, &script)?;
        output::print_success(&format!(
            "Script written to '{}' (seed {})",
            args.output.display(),
            seed
        ));
        return Ok(());
    }

    // 扫描：输出是任务根目录
    if args.output.is_file() {
        return Err(LmpgenError::InvalidArgument(format!(
            "'{}' is a file; a temperature scan needs a directory output",
            args.output.display()
        )));
    }
    fs::create_dir_all(&args.output).map_err(|e| LmpgenError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    // 设置并行度
    let num_threads = if args.jobs == 0 {
        num_cpus::get()
    } else {
        args.jobs
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();

    let pb = progress::create_progress_bar(points.len() as u64, "Generating");

    let results: Vec<Result<TaskRow>> = points
        .par_iter()
        .map(|settings| {
            let task_dir = args.output.join(format!("T{:.1}", settings.temp));
            let result = generate_task(settings, &task_dir, args.seed);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    let mut rows = Vec::new();
    let mut failed = 0usize;
    for result in results {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => {
                failed += 1;
                output::print_error(&format!("{}", e));
            }
        }
    }

    if !rows.is_empty() {
        let table = Table::new(&rows);
        println!("{}", table);
    }

    output::print_separator();
    output::print_done(&format!(
        "Generated {} task(s) in '{}' ({} failed)",
        rows.len(),
        args.output.display(),
        failed
    ));

    Ok(())
}

/// 生成单个任务目录
fn generate_task(settings: &EquiSettings, task_dir: &Path, fixed_seed: Option<u32>) -> Result<TaskRow> {
    fs::create_dir_all(task_dir).map_err(|e| LmpgenError::FileWriteError {
        path: task_dir.display().to_string(),
        source: e,
    })?;

    let seed = draw_seed(fixed_seed);
    let script = lammps::synthesize(settings, seed);
    let script_path = task_dir.join("in.lmp");
    write_script(&script_path, &script)?;

    Ok(TaskRow {
        task: task_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        temp: format!("{:.1}", settings.temp),
        pres: format!("{:.1}", settings.pres),
        seed,
        output: script_path.display().to_string(),
    })
}

/// 每次合成恰好抽取一次种子
fn draw_seed(fixed: Option<u32>) -> u32 {
    match fixed {
        Some(s) => FixedSeed(s).draw(),
        None => EngineSeed.draw(),
    }
}

/// 写出脚本文件
fn write_script(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| LmpgenError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 解析温度规格字符串
///
/// 支持三种形式：单值 "400"、列表 "400,600,800"、范围 "200:1000:100"
/// （含端点，步长为正）。
fn parse_temp_spec(spec: &str) -> Result<Vec<f64>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(LmpgenError::InvalidRange(spec.to_string()));
    }

    if spec.contains(':') {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() != 3 {
            return Err(LmpgenError::InvalidRange(spec.to_string()));
        }
        let start: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| LmpgenError::InvalidRange(spec.to_string()))?;
        let stop: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| LmpgenError::InvalidRange(spec.to_string()))?;
        let step: f64 = parts[2]
            .trim()
            .parse()
            .map_err(|_| LmpgenError::InvalidRange(spec.to_string()))?;

        if step <= 0.0 || stop < start {
            return Err(LmpgenError::InvalidRange(spec.to_string()));
        }

        let mut temps = Vec::new();
        let mut t = start;
        // 容忍浮点累加误差，保证端点包含在内
        while t <= stop + 1e-9 {
            temps.push(t);
            t += step;
        }
        return Ok(temps);
    }

    let temps: Vec<f64> = spec
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| LmpgenError::InvalidRange(spec.to_string()))
        })
        .collect::<Result<_>>()?;

    if temps.is_empty() {
        return Err(LmpgenError::InvalidRange(spec.to_string()));
    }
    Ok(temps)
}
