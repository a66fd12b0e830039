//! # 脚本区块构造函数
//!
//! 每个区块是一个纯函数：`EquiSettings`（与种子）进，有序文本行出。
//! 区块之间无共享状态、无 I/O；行内容与原脚本逐字节一致。
//!
//! ## 区块顺序（由 assembler 固定）
//! 1. variables  2. initialization  3. atom definition  4. force field
//! 5. md settings  6. initialize velocities  7. run
//!
//! ## 依赖关系
//! - 被 `lammps/assembler.rs` 调用
//! - 使用 `lammps/format.rs`, `models/settings.rs`

use crate::lammps::format::{fmt_f64, fmt_u64};
use crate::models::settings::{Backend, Ensemble, EquiSettings};

/// variable 声明行：指令与变量名各占 16 列
fn variable_line(name: &str, value: &str) -> String {
    format!("variable        {:<16}equal {}", name, value)
}

/// 变量声明区块
///
/// NREPEAT 以引擎端表达式给出，不在此处预先求值。
pub fn variables(s: &EquiSettings) -> Vec<String> {
    vec![
        variable_line("NSTEPS", &fmt_u64(s.nsteps)),
        variable_line("THERMO_FREQ", &fmt_u64(s.thermo_freq)),
        variable_line("DUMP_FREQ", &fmt_u64(s.dump_freq)),
        variable_line("NREPEAT", "${NSTEPS}/${DUMP_FREQ}"),
        variable_line("TEMP", &fmt_f64(s.temp)),
        variable_line("PRES", &fmt_f64(s.pres)),
        variable_line("TAU_T", &fmt_f64(s.tau_t)),
        variable_line("TAU_P", &fmt_f64(s.tau_p)),
    ]
}

/// 初始化区块，内容与设置无关
pub fn initialization() -> Vec<String> {
    vec![
        "units           metal".to_string(),
        "boundary        p p p".to_string(),
        "atom_style      atomic".to_string(),
    ]
}

/// 原子定义区块：盒子、构型读入、逐类型质量
pub fn atom_definition(s: &EquiSettings) -> Vec<String> {
    let mut lines = vec![
        "box             tilt large".to_string(),
        format!("read_data       {}", s.equi_conf),
        "change_box      all triclinic".to_string(),
    ];
    // 原子类型编号从 1 开始
    for (idx, mass) in s.mass_map.iter().enumerate() {
        lines.push(format!("mass            {} {}", idx + 1, fmt_f64(*mass)));
    }
    lines
}

/// 力场区块：每种后端固定两行，系数行留空由外部提供
pub fn force_field(s: &EquiSettings) -> Vec<String> {
    let pair_style = match s.backend {
        Backend::DeepMd => format!("pair_style      deepmd {}", s.model),
        Backend::Table => format!("pair_style      table {}", s.model),
    };
    vec![pair_style, "pair_coeff".to_string()]
}

/// MD 设置区块：邻居表、步长、热力学输出、dump 与积分器
pub fn md_settings(s: &EquiSettings) -> Vec<String> {
    let mut lines = vec![
        "neighbor        1.0 bin".to_string(),
        format!("timestep        {}", fmt_f64(s.timestep)),
        "thermo          ${THERMO_FREQ}".to_string(),
        "compute         allmsd all msd".to_string(),
        "thermo_style    custom step ke pe etotal enthalpy temp press vol lx ly lz xy xz yz pxx pyy pzz pxy pxz pyz c_allmsd[*]"
            .to_string(),
        "dump            1 all custom ${DUMP_FREQ} dump.equi id type x y z vx vy vz"
            .to_string(),
    ];

    if s.if_dump_avg_posi {
        lines.push(
            "dump            2 all custom ${NSTEPS} dump.avgposi id type xu yu zu".to_string(),
        );
    }

    lines.push(integrator_fix(s.ens));
    lines.push("fix             mzero all momentum 10 linear 1 1 1".to_string());
    lines
}

/// 系综对应的积分器 fix 行
fn integrator_fix(ens: Ensemble) -> String {
    match ens {
        Ensemble::NptIso => {
            "fix             1 all npt temp ${TEMP} ${TEMP} ${TAU_T} iso ${PRES} ${PRES} ${TAU_P}"
                .to_string()
        }
        Ensemble::NptAniso => {
            "fix             1 all npt temp ${TEMP} ${TEMP} ${TAU_T} aniso ${PRES} ${PRES} ${TAU_P}"
                .to_string()
        }
        Ensemble::Nvt => {
            "fix             1 all nvt temp ${TEMP} ${TEMP} ${TAU_T}".to_string()
        }
        Ensemble::Nve => "fix             1 all nve".to_string(),
    }
}

/// 初速度区块：按温度与种子生成，随后清零净动量
pub fn initialize_velocities(seed: u32) -> Vec<String> {
    vec![
        format!("velocity        all create ${{TEMP}} {}", seed),
        "velocity        all zero linear".to_string(),
    ]
}

/// 运行区块：步数引用变量而非字面值，收尾写出末态
pub fn run() -> Vec<String> {
    vec![
        "run             ${NSTEPS}".to_string(),
        "write_data      out.lmp".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_settings() -> EquiSettings {
        EquiSettings::builder()
            .nsteps(1_000_000)
            .thermo_freq(10)
            .dump_freq(100_000)
            .temp(400.0)
            .pres(200_000.0)
            .tau_t(0.2)
            .tau_p(2.0)
            .mass_map(vec![118.71])
            .equi_conf("conf.lmp")
            .timestep(0.002)
            .ens(Ensemble::NptIso)
            .backend(Backend::DeepMd)
            .model("graph.pb")
            .build()
            .unwrap()
    }

    #[test]
    fn test_variables_lines() {
        let lines = variables(&reference_settings());
        assert_eq!(
            lines,
            vec![
                "variable        NSTEPS          equal 1000000",
                "variable        THERMO_FREQ     equal 10",
                "variable        DUMP_FREQ       equal 100000",
                "variable        NREPEAT         equal ${NSTEPS}/${DUMP_FREQ}",
                "variable        TEMP            equal 400.000000",
                "variable        PRES            equal 200000.000000",
                "variable        TAU_T           equal 0.200000",
                "variable        TAU_P           equal 2.000000",
            ]
        );
    }

    #[test]
    fn test_atom_definition_mass_ids_are_one_based() {
        let mut s = reference_settings();
        s.mass_map = vec![118.71, 15.999];
        let lines = atom_definition(&s);
        assert_eq!(lines[3], "mass            1 118.710000");
        assert_eq!(lines[4], "mass            2 15.999000");
    }

    #[test]
    fn test_force_field_deepmd() {
        let lines = force_field(&reference_settings());
        assert_eq!(
            lines,
            vec!["pair_style      deepmd graph.pb", "pair_coeff"]
        );
    }

    #[test]
    fn test_force_field_table() {
        let mut s = reference_settings();
        s.backend = Backend::Table;
        s.model = "sn.table".to_string();
        let lines = force_field(&s);
        assert_eq!(lines, vec!["pair_style      table sn.table", "pair_coeff"]);
    }

    #[test]
    fn test_integrator_fix_variants() {
        assert_eq!(
            integrator_fix(Ensemble::NptIso),
            "fix             1 all npt temp ${TEMP} ${TEMP} ${TAU_T} iso ${PRES} ${PRES} ${TAU_P}"
        );
        assert_eq!(
            integrator_fix(Ensemble::NptAniso),
            "fix             1 all npt temp ${TEMP} ${TEMP} ${TAU_T} aniso ${PRES} ${PRES} ${TAU_P}"
        );
        assert_eq!(
            integrator_fix(Ensemble::Nvt),
            "fix             1 all nvt temp ${TEMP} ${TEMP} ${TAU_T}"
        );
        assert_eq!(integrator_fix(Ensemble::Nve), "fix             1 all nve");
    }

    #[test]
    fn test_md_settings_avg_posi_adds_one_dump() {
        let without = md_settings(&reference_settings());

        let mut s = reference_settings();
        s.if_dump_avg_posi = true;
        let with = md_settings(&s);

        assert_eq!(with.len(), without.len() + 1);
        assert_eq!(
            with[6],
            "dump            2 all custom ${NSTEPS} dump.avgposi id type xu yu zu"
        );

        // 其余行保持不变
        let mut rest = with.clone();
        rest.remove(6);
        assert_eq!(rest, without);
    }

    #[test]
    fn test_momentum_fix_always_last() {
        for ens in [
            Ensemble::NptIso,
            Ensemble::NptAniso,
            Ensemble::Nvt,
            Ensemble::Nve,
        ] {
            let mut s = reference_settings();
            s.ens = ens;
            let lines = md_settings(&s);
            assert_eq!(
                lines.last().unwrap(),
                "fix             mzero all momentum 10 linear 1 1 1"
            );
        }
    }

    #[test]
    fn test_initialize_velocities_uses_seed() {
        let lines = initialize_velocities(7858);
        assert_eq!(
            lines,
            vec![
                "velocity        all create ${TEMP} 7858",
                "velocity        all zero linear",
            ]
        );
    }

    #[test]
    fn test_run_references_variable() {
        let lines = run();
        assert_eq!(lines, vec!["run             ${NSTEPS}", "write_data      out.lmp"]);
    }
}
