//! # 脚本拼装器
//!
//! 以固定顺序调用七个区块构造函数，在每个区块前插入横幅注释，
//! 每行以单个换行符结尾。输出完全由 (设置, 种子) 决定。
//!
//! 横幅文本（含 `INITIALIZAITION` 的历史拼写）与既有脚本逐字节一致，
//! 不做修正。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 调用
//! - 使用 `lammps/sections.rs`

use crate::lammps::sections;
use crate::models::settings::EquiSettings;

/// 七个区块横幅，顺序即输出顺序
pub const SECTION_BANNERS: [&str; 7] = [
    "# --------------------- VARIABLES-------------------------",
    "# ---------------------- INITIALIZAITION ------------------",
    "# --------------------- ATOM DEFINITION ------------------",
    "# --------------------- FORCE FIELDS ---------------------",
    "# --------------------- MD SETTINGS ----------------------",
    "# --------------------- INITIALIZE -----------------------",
    "# --------------------- RUN ------------------------------",
];

/// 合成完整的平衡模拟输入脚本
///
/// `seed` 必须是调用方已经抽取好的种子；本函数是纯组合，
/// 不访问随机源，也没有任何其他副作用。
pub fn synthesize(settings: &EquiSettings, seed: u32) -> String {
    let blocks: [Vec<String>; 7] = [
        sections::variables(settings),
        sections::initialization(),
        sections::atom_definition(settings),
        sections::force_field(settings),
        sections::md_settings(settings),
        sections::initialize_velocities(seed),
        sections::run(),
    ];

    let mut lines: Vec<String> = Vec::new();
    // 重置指令位于首个横幅之前
    lines.push("clear".to_string());

    for (banner, block) in SECTION_BANNERS.iter().zip(blocks) {
        lines.push((*banner).to_string());
        lines.extend(block);
    }

    let mut script = String::new();
    for line in &lines {
        script.push_str(line);
        script.push('\n');
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::{Backend, Ensemble, EquiSettings};

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
    fn test_reference_script_matches_golden() {
        let expected = r#"clear
# --------------------- VARIABLES-------------------------
variable        NSTEPS          equal 1000000
variable        THERMO_FREQ     equal 10
variable        DUMP_FREQ       equal 100000
variable        NREPEAT         equal ${NSTEPS}/${DUMP_FREQ}
variable        TEMP            equal 400.000000
variable        PRES            equal 200000.000000
variable        TAU_T           equal 0.200000
variable        TAU_P           equal 2.000000
# ---------------------- INITIALIZAITION ------------------
units           metal
boundary        p p p
atom_style      atomic
# --------------------- ATOM DEFINITION ------------------
box             tilt large
read_data       conf.lmp
change_box      all triclinic
mass            1 118.710000
# --------------------- FORCE FIELDS ---------------------
pair_style      deepmd graph.pb
pair_coeff
# --------------------- MD SETTINGS ----------------------
neighbor        1.0 bin
timestep        0.002000
thermo          ${THERMO_FREQ}
compute         allmsd all msd
thermo_style    custom step ke pe etotal enthalpy temp press vol lx ly lz xy xz yz pxx pyy pzz pxy pxz pyz c_allmsd[*]
dump            1 all custom ${DUMP_FREQ} dump.equi id type x y z vx vy vz
fix             1 all npt temp ${TEMP} ${TEMP} ${TAU_T} iso ${PRES} ${PRES} ${TAU_P}
fix             mzero all momentum 10 linear 1 1 1
# --------------------- INITIALIZE -----------------------
velocity        all create ${TEMP} 7858
velocity        all zero linear
# --------------------- RUN ------------------------------
run             ${NSTEPS}
write_data      out.lmp
"#;
        let script = synthesize(&reference_settings(), 7858);
        assert_eq!(script, expected);
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let settings = reference_settings();
        let a = synthesize(&settings, 4321);
        let b = synthesize(&settings, 4321);
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_banner_appears_exactly_once_in_order() {
        let mut s = reference_settings();
        s.ens = Ensemble::Nve;
        s.backend = Backend::Table;
        s.if_dump_avg_posi = true;
        let script = synthesize(&s, 1);

        let mut last_pos = 0;
        for banner in SECTION_BANNERS {
            let count = script
                .lines()
                .filter(|line| *line == banner)
                .count();
            assert_eq!(count, 1, "banner missing or duplicated: {}", banner);

            let pos = script.find(banner).unwrap();
            assert!(pos > last_pos, "banner out of order: {}", banner);
            last_pos = pos;
        }
    }

    #[test]
    fn test_every_line_has_single_trailing_newline() {
        let script = synthesize(&reference_settings(), 7858);
        assert!(script.ends_with('\n'));
        assert!(!script.contains("\n\n"));
        assert_eq!(script.lines().count(), 37);
    }

    #[test]
    fn test_backend_switch_changes_only_force_field_lines() {
        let deepmd = synthesize(&reference_settings(), 7858);

        let mut s = reference_settings();
        s.backend = Backend::Table;
        let table = synthesize(&s, 7858);

        let a: Vec<&str> = deepmd.lines().collect();
        let b: Vec<&str> = table.lines().collect();
        assert_eq!(a.len(), b.len());

        let diff: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
        assert_eq!(diff, vec![20]);
        assert_eq!(b[20], "pair_style      table graph.pb");
    }

    #[test]
    fn test_avg_posi_dump_adds_exactly_one_line() {
        let plain = synthesize(&reference_settings(), 7858);

        let mut s = reference_settings();
        s.if_dump_avg_posi = true;
        let with_avg = synthesize(&s, 7858);

        let a: Vec<&str> = plain.lines().collect();
        let b: Vec<&str> = with_avg.lines().collect();
        assert_eq!(b.len(), a.len() + 1);
        assert_eq!(
            b[29],
            "dump            2 all custom ${NSTEPS} dump.avgposi id type xu yu zu"
        );

        let mut rest = b.clone();
        rest.remove(29);
        assert_eq!(rest, a);
    }

    #[test]
    fn test_nvt_script_has_no_pressure_coupling_fix() {
        let mut s = reference_settings();
        s.ens = Ensemble::Nvt;
        let script = synthesize(&s, 7858);
        assert!(script.contains("fix             1 all nvt temp ${TEMP} ${TEMP} ${TAU_T}\n"));
        assert!(!script.contains(" iso "));
        // 变量区块仍然完整声明 PRES 与 TAU_P
        assert!(script.contains("variable        PRES            equal 200000.000000\n"));
    }
}
