//! # 平衡模拟设置数据模型
//!
//! 存储一次 LAMMPS 平衡模拟 (equilibration) 的全部物理与数值参数。
//! 通过 `EquiSettingsBuilder` 构造，构造时一次性完成全部校验，
//! 之后不可变。
//!
//! ## 依赖关系
//! - 被 `lammps/` 脚本合成模块使用
//! - 被 `commands/generate.rs` 使用

use crate::error::{LmpgenError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 统计系综类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ensemble {
    /// 等温等压，各向同性压力耦合
    NptIso,
    /// 等温等压，各向异性压力耦合
    NptAniso,
    /// 等温
    Nvt,
    /// 微正则
    Nve,
}

impl std::fmt::Display for Ensemble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ensemble::NptIso => write!(f, "npt-iso"),
            Ensemble::NptAniso => write!(f, "npt-aniso"),
            Ensemble::Nvt => write!(f, "nvt"),
            Ensemble::Nve => write!(f, "nve"),
        }
    }
}

impl FromStr for Ensemble {
    type Err = LmpgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "npt-iso" => Ok(Ensemble::NptIso),
            "npt-aniso" => Ok(Ensemble::NptAniso),
            "nvt" => Ok(Ensemble::Nvt),
            "nve" => Ok(Ensemble::Nve),
            other => Err(LmpgenError::UnsupportedEnsemble(other.to_string())),
        }
    }
}

/// 相互作用势后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backend {
    /// DeePMD 机器学习势 (pair_style deepmd)
    DeepMd,
    /// 表格化势函数 (pair_style table)
    Table,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::DeepMd => write!(f, "deepmd"),
            Backend::Table => write!(f, "table"),
        }
    }
}

impl FromStr for Backend {
    type Err = LmpgenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "deepmd" => Ok(Backend::DeepMd),
            "table" => Ok(Backend::Table),
            other => Err(LmpgenError::UnsupportedBackend(other.to_string())),
        }
    }
}

/// 平衡模拟设置
///
/// 字段一经 `build()` 校验通过即冻结；脚本合成只读取，不修改。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquiSettings {
    /// 总 MD 步数
    pub nsteps: u64,

    /// 热力学量输出间隔（步）
    pub thermo_freq: u64,

    /// 轨迹 dump 间隔（步），必须整除 nsteps
    pub dump_freq: u64,

    /// 目标温度 (K)
    pub temp: f64,

    /// 目标压强 (bar, metal 单位)
    pub pres: f64,

    /// 温度耦合时间常数 (ps)
    pub tau_t: f64,

    /// 压强耦合时间常数 (ps)
    pub tau_p: f64,

    /// 原子质量表，下标 + 1 = LAMMPS 原子类型编号
    pub mass_map: Vec<f64>,

    /// 初始构型文件引用（对本工具不透明）
    pub equi_conf: String,

    /// 积分步长 (ps)
    pub timestep: f64,

    /// 统计系综
    pub ens: Ensemble,

    /// 相互作用势后端
    pub backend: Backend,

    /// 势函数引用（deepmd 模型或表格文件路径）
    pub model: String,

    /// 是否额外 dump 平均位置
    pub if_dump_avg_posi: bool,
}

impl EquiSettings {
    /// 创建构造器
    pub fn builder() -> EquiSettingsBuilder {
        EquiSettingsBuilder::default()
    }
}

/// `EquiSettings` 构造器
///
/// 所有必需字段缺一不可，数值约束在 `build()` 中统一检查，
/// 不暴露部分构造的对象。
#[derive(Debug, Default)]
pub struct EquiSettingsBuilder {
    nsteps: Option<u64>,
    thermo_freq: Option<u64>,
    dump_freq: Option<u64>,
    temp: Option<f64>,
    pres: Option<f64>,
    tau_t: Option<f64>,
    tau_p: Option<f64>,
    mass_map: Option<Vec<f64>>,
    equi_conf: Option<String>,
    timestep: Option<f64>,
    ens: Option<Ensemble>,
    backend: Option<Backend>,
    model: Option<String>,
    if_dump_avg_posi: bool,
}

impl EquiSettingsBuilder {
    pub fn nsteps(mut self, v: u64) -> Self {
        self.nsteps = Some(v);
        self
    }

    pub fn thermo_freq(mut self, v: u64) -> Self {
        self.thermo_freq = Some(v);
        self
    }

    pub fn dump_freq(mut self, v: u64) -> Self {
        self.dump_freq = Some(v);
        self
    }

    pub fn temp(mut self, v: f64) -> Self {
        self.temp = Some(v);
        self
    }

    pub fn pres(mut self, v: f64) -> Self {
        self.pres = Some(v);
        self
    }

    pub fn tau_t(mut self, v: f64) -> Self {
        self.tau_t = Some(v);
        self
    }

    pub fn tau_p(mut self, v: f64) -> Self {
        self.tau_p = Some(v);
        self
    }

    pub fn mass_map(mut self, v: Vec<f64>) -> Self {
        self.mass_map = Some(v);
        self
    }

    pub fn equi_conf(mut self, v: impl Into<String>) -> Self {
        self.equi_conf = Some(v.into());
        self
    }

    pub fn timestep(mut self, v: f64) -> Self {
        self.timestep = Some(v);
        self
    }

    pub fn ens(mut self, v: Ensemble) -> Self {
        self.ens = Some(v);
        self
    }

    pub fn backend(mut self, v: Backend) -> Self {
        self.backend = Some(v);
        self
    }

    pub fn model(mut self, v: impl Into<String>) -> Self {
        self.model = Some(v.into());
        self
    }

    pub fn if_dump_avg_posi(mut self, v: bool) -> Self {
        self.if_dump_avg_posi = v;
        self
    }

    /// 校验并构造 `EquiSettings`
    pub fn build(self) -> Result<EquiSettings> {
        let nsteps = self.nsteps.ok_or(LmpgenError::MissingSetting("nsteps"))?;
        let thermo_freq = self
            .thermo_freq
            .ok_or(LmpgenError::MissingSetting("thermo_freq"))?;
        let dump_freq = self
            .dump_freq
            .ok_or(LmpgenError::MissingSetting("dump_freq"))?;
        let temp = self.temp.ok_or(LmpgenError::MissingSetting("temp"))?;
        let pres = self.pres.ok_or(LmpgenError::MissingSetting("pres"))?;
        let tau_t = self.tau_t.ok_or(LmpgenError::MissingSetting("tau_t"))?;
        let tau_p = self.tau_p.ok_or(LmpgenError::MissingSetting("tau_p"))?;
        let mass_map = self
            .mass_map
            .ok_or(LmpgenError::MissingSetting("mass_map"))?;
        let equi_conf = self
            .equi_conf
            .ok_or(LmpgenError::MissingSetting("equi_conf"))?;
        let timestep = self
            .timestep
            .ok_or(LmpgenError::MissingSetting("timestep"))?;
        let ens = self.ens.ok_or(LmpgenError::MissingSetting("ens"))?;
        let backend = self.backend.ok_or(LmpgenError::MissingSetting("backend"))?;
        let model = self.model.ok_or(LmpgenError::MissingSetting("model"))?;

        check_positive_int("nsteps", nsteps)?;
        check_positive_int("thermo_freq", thermo_freq)?;
        check_positive_int("dump_freq", dump_freq)?;

        // dump 重复次数 NREPEAT = nsteps / dump_freq 必须为整数
        if nsteps % dump_freq != 0 {
            return Err(LmpgenError::IndivisibleDump { nsteps, dump_freq });
        }

        check_non_negative("temp", temp)?;
        check_non_negative("pres", pres)?;
        check_positive("tau_t", tau_t)?;
        check_positive("tau_p", tau_p)?;
        check_positive("timestep", timestep)?;

        if mass_map.is_empty() {
            return Err(LmpgenError::InvalidSetting {
                name: "mass_map",
                reason: "at least one atom type is required".to_string(),
            });
        }
        for &mass in &mass_map {
            check_positive("mass_map", mass)?;
        }

        if equi_conf.is_empty() {
            return Err(LmpgenError::InvalidSetting {
                name: "equi_conf",
                reason: "must not be empty".to_string(),
            });
        }
        if model.is_empty() {
            return Err(LmpgenError::InvalidSetting {
                name: "model",
                reason: "must not be empty".to_string(),
            });
        }

        Ok(EquiSettings {
            nsteps,
            thermo_freq,
            dump_freq,
            temp,
            pres,
            tau_t,
            tau_p,
            mass_map,
            equi_conf,
            timestep,
            ens,
            backend,
            model,
            if_dump_avg_posi: self.if_dump_avg_posi,
        })
    }
}

fn check_positive_int(name: &'static str, v: u64) -> Result<()> {
    if v == 0 {
        return Err(LmpgenError::InvalidSetting {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn check_positive(name: &'static str, v: f64) -> Result<()> {
    if !(v > 0.0) {
        return Err(LmpgenError::InvalidSetting {
            name,
            reason: format!("must be greater than zero, got {}", v),
        });
    }
    Ok(())
}

fn check_non_negative(name: &'static str, v: f64) -> Result<()> {
    if !(v >= 0.0) {
        return Err(LmpgenError::InvalidSetting {
            name,
            reason: format!("must be non-negative, got {}", v),
        });
    }
    Ok(())
}
