//! # 初速度随机种子来源
//!
//! LAMMPS `velocity create` 要求一个正整数种子。生产模式从进程级
//! 随机源抽取；测试与复现场景注入固定值。每次脚本合成只抽取一次。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `rand` crate

use rand::Rng;

/// 种子上界（不含），对应引擎接受的 16 位种子宽度
pub const SEED_BOUND: u32 = 1 << 16;

/// 种子来源抽象
pub trait SeedProvider {
    /// 抽取一个正整数种子
    fn draw(&mut self) -> u32;
}

/// 生产模式：每次从线程随机源抽取
#[derive(Debug, Default)]
pub struct EngineSeed;

impl SeedProvider for EngineSeed {
    fn draw(&mut self) -> u32 {
        // LAMMPS 要求种子为正，下界取 1
        rand::thread_rng().gen_range(1..SEED_BOUND)
    }
}

/// 固定种子：可复现运行与测试
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub u32);

impl SeedProvider for FixedSeed {
    fn draw(&mut self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_seed_is_stable() {
        let mut provider = FixedSeed(7858);
        assert_eq!(provider.draw(), 7858);
        assert_eq!(provider.draw(), 7858);
    }

    #[test]
    fn test_engine_seed_in_bounds() {
        let mut provider = EngineSeed;
        for _ in 0..100 {
            let seed = provider.draw();
            assert!(seed >= 1);
            assert!(seed < SEED_BOUND);
        }
    }
}
