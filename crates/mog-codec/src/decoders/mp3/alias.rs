//! MP3 抗混叠处理 (Alias Reduction)
//!
//! 对相邻子带边界两侧各 8 条频谱线做蝶形运算, 仅用于长块.

use std::sync::OnceLock;

use super::spectrum::GRANULE_LINES;
use super::tables::ALIAS_CI;

/// 蝶形系数 (cs, ca): cs = 1 / sqrt(1 + ci^2), ca = ci / sqrt(1 + ci^2)
static BUTTERFLY: OnceLock<([f32; 8], [f32; 8])> = OnceLock::new();

fn butterfly() -> &'static ([f32; 8], [f32; 8]) {
    BUTTERFLY.get_or_init(|| {
        let mut cs = [0.0f32; 8];
        let mut ca = [0.0f32; 8];
        for (i, &ci) in ALIAS_CI.iter().enumerate() {
            let den = (1.0 + ci * ci).sqrt();
            cs[i] = (1.0 / den) as f32;
            ca[i] = (ci / den) as f32;
        }
        (cs, ca)
    })
}

/// 对一个 granule 的 576 条频谱线做抗混叠
pub fn alias_reduce(xr: &mut [f32; GRANULE_LINES]) {
    let (cs, ca) = butterfly();
    for boundary in (18..GRANULE_LINES).step_by(18) {
        for i in 0..8 {
            let lower = boundary - 1 - i;
            let upper = boundary + i;
            let a = xr[lower];
            let b = xr[upper];
            xr[lower] = a * cs[i] - b * ca[i];
            xr[upper] = b * cs[i] + a * ca[i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients() {
        let (cs, ca) = butterfly();
        assert!((cs[0] - 0.857_492_9).abs() < 1e-6);
        assert!((ca[0] + 0.514_495_8).abs() < 1e-6);
        assert!((ca[7] + 0.003_699_97).abs() < 1e-6);
        for i in 0..8 {
            // cs^2 + ca^2 = 1
            assert!((cs[i] * cs[i] + ca[i] * ca[i] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_butterfly_touches_boundaries_only() {
        let mut xr = [1.0f32; GRANULE_LINES];
        alias_reduce(&mut xr);
        // 每个子带中间的 2 条线 (8, 9) 不参与运算
        for sb in 0..32 {
            assert_eq!(xr[sb * 18 + 8], 1.0);
            assert_eq!(xr[sb * 18 + 9], 1.0);
        }
        // 第一个子带的低端与最后一个子带的高端没有相邻边界
        assert_eq!(xr[0], 1.0);
        assert_eq!(xr[GRANULE_LINES - 1], 1.0);
        assert_ne!(xr[17], 1.0);
        assert_ne!(xr[18], 1.0);
    }

    #[test]
    fn test_energy_preserved() {
        let mut xr = [0.0f32; GRANULE_LINES];
        for (i, v) in xr.iter_mut().enumerate() {
            *v = ((i * 7919) % 13) as f32 - 6.0;
        }
        let before: f32 = xr.iter().map(|v| v * v).sum();
        alias_reduce(&mut xr);
        let after: f32 = xr.iter().map(|v| v * v).sum();
        assert!((before - after).abs() / before < 1e-4);
    }

    #[test]
    fn test_zero_stays_zero() {
        let mut xr = [0.0f32; GRANULE_LINES];
        alias_reduce(&mut xr);
        assert!(xr.iter().all(|&v| v == 0.0));
    }
}
