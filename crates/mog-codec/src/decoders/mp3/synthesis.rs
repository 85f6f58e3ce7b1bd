//! MP3 多相合成滤波器组 (Polyphase Synthesis Filterbank)
//!
//! 每次输入 32 个子带样本, 输出 32 个 PCM 样本:
//! 1. V 缓冲区整体后移 64 项, 以矩阵 N[i][k] = cos((16 + i)(2k + 1)π / 64) 计算 64 个新值
//! 2. 由 V 交错构造 U
//! 3. U 与 512 点窗口 D 逐项相乘得到 W
//! 4. 每个输出样本为 W 中以 32 为步长的各项之和

use std::f64::consts::PI;
use std::sync::OnceLock;

use super::imdct::SUBBANDS;
use super::tables::SYNTH_WINDOW_HALF;

/// V 缓冲区长度
const V_LEN: usize = 1024;
/// 构造 U 时的交错轮数
const U_ROUNDS: usize = 7;
/// 每个输出样本累加的 W 项数
const OUTPUT_TAPS: usize = 15;

/// 矩阵系数 N[i][k]
static MATRIX: OnceLock<[[f32; SUBBANDS]; 64]> = OnceLock::new();

fn matrix() -> &'static [[f32; SUBBANDS]; 64] {
    MATRIX.get_or_init(|| {
        let mut n = [[0.0f32; SUBBANDS]; 64];
        for (i, row) in n.iter_mut().enumerate() {
            for (k, c) in row.iter_mut().enumerate() {
                *c = ((16 + i) as f64 * (2 * k + 1) as f64 * PI / 64.0).cos() as f32;
            }
        }
        n
    })
}

/// 合成窗口 D (512 点)
static WINDOW: OnceLock<[f32; 512]> = OnceLock::new();

fn window() -> &'static [f32; 512] {
    WINDOW.get_or_init(|| {
        let mut d = [0.0f32; 512];
        for (i, &raw) in SYNTH_WINDOW_HALF.iter().enumerate() {
            let v = raw as f32 / 65536.0;
            d[i] = v;
            if i > 0 && i < 256 {
                d[512 - i] = if i % 64 == 0 { v } else { -v };
            }
        }
        d
    })
}

/// 合成滤波器状态, 每个声道一个
#[derive(Debug, Clone)]
pub struct SynthesisFilter {
    v: Box<[f32; V_LEN]>,
}

impl Default for SynthesisFilter {
    fn default() -> Self {
        Self {
            v: Box::new([0.0; V_LEN]),
        }
    }
}

impl SynthesisFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// V 缓冲区是否全为 0
    #[cfg(test)]
    pub fn is_silent(&self) -> bool {
        self.v.iter().all(|&x| x == 0.0)
    }

    /// 合成一行 32 个子带样本
    pub fn synthesize(&mut self, subbands: &[f32; SUBBANDS], pcm: &mut [f32; SUBBANDS]) {
        let n = matrix();
        let d = window();

        self.v.copy_within(0..V_LEN - 64, 64);
        for (i, row) in n.iter().enumerate() {
            self.v[i] = row.iter().zip(subbands.iter()).map(|(c, s)| c * s).sum();
        }

        let mut u = [0.0f32; 512];
        for i in 0..U_ROUNDS {
            for j in 0..32 {
                u[i * 64 + j] = self.v[i * 128 + j];
                u[i * 64 + 32 + j] = self.v[i * 128 + 96 + j];
            }
        }

        for (j, out) in pcm.iter_mut().enumerate() {
            *out = (0..OUTPUT_TAPS)
                .map(|i| {
                    let idx = j + 32 * i;
                    u[idx] * d[idx]
                })
                .sum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_symmetry() {
        let d = window();
        assert_eq!(d[0], 0.0);
        assert_eq!(d[1], -1.0 / 65536.0);
        assert_eq!(d[511], 1.0 / 65536.0);
        assert!((d[256] - 1.144_989).abs() < 1e-6);
        // 64 的整数倍处不取反
        assert_eq!(d[448], d[64]);
        assert_eq!(d[320], d[192]);
        assert_eq!(d[300], -d[212]);
    }

    #[test]
    fn test_matrix() {
        let n = matrix();
        // N[16][k] = cos((2k + 1)π / 2) = 0
        assert!(n[16].iter().all(|v| v.abs() < 1e-6));
        assert!((n[0][0] - (PI / 4.0).cos() as f32).abs() < 1e-7);
    }

    #[test]
    fn test_silence_in_silence_out() {
        let mut filter = SynthesisFilter::new();
        let mut pcm = [1.0f32; SUBBANDS];
        filter.synthesize(&[0.0; SUBBANDS], &mut pcm);
        assert!(pcm.iter().all(|&v| v == 0.0));
        assert!(filter.is_silent());
    }

    #[test]
    fn test_history_drains() {
        let mut filter = SynthesisFilter::new();
        let mut pcm = [0.0f32; SUBBANDS];
        let mut input = [0.0f32; SUBBANDS];
        input[0] = 1.0;
        filter.synthesize(&input, &mut pcm);
        assert!(!filter.is_silent());

        // V 长 1024, 每行后移 64: 16 行静音后完全清空
        for _ in 0..16 {
            filter.synthesize(&[0.0; SUBBANDS], &mut pcm);
        }
        assert!(filter.is_silent());
        assert!(pcm.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_last_column_uses_history() {
        // U 的第 31/63 列取自 V, 输出样本 31 因此不恒为 0
        let mut filter = SynthesisFilter::new();
        let mut pcm = [0.0f32; SUBBANDS];
        let mut input = [0.0f32; SUBBANDS];
        input[0] = 1.0;
        filter.synthesize(&input, &mut pcm);

        let expect = matrix()[31][0] * window()[31];
        assert!(expect != 0.0);
        assert!((pcm[31] - expect).abs() < 1e-9, "样本 31 = {}", pcm[31]);
    }

    #[test]
    fn test_dc_response() {
        // 子带 0 的恒定输入在滤波器稳定后以单位增益输出
        let mut filter = SynthesisFilter::new();
        let mut pcm = [0.0f32; SUBBANDS];
        let mut input = [0.0f32; SUBBANDS];
        input[0] = 0.5;
        for _ in 0..32 {
            filter.synthesize(&input, &mut pcm);
        }
        let peak = pcm.iter().fold(0.0f32, |m, v| m.max(v.abs()));
        assert!((peak - 0.5).abs() < 0.01, "峰值 {}", peak);
    }
}
