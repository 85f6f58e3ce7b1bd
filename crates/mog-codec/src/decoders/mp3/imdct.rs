//! MP3 IMDCT, 加窗, 重叠相加与频率反转
//!
//! 每个子带的 18 条频谱线经 IMDCT 得到 36 个时域样本, 按块类型加窗后,
//! 前 18 个与上一 granule 保留的尾部相加输出, 后 18 个成为新的尾部.

use std::f64::consts::PI;
use std::sync::OnceLock;

use mog_core::{MogError, MogResult};

use super::side_info::BlockType;
use super::spectrum::GRANULE_LINES;

/// 子带数
pub const SUBBANDS: usize = 32;
/// 每个子带每个 granule 的样本数
pub const SUBBAND_SAMPLES: usize = 18;

/// IMDCT 余弦表: cos(π/72 · (2i + 1 + 18) · (2k + 1))
static IMDCT_COS: OnceLock<[[f32; 18]; 36]> = OnceLock::new();

fn imdct_cos() -> &'static [[f32; 18]; 36] {
    IMDCT_COS.get_or_init(|| {
        let mut table = [[0.0f32; 18]; 36];
        for (i, row) in table.iter_mut().enumerate() {
            for (k, c) in row.iter_mut().enumerate() {
                let angle = PI / 72.0 * (2 * i + 1 + 18) as f64 * (2 * k + 1) as f64;
                *c = angle.cos() as f32;
            }
        }
        table
    })
}

/// 长块窗口 [Normal, Start, Stop]
static WINDOWS: OnceLock<[[f32; 36]; 3]> = OnceLock::new();

fn windows() -> &'static [[f32; 36]; 3] {
    WINDOWS.get_or_init(|| {
        let long = |i: usize| (PI / 36.0 * (i as f64 + 0.5)).sin();
        let short = |i: usize| (PI / 12.0 * (i as f64 + 0.5)).sin();
        let mut w = [[0.0f32; 36]; 3];
        for i in 0..36 {
            w[0][i] = long(i) as f32;
            w[1][i] = match i {
                0..18 => long(i),
                18..24 => 1.0,
                24..30 => short(i - 18),
                _ => 0.0,
            } as f32;
            w[2][i] = match i {
                0..6 => 0.0,
                6..12 => short(i - 6),
                12..18 => 1.0,
                _ => long(i),
            } as f32;
        }
        w
    })
}

/// 选择块类型对应的窗口, 短块不支持
fn window_for(block_type: BlockType) -> MogResult<&'static [f32; 36]> {
    let w = windows();
    match block_type {
        BlockType::Normal => Ok(&w[0]),
        BlockType::Start => Ok(&w[1]),
        BlockType::Stop => Ok(&w[2]),
        BlockType::Short => Err(MogError::Unsupported("短块 (block_type 2) 加窗".into())),
    }
}

/// 18 点输入, 36 点输出的 IMDCT (不归一化)
pub fn imdct36(input: &[f32], output: &mut [f32; 36]) {
    let table = imdct_cos();
    for (out, row) in output.iter_mut().zip(table.iter()) {
        *out = input.iter().zip(row.iter()).map(|(x, c)| x * c).sum();
    }
}

/// 各子带的重叠尾部, 跨 granule 和跨帧保持
#[derive(Debug, Clone)]
pub struct OverlapState {
    tails: [[f32; SUBBAND_SAMPLES]; SUBBANDS],
}

impl Default for OverlapState {
    fn default() -> Self {
        Self {
            tails: [[0.0; SUBBAND_SAMPLES]; SUBBANDS],
        }
    }
}

impl OverlapState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有尾部是否均为 0
    #[cfg(test)]
    pub fn is_silent(&self) -> bool {
        self.tails.iter().flatten().all(|&v| v == 0.0)
    }
}

/// 对一个 granule 完成 IMDCT, 加窗, 重叠相加和频率反转
///
/// 输出按时间排列: `rows[i][sb]` 为子带 sb 的第 i 个样本.
pub fn hybrid_synthesis(
    xr: &[f32; GRANULE_LINES],
    block_type: BlockType,
    overlap: &mut OverlapState,
    rows: &mut [[f32; SUBBANDS]; SUBBAND_SAMPLES],
) -> MogResult<()> {
    let window = window_for(block_type)?;
    let mut block = [0.0f32; 36];

    for sb in 0..SUBBANDS {
        let lines = &xr[sb * SUBBAND_SAMPLES..(sb + 1) * SUBBAND_SAMPLES];
        imdct36(lines, &mut block);
        for (v, w) in block.iter_mut().zip(window.iter()) {
            *v *= w;
        }

        let tail = &mut overlap.tails[sb];
        for i in 0..SUBBAND_SAMPLES {
            rows[i][sb] = block[i] + tail[i];
            tail[i] = block[SUBBAND_SAMPLES + i];
        }
    }

    frequency_inversion(rows);
    Ok(())
}

/// 频率反转: 奇数子带的奇数样本取反
pub fn frequency_inversion(rows: &mut [[f32; SUBBANDS]; SUBBAND_SAMPLES]) {
    for row in rows.iter_mut().skip(1).step_by(2) {
        for sample in row.iter_mut().skip(1).step_by(2) {
            *sample = -*sample;
        }
    }
}
