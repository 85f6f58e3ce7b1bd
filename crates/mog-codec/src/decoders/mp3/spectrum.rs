//! MP3 频谱解码: Huffman 数据 (part 3) 与反量化
//!
//! 每个 granule 产出 576 条频谱线. big_values 区按区域切换 Huffman 码表,
//! count1 区以四元组解码, 直到 granule 的位预算耗尽. 每条非零频谱线按
//! `sign * |v|^(4/3) * 2^((global_gain - 210) / 4 - S * (scalefac + preflag * pretab))`
//! 反量化, 其中 S 由 scalefac_scale 选择 2 或 4.

use std::io::Read;

use mog_core::{BitReader, MogError, MogResult};

use super::huffman::{decode_pair, decode_quad};
use super::scalefactor::ScaleFactors;
use super::side_info::GranuleInfo;
use super::tables::{PRETAB, SFB_LONG_WIDTHS};

/// 每个 granule 的频谱线数
pub const GRANULE_LINES: usize = 576;

/// 2^(k/4), k = 0..3
const QUARTER_POW2: [f64; 4] = [
    1.0,
    1.189_207_115_002_721,
    std::f64::consts::SQRT_2,
    1.681_792_830_507_429,
];

/// 计算频带的反量化因子
///
/// 指数以 1/4 为单位整数运算, 避免 powf 的舍入误差: global_gain 每增加 4,
/// 因子严格翻倍.
pub fn band_factor(info: &GranuleInfo, sf: &ScaleFactors, band: usize) -> f64 {
    let s: i32 = if info.scalefac_scale { 4 } else { 2 };
    let pretab = if info.preflag { PRETAB[band] } else { 0 };
    let shift = (sf.long[band] + pretab) as i32;
    let quarter_exp = info.global_gain as i32 - 210 - 4 * s * shift;
    2f64.powi(quarter_exp.div_euclid(4)) * QUARTER_POW2[quarter_exp.rem_euclid(4) as usize]
}

/// 反量化单个值: sign(v) * |v|^(4/3) * factor
pub fn requantize(value: i32, factor: f64) -> f32 {
    if value == 0 {
        return 0.0;
    }
    let magnitude = f64::from(value.unsigned_abs()).powf(4.0 / 3.0) * factor;
    (if value < 0 { -magnitude } else { magnitude }) as f32
}

/// 频谱线写入游标, 跟踪当前比例因子频带
struct LineWriter<'a> {
    info: &'a GranuleInfo,
    sf: &'a ScaleFactors,
    widths: &'a [usize; 22],
    xr: &'a mut [f32; GRANULE_LINES],
    pos: usize,
    band: usize,
    band_end: usize,
    factor: f64,
}

impl<'a> LineWriter<'a> {
    fn new(
        info: &'a GranuleInfo,
        sf: &'a ScaleFactors,
        widths: &'a [usize; 22],
        xr: &'a mut [f32; GRANULE_LINES],
    ) -> Self {
        Self {
            info,
            sf,
            widths,
            xr,
            pos: 0,
            band: 0,
            band_end: widths[0],
            factor: band_factor(info, sf, 0),
        }
    }

    fn push(&mut self, value: i32) {
        if self.pos == self.band_end && self.band + 1 < self.widths.len() {
            self.band += 1;
            self.band_end += self.widths[self.band];
            self.factor = band_factor(self.info, self.sf, self.band);
        }
        self.xr[self.pos] = requantize(value, self.factor);
        self.pos += 1;
    }

    /// 当前频谱线所在的频带
    fn band_of_next(&self) -> usize {
        if self.pos == self.band_end {
            self.band + 1
        } else {
            self.band
        }
    }
}

/// big_values 区的区域边界 (以频带计): 区域 0 结束频带, 区域 1 结束频带
fn region_bounds(info: &GranuleInfo) -> (usize, usize) {
    if info.block_split {
        (8, 22)
    } else {
        let region0 = usize::from(info.region_address1) + 1;
        (region0, region0 + usize::from(info.region_address2) + 1)
    }
}

/// 解码一个 granule 的 Huffman 数据并反量化到 `xr`
///
/// `bit_limit` 是本 granule 的 part 3 结束位置 (绝对位偏移). 返回时读取器位于该位置.
pub fn decode_spectrum<R: Read>(
    br: &mut BitReader<R>,
    info: &GranuleInfo,
    sf: &ScaleFactors,
    sample_rate_index: u8,
    bit_limit: u64,
    xr: &mut [f32; GRANULE_LINES],
) -> MogResult<()> {
    xr.fill(0.0);
    let widths = &SFB_LONG_WIDTHS[usize::from(sample_rate_index).min(2)];
    let (region0_end, region1_end) = region_bounds(info);
    let mut lines = LineWriter::new(info, sf, widths, xr);

    if info.big_values as usize * 2 > GRANULE_LINES {
        return Err(MogError::InvalidData(format!(
            "big_values 超出范围: {}",
            info.big_values,
        )));
    }

    for _ in 0..info.big_values {
        if br.bits_read() >= bit_limit {
            return Err(MogError::InvalidData(format!(
                "Huffman 数据超出 granule 位预算 (剩余频谱线 {})",
                GRANULE_LINES - lines.pos,
            )));
        }
        let band = lines.band_of_next();
        let region = if band < region0_end {
            0
        } else if band < region1_end {
            1
        } else {
            2
        };
        let (x, y) = decode_pair(br, info.table_select[region])?;
        lines.push(x);
        lines.push(y);
    }
    if br.bits_read() > bit_limit {
        return Err(MogError::InvalidData(format!(
            "big_values 区越过 granule 位预算 {} 位",
            br.bits_read() - bit_limit,
        )));
    }

    while lines.pos < GRANULE_LINES && br.bits_read() < bit_limit {
        let start = lines.pos;
        let quad = decode_quad(br, info.count1table_select)?;
        for value in quad {
            if lines.pos == GRANULE_LINES {
                break;
            }
            lines.push(value);
        }
        // 最后一个四元组越过位预算时丢弃
        if br.bits_read() > bit_limit {
            log::trace!("丢弃越过位预算的四元组 (频谱线 {})", start);
            lines.xr[start..lines.pos].fill(0.0);
            break;
        }
    }

    br.skip_to(bit_limit);
    br.status()
}
