//! MP3 比例因子 (part 2) 解析, 仅长块
//!
//! 21 个长块频带, 频带 0-10 的位宽为 slen1, 11-20 为 slen2.
//! 第二个 granule 中 scfsi 置位的频带组不传输, 沿用第一个 granule 的值.

use std::io::Read;

use mog_core::{BitReader, MogError, MogResult};

use super::side_info::GranuleInfo;
use super::tables::SLEN;

/// 长块频带数 (含不传输比例因子的频带 21)
pub const LONG_BANDS: usize = 22;

/// scfsi 频带组的起始频带
const SCFSI_GROUPS: [usize; 5] = [0, 6, 11, 16, 21];

/// 一个 granule 的长块比例因子
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleFactors {
    /// 各频带比例因子, 频带 21 恒为 0
    pub long: [u32; LONG_BANDS],
    /// 本 granule 实际读取的比例因子位数 (part2_length)
    pub part2_length: u32,
}

/// 按 scalefac_compress 计算完整传输 21 个频带时的 part2 位数
pub fn part2_length(scalefac_compress: u8) -> u32 {
    let (slen1, slen2) = SLEN[usize::from(scalefac_compress & 0xF)];
    11 * slen1 + 10 * slen2
}

/// 读取一个 granule 的比例因子
///
/// `previous` 是同一帧中 granule 0 的比例因子, 仅在 `granule == 1` 时被复用.
pub fn read_scale_factors<R: Read>(
    br: &mut BitReader<R>,
    info: &GranuleInfo,
    granule: usize,
    scfsi: &[bool; 4],
    previous: &ScaleFactors,
) -> MogResult<ScaleFactors> {
    if info.is_short_block() {
        return Err(MogError::Unsupported("短块 (block_type 2) 比例因子".into()));
    }

    let (slen1, slen2) = SLEN[usize::from(info.scalefac_compress & 0xF)];
    let mut sf = ScaleFactors::default();

    for (group, bands) in SCFSI_GROUPS.windows(2).enumerate() {
        let reuse = granule == 1 && scfsi[group];
        for band in bands[0]..bands[1] {
            if reuse {
                sf.long[band] = previous.long[band];
                continue;
            }
            let slen = if band < 11 { slen1 } else { slen2 };
            sf.long[band] = br.read_bits(slen) as u32;
            sf.part2_length += slen;
        }
    }
    br.status()?;

    Ok(sf)
}
