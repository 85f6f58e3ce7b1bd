//! 测试与基准共用的 MP3 帧构造工具
//!
//! 构造的帧均为单声道, 比例因子为 0, big_values 区使用码表 1, count1 区使用码表 B.

#![allow(dead_code)]

use mog::codec::decoders::mp3::FrameHeader;
use mog::core::bitwriter::BitWriter;

/// 44100 Hz, 128 kbps, 单声道, 无 CRC
pub const MONO_HEADER: u32 = 0xFFFB_90C0;
/// 同参数的立体声帧头
pub const STEREO_HEADER: u32 = 0xFFFB_9000;
/// 48000 Hz, 128 kbps, 单声道, 帧长 384 字节
pub const MONO_HEADER_48K: u32 = 0xFFFB_94C0;
/// 32000 Hz, 128 kbps, 单声道, 帧长 576 字节
pub const MONO_HEADER_32K: u32 = 0xFFFB_98C0;
/// MONO_HEADER 的帧长度 (字节)
pub const FRAME_BYTES: usize = 417;
pub const SAMPLES_PER_FRAME: usize = 1152;

/// 码表 1 的 (码字, 码长), 按符号 x * 2 + y 排列
const TABLE1: [(u32, u8); 4] = [(0x1, 1), (0x1, 3), (0x1, 2), (0x0, 3)];

/// 一个 granule 的内容
#[derive(Debug, Clone)]
pub struct Granule {
    pub global_gain: u32,
    /// big_values 区的值对, 每个值属于 {-1, 0, 1}
    pub pairs: Vec<(i32, i32)>,
    /// count1 区的四元组
    pub quads: Vec<[i32; 4]>,
    /// Some 时写入 block_split 与该块类型
    pub block_type: Option<u8>,
    pub preflag: bool,
}

impl Default for Granule {
    fn default() -> Self {
        Self {
            global_gain: 210,
            pairs: Vec::new(),
            quads: Vec::new(),
            block_type: None,
            preflag: false,
        }
    }
}

impl Granule {
    /// 低频带上的几条非零谱线
    pub fn tone() -> Self {
        Self {
            pairs: vec![(1, 0), (0, -1), (1, 1), (0, 0), (-1, 0)],
            quads: vec![[0, 1, 0, -1]],
            ..Default::default()
        }
    }

    fn write_data(&self, bw: &mut BitWriter) {
        for &(x, y) in &self.pairs {
            let symbol = (x != 0) as usize * 2 + (y != 0) as usize;
            bw.write_code(TABLE1[symbol]);
            for v in [x, y] {
                if v != 0 {
                    bw.write_flag(v < 0);
                }
            }
        }
        for quad in &self.quads {
            let vwxy = quad
                .iter()
                .fold(0u64, |acc, &v| (acc << 1) | u64::from(v != 0));
            bw.write_bits(15 - vwxy, 4);
            for &v in quad.iter().filter(|v| **v != 0) {
                bw.write_flag(v < 0);
            }
        }
    }

    fn data_bits(&self) -> u64 {
        let mut bw = BitWriter::new();
        self.write_data(&mut bw);
        bw.bits_written()
    }

    fn write_side_info(&self, bw: &mut BitWriter) {
        bw.write_bits(self.data_bits(), 12);
        bw.write_bits(self.pairs.len() as u64, 9);
        bw.write_bits(u64::from(self.global_gain), 8);
        bw.write_bits(0, 4);
        match self.block_type {
            Some(block_type) => {
                bw.write_flag(true);
                bw.write_bits(u64::from(block_type), 2);
                bw.write_flag(false);
                bw.write_bits(1, 5);
                bw.write_bits(1, 5);
                bw.write_bits(0, 9);
            }
            None => {
                bw.write_flag(false);
                for _ in 0..3 {
                    bw.write_bits(1, 5);
                }
                bw.write_bits(15, 4);
                bw.write_bits(7, 3);
            }
        }
        bw.write_flag(self.preflag);
        bw.write_flag(false);
        bw.write_flag(true);
    }
}

/// 以指定帧头构造一帧, 填充到帧头给出的帧长度
pub fn frame_with_header(header: u32, granules: &[Granule; 2]) -> Vec<u8> {
    let frame_bytes = FrameHeader::from_bits(header).frame_length() as usize;
    let mut bw = BitWriter::with_capacity(frame_bytes);
    bw.write_bits(u64::from(header), 32);
    bw.write_bits(0, 9 + 5 + 4);
    for gr in granules {
        gr.write_side_info(&mut bw);
    }
    for gr in granules {
        gr.write_data(&mut bw);
    }
    bw.pad_to_bits(frame_bytes as u64 * 8);
    bw.finish()
}

pub fn mono_frame(granules: &[Granule; 2]) -> Vec<u8> {
    frame_with_header(MONO_HEADER, granules)
}

pub fn silent_frame() -> Vec<u8> {
    mono_frame(&[Granule::default(), Granule::default()])
}

pub fn tone_frame() -> Vec<u8> {
    mono_frame(&[Granule::tone(), Granule::tone()])
}

/// 连续 `frames` 帧的音调流
pub fn tone_stream(frames: usize) -> Vec<u8> {
    (0..frames).flat_map(|_| tone_frame()).collect()
}
