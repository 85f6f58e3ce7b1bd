//! MP3 侧边信息 (Side Information) 解析, 单声道路径
//!
//! MPEG-1 单声道侧边信息共 136 位 (17 字节):
//! main_data_begin(9) + private_bits(5) + scfsi(4) + 2 x granule(59).

use std::io::Read;

use mog_core::{BitReader, MogResult};

/// 块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    /// 普通长块
    #[default]
    Normal,
    /// 起始块 (长块向短块过渡)
    Start,
    /// 短块
    Short,
    /// 结束块 (短块向长块过渡)
    Stop,
}

impl BlockType {
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x3 {
            0 => Self::Normal,
            1 => Self::Start,
            2 => Self::Short,
            _ => Self::Stop,
        }
    }
}

/// Granule (颗粒) 控制信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GranuleInfo {
    /// 比例因子与 Huffman 数据的总位数
    pub part2_3_length: u32,
    /// big_values 区的数值对个数
    pub big_values: u32,
    pub global_gain: u32,
    pub scalefac_compress: u8,
    pub block_split: bool,
    pub block_type: BlockType,
    pub switch_point: bool,
    /// 各区域的 Huffman 码表号 (block_split 时只有前 2 个有效)
    pub table_select: [u8; 3],
    /// 短块子块增益 (仅解析)
    pub subblock_gain: [u8; 3],
    pub region_address1: u8,
    pub region_address2: u8,
    pub preflag: bool,
    pub scalefac_scale: bool,
    /// false 选择四元组码表 A, true 选择码表 B
    pub count1table_select: bool,
}

impl GranuleInfo {
    fn read<R: Read>(br: &mut BitReader<R>) -> Self {
        let mut gr = GranuleInfo {
            part2_3_length: br.read_bits(12) as u32,
            big_values: br.read_bits(9) as u32,
            global_gain: br.read_bits(8) as u32,
            scalefac_compress: br.read_bits(4) as u8,
            block_split: br.read_flag(),
            ..Default::default()
        };

        if gr.block_split {
            gr.block_type = BlockType::from_bits(br.read_bits(2) as u32);
            gr.switch_point = br.read_flag();
            for i in 0..2 {
                gr.table_select[i] = br.read_bits(5) as u8;
            }
            for i in 0..3 {
                gr.subblock_gain[i] = br.read_bits(3) as u8;
            }
        } else {
            for i in 0..3 {
                gr.table_select[i] = br.read_bits(5) as u8;
            }
            gr.region_address1 = br.read_bits(4) as u8;
            gr.region_address2 = br.read_bits(3) as u8;
        }

        gr.preflag = br.read_flag();
        gr.scalefac_scale = br.read_flag();
        gr.count1table_select = br.read_flag();
        gr
    }

    /// 是否为当前解码路径不支持的短块
    pub fn is_short_block(&self) -> bool {
        self.block_split && self.block_type == BlockType::Short
    }
}

/// 单声道帧的侧边信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideInfo {
    /// 比特储备库回溯偏移 (字节)
    pub main_data_begin: u32,
    pub private_bits: u32,
    /// 比例因子复用标志, 对应频带组 0-5, 6-10, 11-15, 16-20
    pub scfsi: [bool; 4],
    pub granules: [GranuleInfo; 2],
}

impl SideInfo {
    pub fn read<R: Read>(br: &mut BitReader<R>) -> MogResult<Self> {
        let main_data_begin = br.read_bits(9) as u32;
        let private_bits = br.read_bits(5) as u32;
        let mut scfsi = [false; 4];
        for flag in &mut scfsi {
            *flag = br.read_flag();
        }
        let granules = [GranuleInfo::read(br), GranuleInfo::read(br)];
        br.status()?;

        Ok(Self {
            main_data_begin,
            private_bits,
            scfsi,
            granules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mog_core::MogError;
    use mog_core::bitwriter::BitWriter;

    fn write_long_granule(bw: &mut BitWriter, gr: &GranuleInfo) {
        bw.write_bits(u64::from(gr.part2_3_length), 12);
        bw.write_bits(u64::from(gr.big_values), 9);
        bw.write_bits(u64::from(gr.global_gain), 8);
        bw.write_bits(u64::from(gr.scalefac_compress), 4);
        bw.write_flag(false);
        for &t in &gr.table_select {
            bw.write_bits(u64::from(t), 5);
        }
        bw.write_bits(u64::from(gr.region_address1), 4);
        bw.write_bits(u64::from(gr.region_address2), 3);
        bw.write_flag(gr.preflag);
        bw.write_flag(gr.scalefac_scale);
        bw.write_flag(gr.count1table_select);
    }

    #[test]
    fn test_long_block_side_info() {
        let gr0 = GranuleInfo {
            part2_3_length: 1234,
            big_values: 200,
            global_gain: 180,
            scalefac_compress: 11,
            table_select: [7, 24, 15],
            region_address1: 9,
            region_address2: 5,
            preflag: true,
            count1table_select: true,
            ..Default::default()
        };
        let gr1 = GranuleInfo {
            part2_3_length: 17,
            big_values: 3,
            global_gain: 210,
            table_select: [1, 0, 0],
            scalefac_scale: true,
            ..Default::default()
        };

        let mut bw = BitWriter::new();
        bw.write_bits(300, 9);
        bw.write_bits(0b10101, 5);
        bw.write_bits(0b1001, 4);
        write_long_granule(&mut bw, &gr0);
        write_long_granule(&mut bw, &gr1);
        assert_eq!(bw.bits_written(), 136);
        let data = bw.finish();

        let mut br = BitReader::new(data.as_slice());
        let si = SideInfo::read(&mut br).unwrap();
        assert_eq!(si.main_data_begin, 300);
        assert_eq!(si.private_bits, 0b10101);
        assert_eq!(si.scfsi, [true, false, false, true]);
        assert_eq!(si.granules[0], gr0);
        assert_eq!(si.granules[1], gr1);
        assert_eq!(br.bits_read(), 136);
    }

    #[test]
    fn test_block_split_granule() {
        let mut bw = BitWriter::new();
        bw.write_bits(0, 18);
        for block_type in [3u64, 2] {
            bw.write_bits(500, 12);
            bw.write_bits(10, 9);
            bw.write_bits(150, 8);
            bw.write_bits(4, 4);
            bw.write_flag(true);
            bw.write_bits(block_type, 2);
            bw.write_flag(block_type == 2);
            bw.write_bits(5, 5);
            bw.write_bits(6, 5);
            bw.write_bits(0b001, 3);
            bw.write_bits(0b010, 3);
            bw.write_bits(0b111, 3);
            bw.write_bits(0, 3);
        }
        let data = bw.finish();

        let mut br = BitReader::new(data.as_slice());
        let si = SideInfo::read(&mut br).unwrap();
        let stop = &si.granules[0];
        assert!(stop.block_split);
        assert_eq!(stop.block_type, BlockType::Stop);
        assert!(!stop.switch_point);
        assert_eq!(stop.table_select, [5, 6, 0]);
        assert_eq!(stop.subblock_gain, [1, 2, 7]);
        assert!(!stop.is_short_block());

        let short = &si.granules[1];
        assert_eq!(short.block_type, BlockType::Short);
        assert!(short.switch_point);
        assert!(short.is_short_block());
    }

    #[test]
    fn test_truncated_side_info() {
        let data: &[u8] = &[0x00; 10];
        let mut br = BitReader::new(data);
        assert!(matches!(SideInfo::read(&mut br), Err(MogError::Eof)));
    }
}
