//! MP3 帧头解析
//!
//! 帧头为 32 位: 12 位同步字 (0xFFF) 之后依次是 ID, layer, protection_bit,
//! bitrate_index, sampling_frequency, padding_bit, private_bit, mode,
//! mode_extension, copyright, original/home, emphasis.

use std::io::Read;

use mog_core::{BitReader, MogError, MogResult};

/// 帧同步字
pub const SYNC_WORD: u16 = 0xFFF;

/// MPEG-1 Layer III 码率表 (kbps), 索引 0 (自由格式) 和 15 (保留) 为 0
const BITRATE_KBPS: [u32; 16] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];

/// MPEG-1 采样率表 (Hz), 索引 3 保留
const SAMPLE_RATES: [u32; 4] = [44100, 48000, 32000, 0];

/// MPEG Layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Reserved,
    Layer3,
    Layer2,
    Layer1,
}

impl Layer {
    /// 从 2 位字段解析 (3=I, 2=II, 1=III, 0=保留)
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x3 {
            3 => Self::Layer1,
            2 => Self::Layer2,
            1 => Self::Layer3,
            _ => Self::Reserved,
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Layer1 => "Layer I",
            Self::Layer2 => "Layer II",
            Self::Layer3 => "Layer III",
            Self::Reserved => "保留",
        };
        f.write_str(name)
    }
}

/// 声道模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    SingleChannel,
}

impl ChannelMode {
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x3 {
            0 => Self::Stereo,
            1 => Self::JointStereo,
            2 => Self::DualChannel,
            _ => Self::SingleChannel,
        }
    }

    /// 声道数
    pub fn channels(self) -> u32 {
        if self == Self::SingleChannel { 1 } else { 2 }
    }
}

/// 去加重类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    /// 50/15 µs
    Ms50_15,
    Reserved,
    /// CCITT J.17
    CcittJ17,
}

impl Emphasis {
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x3 {
            0 => Self::None,
            1 => Self::Ms50_15,
            2 => Self::Reserved,
            _ => Self::CcittJ17,
        }
    }
}

/// MP3 帧头
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// 1 = MPEG-1, 0 = MPEG-2 低采样率扩展
    pub id: u8,
    pub layer: Layer,
    /// 为 false 时帧头后紧跟 16 位 CRC
    pub protection_bit: bool,
    pub bitrate_index: u8,
    pub sample_rate_index: u8,
    pub padding: bool,
    pub private_bit: bool,
    pub mode: ChannelMode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,
}

impl FrameHeader {
    /// 从比特流中搜索同步字并解析帧头
    ///
    /// 同步字搜索按字节推进: 读取 12 位, 若不是 0xFFF, 则左移 8 位,
    /// 保留低 12 位并补入下 8 位, 重复直到匹配. 字节源在搜索期间结束时
    /// 返回 [`MogError::SyncNotFound`].
    pub fn read<R: Read>(br: &mut BitReader<R>) -> MogResult<Self> {
        let mut sync = br.read_bits(12) as u16;
        let mut skipped_bytes: u64 = 0;
        while sync != SYNC_WORD {
            if !br.is_ok() {
                return Err(match br.status() {
                    Err(MogError::Eof) => MogError::SyncNotFound { skipped_bytes },
                    Err(e) => e,
                    Ok(()) => MogError::SyncNotFound { skipped_bytes },
                });
            }
            sync = ((sync << 8) & SYNC_WORD) | br.read_bits(8) as u16;
            skipped_bytes += 1;
        }
        if skipped_bytes > 0 {
            log::debug!("跳过 {} 字节后找到帧同步字", skipped_bytes);
        }

        let word = br.read_bits(20) as u32;
        br.status()?;
        Ok(Self::from_bits(0xFFF0_0000 | word))
    }

    /// 从 32 位帧头字解析字段 (不检查同步字)
    pub fn from_bits(word: u32) -> Self {
        Self {
            id: ((word >> 19) & 0x1) as u8,
            layer: Layer::from_bits(word >> 17),
            protection_bit: (word >> 16) & 0x1 == 1,
            bitrate_index: ((word >> 12) & 0xF) as u8,
            sample_rate_index: ((word >> 10) & 0x3) as u8,
            padding: (word >> 9) & 0x1 == 1,
            private_bit: (word >> 8) & 0x1 == 1,
            mode: ChannelMode::from_bits(word >> 6),
            mode_extension: ((word >> 4) & 0x3) as u8,
            copyright: (word >> 3) & 0x1 == 1,
            original: (word >> 2) & 0x1 == 1,
            emphasis: Emphasis::from_bits(word),
        }
    }

    /// 帧头后是否跟随 CRC
    pub fn has_crc(&self) -> bool {
        !self.protection_bit
    }

    /// 码率 (kbps), 自由格式或无效索引返回 0
    pub fn bitrate_kbps(&self) -> u32 {
        BITRATE_KBPS[usize::from(self.bitrate_index & 0xF)]
    }

    /// 采样率 (Hz), 保留索引返回 0
    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATES[usize::from(self.sample_rate_index & 0x3)]
    }

    pub fn channels(&self) -> u32 {
        self.mode.channels()
    }

    /// 帧长度 (字节, 含帧头), 码率或采样率未知时返回 0
    pub fn frame_length(&self) -> u32 {
        let bitrate = self.bitrate_kbps();
        let rate = self.sample_rate();
        if bitrate == 0 || rate == 0 {
            return 0;
        }
        let padding = u32::from(self.padding);
        match self.layer {
            Layer::Layer1 => (12 * bitrate * 1000 / rate + padding) * 4,
            Layer::Layer2 | Layer::Layer3 => 144 * bitrate * 1000 / rate + padding,
            Layer::Reserved => 0,
        }
    }

    /// 检查本帧能否由单声道 Layer III 路径解码
    pub fn check_supported(&self) -> MogResult<()> {
        if self.id != 1 {
            return Err(MogError::Unsupported("MPEG-2/2.5 低采样率扩展".into()));
        }
        if self.layer != Layer::Layer3 {
            return Err(MogError::Unsupported(format!("{} 音频数据", self.layer)));
        }
        if self.sample_rate() == 0 {
            return Err(MogError::InvalidData(format!(
                "保留的采样率索引: {}",
                self.sample_rate_index,
            )));
        }
        if self.mode != ChannelMode::SingleChannel {
            return Err(MogError::Unsupported(format!("声道模式 {:?}", self.mode)));
        }
        Ok(())
    }
}
