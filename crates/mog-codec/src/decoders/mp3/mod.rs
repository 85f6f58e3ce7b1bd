//! MP3 解码器实现
//!
//! 处理流程: 字节流 -> 帧头 -> 侧边信息 -> (每个 granule) 比例因子 -> Huffman 与反量化
//! -> 抗混叠 -> IMDCT/加窗/重叠相加 -> 多相合成 -> PCM 缓冲区.
//!
//! 只支持单声道长块路径. 比特储备库 (`main_data_begin`) 只解析不使用:
//! 每帧的主数据紧跟在侧边信息之后.

mod alias;
mod header;
mod huffman;
mod imdct;
mod scalefactor;
mod side_info;
mod spectrum;
mod synthesis;
mod tables;

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mog_core::{BitReader, MogError, MogResult};

use crate::decoder::{Decoder, StreamInfo};

pub use self::header::{ChannelMode, Emphasis, FrameHeader, Layer};
pub use self::side_info::{BlockType, GranuleInfo, SideInfo};

use self::imdct::{OverlapState, SUBBAND_SAMPLES, SUBBANDS, hybrid_synthesis};
use self::scalefactor::{ScaleFactors, part2_length, read_scale_factors};
use self::spectrum::{GRANULE_LINES, decode_spectrum};
use self::synthesis::SynthesisFilter;

/// 每帧的 granule 数
pub const GRANULES_PER_FRAME: usize = 2;
/// 单声道每帧输出的样本数
pub const SAMPLES_PER_FRAME: usize = GRANULES_PER_FRAME * SUBBAND_SAMPLES * SUBBANDS;

/// 判断数据是否以 MP3 帧头魔数 (`FF FA` 或 `FF FB`) 开头
pub fn probe(data: &[u8]) -> bool {
    matches!(data, [0xFF, 0xFA, ..] | [0xFF, 0xFB, ..])
}

/// 跨帧保持的合成状态
struct SynthState {
    overlap: OverlapState,
    filter: SynthesisFilter,
    xr: [f32; GRANULE_LINES],
    rows: [[f32; SUBBANDS]; SUBBAND_SAMPLES],
    /// 当前帧的 PCM, 两个 granule 都解码成功后才交给调用方
    frame_pcm: Box<[f32; SAMPLES_PER_FRAME]>,
}

impl SynthState {
    fn new() -> Self {
        Self {
            overlap: OverlapState::new(),
            filter: SynthesisFilter::new(),
            xr: [0.0; GRANULE_LINES],
            rows: [[0.0; SUBBANDS]; SUBBAND_SAMPLES],
            frame_pcm: Box::new([0.0; SAMPLES_PER_FRAME]),
        }
    }

    /// 解码一帧的音频数据 (侧边信息之后), 样本追加到 `out`
    ///
    /// 任一 granule 失败时 `out` 保持不变.
    fn decode_audio_data<R: Read>(
        &mut self,
        br: &mut BitReader<R>,
        header: &FrameHeader,
        out: &mut VecDeque<f32>,
    ) -> MogResult<usize> {
        let side = SideInfo::read(br)?;
        if side.main_data_begin != 0 {
            log::debug!(
                "main_data_begin = {}, 比特储备库未启用, 按帧内数据解码",
                side.main_data_begin,
            );
        }

        let mut previous = ScaleFactors::default();
        let granule_samples = SUBBAND_SAMPLES * SUBBANDS;
        for (gr, info) in side.granules.iter().enumerate() {
            let part2_start = br.bits_read();
            let sf = read_scale_factors(br, info, gr, &side.scfsi, &previous)?;
            debug_assert!(gr == 1 || sf.part2_length == part2_length(info.scalefac_compress));
            if sf.part2_length > info.part2_3_length {
                return Err(MogError::InvalidData(format!(
                    "比例因子位数 {} 超过 part2_3_length {}",
                    sf.part2_length, info.part2_3_length,
                )));
            }

            let bit_limit = part2_start + u64::from(info.part2_3_length);
            decode_spectrum(
                br,
                info,
                &sf,
                header.sample_rate_index,
                bit_limit,
                &mut self.xr,
            )?;
            alias::alias_reduce(&mut self.xr);
            hybrid_synthesis(&self.xr, info.block_type, &mut self.overlap, &mut self.rows)?;

            let granule_pcm =
                &mut self.frame_pcm[gr * granule_samples..(gr + 1) * granule_samples];
            for (row, chunk) in self.rows.iter().zip(granule_pcm.chunks_exact_mut(SUBBANDS)) {
                let mut pcm = [0.0f32; SUBBANDS];
                self.filter.synthesize(row, &mut pcm);
                chunk.copy_from_slice(&pcm);
            }
            previous = sf;
        }

        out.extend(self.frame_pcm.iter().copied());
        Ok(SAMPLES_PER_FRAME)
    }
}

/// MP3 解码器
pub struct Mp3Decoder<R> {
    /// 字节源, `close()` 后为 None
    reader: Option<BitReader<R>>,
    state: SynthState,
    /// 已解码未取出的样本
    pending: VecDeque<f32>,
    /// 最近一个成功解码的帧头
    last_header: Option<FrameHeader>,
    frames_decoded: u64,
    /// 流已结束或已出错, 不再解码新帧
    finished: bool,
}

impl<R: Read> Mp3Decoder<R> {
    /// 以字节源创建解码器, 不读取任何数据
    pub fn open(reader: R) -> MogResult<Self> {
        Ok(Self {
            reader: Some(BitReader::new(reader)),
            state: SynthState::new(),
            pending: VecDeque::with_capacity(SAMPLES_PER_FRAME * 2),
            last_header: None,
            frames_decoded: 0,
            finished: false,
        })
    }

    /// 解码一帧并追加到内部缓冲区
    ///
    /// 返回本帧产生的样本数, 0 表示流正常结束.
    pub fn decode_frame(&mut self) -> MogResult<usize> {
        if self.finished {
            return Ok(0);
        }
        let Some(br) = self.reader.as_mut() else {
            return Ok(0);
        };
        if !br.has_more_data() {
            self.finished = true;
            br.status()?;
            log::debug!("MP3 流结束, 共 {} 帧", self.frames_decoded);
            return Ok(0);
        }

        let header = FrameHeader::read(br)?;
        let frame_start = br.bits_read() - 32;
        if header.has_crc() {
            // CRC 不校验
            br.read_bits(16);
        }
        header.check_supported()?;

        let produced = self
            .state
            .decode_audio_data(br, &header, &mut self.pending)?;

        // 跳到帧尾, 下一次同步从下一个帧头开始
        let frame_length = u64::from(header.frame_length());
        let frame_end = frame_start + frame_length * 8;
        if frame_length > 0 && br.bits_read() <= frame_end {
            br.skip_to(frame_end);
        } else {
            br.align_to_byte();
        }
        match br.status() {
            Ok(()) => {}
            Err(MogError::Eof) => {
                log::debug!("最后一帧的帧尾不完整, 视为流结束");
                self.finished = true;
            }
            Err(e) => return Err(e),
        }

        log::trace!(
            "MP3 帧 #{}: {} kbps, {} Hz, {} 字节",
            self.frames_decoded,
            header.bitrate_kbps(),
            header.sample_rate(),
            header.frame_length(),
        );
        self.frames_decoded += 1;
        self.last_header = Some(header);
        Ok(produced)
    }

    /// 取出最多 `max_samples` 个样本 (先进先出)
    ///
    /// 缓冲不足时继续解码, 直到足够或流结束. 返回空向量表示流结束.
    /// 解码出错后流被视为结束: 错误返回一次, 之后只能取出已缓冲的样本.
    pub fn pull(&mut self, max_samples: usize) -> MogResult<Vec<f32>> {
        while self.pending.len() < max_samples {
            match self.decode_frame() {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    log::debug!("MP3 解码失败 (第 {} 帧): {}", self.frames_decoded, e);
                    self.finished = true;
                    return Err(e);
                }
            }
        }
        let n = max_samples.min(self.pending.len());
        Ok(self.pending.drain(..n).collect())
    }

    /// 流信息, 尚未成功解码任何帧时均为 0
    pub fn stream_info(&self) -> StreamInfo {
        self.last_header
            .as_ref()
            .map(|h| StreamInfo {
                sample_rate: h.sample_rate(),
                channels: h.channels(),
            })
            .unwrap_or_default()
    }

    /// 释放字节源并丢弃缓冲的样本, 可重复调用
    pub fn close(&mut self) {
        if self.reader.take().is_some() {
            log::debug!("关闭 MP3 解码器, 已解码 {} 帧", self.frames_decoded);
        }
        self.pending.clear();
        self.finished = true;
    }

    /// 最近一个成功解码的帧头
    pub fn last_header(&self) -> Option<&FrameHeader> {
        self.last_header.as_ref()
    }

    /// 已成功解码的帧数
    pub fn frames_decoded(&self) -> u64 {
        self.frames_decoded
    }

    /// 已解码未取出的样本数
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }
}

impl Mp3Decoder<BufReader<File>> {
    /// 打开文件作为字节源
    pub fn open_path(path: impl AsRef<Path>) -> MogResult<Self> {
        let file = File::open(path)?;
        Self::open(BufReader::new(file))
    }
}

impl<R: Read + Send> Decoder for Mp3Decoder<R> {
    fn name(&self) -> &str {
        "mp3"
    }

    fn pull(&mut self, max_samples: usize) -> MogResult<Vec<f32>> {
        Mp3Decoder::pull(self, max_samples)
    }

    fn stream_info(&self) -> StreamInfo {
        Mp3Decoder::stream_info(self)
    }

    fn close(&mut self) {
        Mp3Decoder::close(self)
    }
}
