//! 比特流读取器.
//!
//! 从任意 `std::io::Read` 字节源按位读取数据, 按大端位序 (MSB first).
//! MP3 帧内的字段不按字节对齐, 因此读取器支持任意位偏移的读取.
//!
//! 读取器只能前进, 不支持回退. 一旦底层字节源结束或出错, 错误被记录并保持 (sticky):
//! 此后所有读取都返回 0, 调用方通过 [`BitReader::status`] 取回该错误.

use std::io::{self, Read};

use crate::{MogError, MogResult};

/// 默认缓冲区大小 (32 KB)
const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// 读取器状态
#[derive(Debug, Clone, PartialEq)]
enum StreamState {
    /// 正常
    Ok,
    /// 字节源已结束
    Eof,
    /// 字节源读取失败
    Failed { kind: io::ErrorKind, message: String },
}

/// 比特流读取器
///
/// # 示例
/// ```
/// use mog_core::bitreader::BitReader;
///
/// let data: &[u8] = &[0b10110001, 0b01010101];
/// let mut br = BitReader::new(data);
/// assert_eq!(br.read_bits(4), 0b1011);
/// assert_eq!(br.read_bits(12), 0b0001_0101_0101);
/// assert!(br.status().is_ok());
///
/// // 数据耗尽后读取返回 0, 错误被保留
/// assert_eq!(br.read_bits(1), 0);
/// assert!(br.status().is_err());
/// ```
pub struct BitReader<R> {
    /// 底层字节源
    inner: R,
    /// 读缓冲区
    buffer: Box<[u8]>,
    /// 缓冲区中的有效数据长度
    buf_len: usize,
    /// 缓冲区中下一个未读字节的位置
    buf_pos: usize,
    /// 正在消费的字节
    current: u8,
    /// `current` 中已消费的位数 (0-8, 8 表示需要取下一个字节)
    bit_pos: u8,
    /// 已消费的总位数
    bits_read: u64,
    state: StreamState,
}

impl<R: Read> BitReader<R> {
    /// 创建新的比特流读取器
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: vec![0u8; DEFAULT_BUFFER_SIZE].into_boxed_slice(),
            buf_len: 0,
            buf_pos: 0,
            current: 0,
            bit_pos: 8,
            bits_read: 0,
            state: StreamState::Ok,
        }
    }

    /// 获取已读取的总位数
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }

    /// 当前是否位于字节边界
    pub fn is_byte_aligned(&self) -> bool {
        self.bit_pos == 8
    }

    /// 读取器是否仍处于正常状态
    pub fn is_ok(&self) -> bool {
        self.state == StreamState::Ok
    }

    /// 返回记录的错误 (如有)
    pub fn status(&self) -> MogResult<()> {
        match &self.state {
            StreamState::Ok => Ok(()),
            StreamState::Eof => Err(MogError::Eof),
            StreamState::Failed { kind, message } => {
                Err(MogError::Io(io::Error::new(*kind, message.clone())))
            }
        }
    }

    /// 读取 N 个位 (0-64 位)
    ///
    /// 按大端位序读取, 返回值的低 N 位有效. 字节源结束或出错时返回 0 并记录错误.
    pub fn read_bits(&mut self, n: u32) -> u64 {
        debug_assert!(n <= 64, "read_bits: n={} 超过 64 位", n);
        if n == 0 || !self.is_ok() {
            return 0;
        }

        let mut result: u64 = 0;
        let mut remaining = n.min(64);

        while remaining > 0 {
            if self.bit_pos == 8 {
                match self.next_byte() {
                    Some(byte) => {
                        self.current = byte;
                        self.bit_pos = 0;
                    }
                    None => return 0,
                }
            }

            let available = 8 - u32::from(self.bit_pos);
            let to_read = remaining.min(available);

            // 从当前字节中提取位
            let shift = available - to_read;
            let mask = ((1u16 << to_read) - 1) as u8;
            let bits = (self.current >> shift) & mask;

            result = (result << to_read) | u64::from(bits);

            self.bit_pos += to_read as u8;
            self.bits_read += u64::from(to_read);
            remaining -= to_read;
        }

        result
    }

    /// 读取 N 个位, 参数越界或读取失败时返回错误
    pub fn try_read_bits(&mut self, n: u32) -> MogResult<u64> {
        if n == 0 || n > 64 {
            return Err(MogError::InvalidArgument(format!(
                "read_bits: n={} 不在 1..=64 范围内",
                n,
            )));
        }
        let value = self.read_bits(n);
        self.status()?;
        Ok(value)
    }

    /// 读取 1 个位, 返回 bool
    pub fn read_flag(&mut self) -> bool {
        self.read_bits(1) != 0
    }

    /// 向前丢弃数据, 直到已读位数达到 `bit_offset`
    ///
    /// 目标位置不在前方时不做任何操作.
    pub fn skip_to(&mut self, bit_offset: u64) {
        while self.is_ok() && self.bits_read < bit_offset {
            let n = (bit_offset - self.bits_read).min(64) as u32;
            self.read_bits(n);
        }
    }

    /// 丢弃当前字节的剩余位
    pub fn align_to_byte(&mut self) {
        if self.bit_pos < 8 {
            self.bits_read += u64::from(8 - self.bit_pos);
            self.bit_pos = 8;
        }
    }

    /// 是否还有未读数据
    ///
    /// 用于在帧边界区分 "流正常结束" 与 "流截断": 字节源结束时返回 false,
    /// 但不记录错误.
    pub fn has_more_data(&mut self) -> bool {
        if !self.is_ok() {
            return false;
        }
        if self.bit_pos < 8 || self.buf_pos < self.buf_len {
            return true;
        }
        self.refill()
    }

    /// 取回底层字节源
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> Option<u8> {
        if self.buf_pos >= self.buf_len && !self.refill() {
            if self.is_ok() {
                self.state = StreamState::Eof;
            }
            return None;
        }
        let byte = self.buffer[self.buf_pos];
        self.buf_pos += 1;
        Some(byte)
    }

    /// 从字节源补充缓冲区, 返回是否读到了新数据
    fn refill(&mut self) -> bool {
        loop {
            match self.inner.read(&mut self.buffer) {
                Ok(0) => return false,
                Ok(n) => {
                    self.buf_len = n;
                    self.buf_pos = 0;
                    return true;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!("比特流字节源读取失败: {}", e);
                    self.state = StreamState::Failed {
                        kind: e.kind(),
                        message: e.to_string(),
                    };
                    return false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 每次最多返回 1 字节的字节源
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.split_first() {
                Some((&b, rest)) if !buf.is_empty() => {
                    buf[0] = b;
                    self.0 = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    /// 读取若干字节后报错的字节源
    struct Broken {
        remaining: usize,
    }

    impl Read for Broken {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "连接重置"));
            }
            let n = self.remaining.min(buf.len());
            buf[..n].fill(0xAA);
            self.remaining -= n;
            Ok(n)
        }
    }

    #[test]
    fn test_read_bits() {
        let data: &[u8] = &[0b10110011, 0b11000000];
        let mut br = BitReader::new(data);

        assert_eq!(br.read_bits(3), 0b101);
        assert_eq!(br.read_bits(4), 0b1001);
        assert_eq!(br.read_bits(1), 1);
        assert_eq!(br.read_bits(2), 0b11);
        assert_eq!(br.read_bits(6), 0);
        assert_eq!(br.bits_read(), 16);
        assert!(br.status().is_ok());
    }

    #[test]
    fn test_cross_byte_boundary() {
        let data: &[u8] = &[0xFF, 0x00];
        let mut br = BitReader::new(data);
        assert_eq!(br.read_bits(12), 0xFF0);
        assert!(!br.is_byte_aligned());
        assert_eq!(br.read_bits(4), 0);
        assert!(br.is_byte_aligned());
    }

    #[test]
    fn test_read_64_bits() {
        let data: &[u8] = &[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xF0];
        let mut br = BitReader::new(data);
        assert_eq!(br.read_bits(4), 0x0);
        assert_eq!(br.read_bits(64), 0x1234_5678_9ABC_DEFF);
        assert_eq!(br.read_bits(4), 0x0);
    }

    #[test]
    fn test_trickle_source() {
        let data = [0x12, 0x34, 0x56];
        let mut br = BitReader::new(Trickle(&data));
        assert_eq!(br.read_bits(20), 0x12345);
        assert_eq!(br.read_bits(4), 0x6);
        assert!(!br.has_more_data());
        assert!(br.status().is_ok());
    }

    #[test]
    fn test_eof_is_sticky() {
        let data: &[u8] = &[0xFF];
        let mut br = BitReader::new(data);
        assert_eq!(br.read_bits(4), 0xF);
        // 跨越末尾的读取返回 0
        assert_eq!(br.read_bits(8), 0);
        assert!(matches!(br.status(), Err(MogError::Eof)));
        assert_eq!(br.read_bits(1), 0);
        assert!(matches!(br.status(), Err(MogError::Eof)));
        assert!(!br.has_more_data());
    }

    #[test]
    fn test_io_error_is_sticky() {
        let mut br = BitReader::new(Broken { remaining: 2 });
        assert_eq!(br.read_bits(16), 0xAAAA);
        assert_eq!(br.read_bits(8), 0);
        match br.status() {
            Err(MogError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("期望 I/O 错误, 实际: {:?}", other),
        }
        assert_eq!(br.read_bits(3), 0);
        assert!(br.status().unwrap_err().is_stream_error());
    }

    #[test]
    fn test_try_read_bits() {
        let data: &[u8] = &[0xC0];
        let mut br = BitReader::new(data);
        assert!(matches!(
            br.try_read_bits(0),
            Err(MogError::InvalidArgument(_))
        ));
        assert!(matches!(
            br.try_read_bits(65),
            Err(MogError::InvalidArgument(_))
        ));
        assert_eq!(br.try_read_bits(2).unwrap(), 0b11);
        assert!(matches!(br.try_read_bits(7), Err(MogError::Eof)));
    }

    #[test]
    fn test_skip_and_align() {
        let data: &[u8] = &[0x00, 0x00, 0x00, 0x00, 0xAB, 0xCD];
        let mut br = BitReader::new(data);
        br.read_bits(3);
        br.align_to_byte();
        assert_eq!(br.bits_read(), 8);
        br.skip_to(32);
        assert_eq!(br.bits_read(), 32);
        // 向后的目标位置不生效
        br.skip_to(16);
        assert_eq!(br.bits_read(), 32);
        assert_eq!(br.read_bits(8), 0xAB);
        assert!(br.has_more_data());
        assert_eq!(br.read_bits(8), 0xCD);
        assert!(!br.has_more_data());
    }
}
