//! 比特流写入器.
//!
//! 与 [`BitReader`](crate::bitreader::BitReader) 对应, 按大端位序 (MSB first) 写入.
//! 解码器本身不需要写比特流, 写入器用于构造测试码流和基准测试输入.

/// 比特流写入器
///
/// # 示例
/// ```
/// use mog_core::bitwriter::BitWriter;
///
/// let mut bw = BitWriter::new();
/// bw.write_bits(0xFFF, 12);
/// bw.write_flag(true);
/// bw.pad_to_byte();
/// assert_eq!(bw.finish(), vec![0xFF, 0xF8]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitWriter {
    /// 已完成的字节
    data: Vec<u8>,
    /// 正在填充的字节
    current: u8,
    /// `current` 中已填充的位数 (0-7)
    filled: u8,
}

impl BitWriter {
    /// 创建新的比特流写入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 以指定容量 (字节) 创建写入器
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            current: 0,
            filled: 0,
        }
    }

    /// 获取已写入的总位数
    pub fn bits_written(&self) -> u64 {
        self.data.len() as u64 * 8 + u64::from(self.filled)
    }

    /// 写入 1 个位
    pub fn write_flag(&mut self, flag: bool) {
        self.write_bits(u64::from(flag), 1);
    }

    /// 写入 N 个位 (0-64 位)
    ///
    /// 值的低 N 位被写入, 高位在前.
    pub fn write_bits(&mut self, value: u64, n: u32) {
        debug_assert!(n <= 64, "write_bits: n={} 超过 64 位", n);

        let mut remaining = n.min(64);
        while remaining > 0 {
            let available = 8 - u32::from(self.filled);
            let to_write = remaining.min(available);

            let shift = remaining - to_write;
            let mask = (1u64 << to_write) - 1;
            let bits = ((value >> shift) & mask) as u8;

            // to_write == 8 时 filled 必定为 0, 直接替换整个字节
            self.current = if to_write == 8 {
                bits
            } else {
                (self.current << to_write) | bits
            };
            self.filled += to_write as u8;

            if self.filled == 8 {
                self.data.push(self.current);
                self.current = 0;
                self.filled = 0;
            }
            remaining -= to_write;
        }
    }

    /// 按 MSB 优先写入一个 `(码字, 码长)` 形式的变长码
    pub fn write_code(&mut self, code: (u32, u8)) {
        self.write_bits(u64::from(code.0), u32::from(code.1));
    }

    /// 以 0 填充到字节边界
    pub fn pad_to_byte(&mut self) {
        if self.filled > 0 {
            let pad = 8 - u32::from(self.filled);
            self.write_bits(0, pad);
        }
    }

    /// 以 0 填充到指定位数
    pub fn pad_to_bits(&mut self, total_bits: u64) {
        while self.bits_written() < total_bits {
            let n = (total_bits - self.bits_written()).min(64) as u32;
            self.write_bits(0, n);
        }
    }

    /// 完成写入, 返回字节数据 (不足一字节的尾部以 0 补齐)
    pub fn finish(mut self) -> Vec<u8> {
        self.pad_to_byte();
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitreader::BitReader;

    #[test]
    fn test_write_bits() {
        let mut bw = BitWriter::new();
        bw.write_bits(0b101, 3);
        bw.write_bits(0b1001, 4);
        bw.write_flag(true);
        assert_eq!(bw.bits_written(), 8);
        bw.write_bits(0b11, 2);
        assert_eq!(bw.finish(), vec![0b10110011, 0b11000000]);
    }

    #[test]
    fn test_write_wide_values() {
        let mut bw = BitWriter::with_capacity(9);
        bw.write_bits(0, 4);
        bw.write_bits(0x1234_5678_9ABC_DEFF, 64);
        bw.write_bits(0, 4);
        assert_eq!(
            bw.finish(),
            vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xF0]
        );
    }

    #[test]
    fn test_padding() {
        let mut bw = BitWriter::new();
        bw.write_code((0b111, 3));
        bw.pad_to_bits(20);
        assert_eq!(bw.bits_written(), 20);
        bw.pad_to_byte();
        assert_eq!(bw.bits_written(), 24);
        assert_eq!(bw.finish(), vec![0xE0, 0x00, 0x00]);
    }

    #[test]
    fn test_reader_agrees_with_writer() {
        let fields: [(u64, u32); 6] = [(0xFFF, 12), (1, 1), (1, 2), (0, 1), (9, 4), (0x1FF, 9)];
        let mut bw = BitWriter::new();
        for &(value, n) in &fields {
            bw.write_bits(value, n);
        }
        let data = bw.finish();

        let mut br = BitReader::new(data.as_slice());
        for &(value, n) in &fields {
            assert_eq!(br.read_bits(n), value, "{} 位字段不一致", n);
        }
        assert!(br.status().is_ok());
    }
}
