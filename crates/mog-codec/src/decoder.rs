//! 解码器 trait 定义.
//!
//! 播放控制层通过 `Decoder` 从任意解码器拉取 PCM, 不关心具体编码格式.

use mog_core::MogResult;

/// 解码得到的流信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamInfo {
    /// 采样率 (Hz), 尚未成功解码任何帧时为 0
    pub sample_rate: u32,
    /// 声道数, 尚未成功解码任何帧时为 0
    pub channels: u32,
}

/// 拉取式 PCM 解码器
///
/// 解码流程:
/// 1. 打开字节源创建解码器 (此时不校验内容)
/// 2. 反复调用 `pull()` 取出交错排列的 f32 PCM 样本, 返回空向量表示流结束
/// 3. 调用 `close()` 释放字节源
///
/// 解码错误对当前流是终止性的: 调用方应记录错误并切换到下一首曲目.
pub trait Decoder: Send {
    /// 获取解码器名称
    fn name(&self) -> &str;

    /// 取出最多 `max_samples` 个交错样本
    fn pull(&mut self, max_samples: usize) -> MogResult<Vec<f32>>;

    /// 获取流信息, 至少成功解码一帧后有效
    fn stream_info(&self) -> StreamInfo;

    /// 释放字节源, 可重复调用
    fn close(&mut self);
}
