//! # Mog
//!
//! 纯 Rust 实现的 MPEG-1 Layer III 单声道解码器, 供 mog 音乐服务使用.
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use mog::codec::Mp3Decoder;
//!
//! # fn main() -> mog::core::MogResult<()> {
//! let mut decoder = Mp3Decoder::open_path("track.mp3")?;
//! loop {
//!     let pcm = decoder.pull(4096)?;
//!     if pcm.is_empty() {
//!         break;
//!     }
//!     // pcm: 单声道 f32 样本, 标称范围 [-1.0, 1.0]
//! }
//! println!("采样率: {} Hz", decoder.stream_info().sample_rate);
//! # Ok(())
//! # }
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `mog-core` | 错误类型与比特流读写 |
//! | `mog-codec` | 解码器接口与 MP3 解码器 |

/// 错误类型与比特流读写
pub use mog_core as core;

/// 解码器接口与 MP3 解码器
pub use mog_codec as codec;

pub mod logging;

/// 获取 Mog 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
