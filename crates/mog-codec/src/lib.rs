//! # mog-codec
//!
//! mog 音乐服务解码器库.
//!
//! ## 支持的格式
//!
//! - **MPEG-1 Layer III**: 单声道, 长块 (block_type 0/1/3), 不跨帧使用比特储备库
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use mog_codec::decoders::mp3::Mp3Decoder;
//!
//! let mut decoder = Mp3Decoder::open_path("song.mp3").unwrap();
//! loop {
//!     let pcm = decoder.pull(4096).unwrap();
//!     if pcm.is_empty() {
//!         break;
//!     }
//!     // 送往输出设备
//! }
//! let info = decoder.stream_info();
//! println!("{} Hz, {} 声道", info.sample_rate, info.channels);
//! ```

pub mod decoder;
pub mod decoders;

// 重导出常用类型
pub use decoder::{Decoder, StreamInfo};
pub use decoders::mp3::Mp3Decoder;
