//! # mog-core
//!
//! mog 音乐服务核心库, 提供统一错误类型和比特流读写工具.
//!
//! 解码器与上层服务都依赖本 crate, 本 crate 自身不依赖任何解码细节.

pub mod bitreader;
pub mod bitwriter;
pub mod error;

// 重导出常用类型
pub use bitreader::BitReader;
pub use error::{MogError, MogResult};
