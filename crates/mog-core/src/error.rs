//! 统一错误类型定义.
//!
//! 所有 mog crate 共用的错误类型, 支持跨模块传播.
//! 解码控制层只需区分三类: 流错误 (`Io`/`Eof`/`SyncNotFound`),
//! 不支持的格式 (`Unsupported`), 码流不一致 (`InvalidData`).

use thiserror::Error;

/// mog 统一错误类型
#[derive(Debug, Error)]
pub enum MogError {
    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    /// 不支持的格式或功能
    #[error("不支持的格式: {0}")]
    Unsupported(String),

    /// I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 数据在结构中途结束 (截断的帧)
    #[error("已到达流末尾")]
    Eof,

    /// 流在搜索同步字期间结束
    #[error("未找到帧同步字 (已跳过 {skipped_bytes} 字节)")]
    SyncNotFound {
        /// 放弃前扫描过的字节数
        skipped_bytes: u64,
    },

    /// 无效数据 (损坏的码流等)
    #[error("无效数据: {0}")]
    InvalidData(String),
}

impl MogError {
    /// 是否为底层流错误 (读取失败或数据截断)
    pub fn is_stream_error(&self) -> bool {
        matches!(self, MogError::Io(_) | MogError::Eof)
    }

    /// 是否为不支持的格式
    pub fn is_unsupported(&self) -> bool {
        matches!(self, MogError::Unsupported(_))
    }
}

/// mog 统一 Result 类型
pub type MogResult<T> = Result<T, MogError>;
