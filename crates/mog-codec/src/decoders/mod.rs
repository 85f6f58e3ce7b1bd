//! 解码器实现模块.

pub mod mp3;

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use mog_core::{MogError, MogResult};

use crate::decoder::Decoder;

/// 按文件开头的魔数选择解码器并打开文件
///
/// 目前只识别以 `FF FA` / `FF FB` 开头的 MPEG-1 Layer III 流.
pub fn open_path(path: impl AsRef<Path>) -> MogResult<Box<dyn Decoder>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut magic = Vec::with_capacity(2);
    (&mut file).take(2).read_to_end(&mut magic)?;
    file.seek(SeekFrom::Start(0))?;

    if mp3::probe(&magic) {
        log::debug!("{}: 识别为 MP3 流", path.display());
        return Ok(Box::new(mp3::Mp3Decoder::open(BufReader::new(file))?));
    }
    Err(MogError::Unsupported(format!(
        "无法识别的文件格式: {}",
        path.display(),
    )))
}
