//! mog-probe - MP3 解码探测工具
//!
//! 完整解码一个 MPEG-1 Layer III 单声道文件, 输出采样率, 声道数, 样本数, 时长,
//! 帧数与峰值. 可选将解码得到的 PCM 以 f32 小端裸数据导出.

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use mog::codec::Mp3Decoder;
use mog::codec::decoders::mp3;
use mog::logging::{self, LoggingConfig};

/// Mog MP3 解码探测工具
#[derive(Parser, Debug)]
#[command(name = "mog-probe", version, about = "纯 Rust MP3 解码探测工具")]
struct Cli {
    /// 输入文件路径 (裸 MPEG-1 Layer III 流)
    input: PathBuf,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 将 PCM 以 f32le 裸数据写入该文件
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,

    /// 每次 pull 请求的样本数
    #[arg(long, default_value_t = 4096, value_parser = clap::value_parser!(u64).range(1..))]
    chunk: u64,

    /// 最多解码的样本数
    #[arg(long)]
    max_samples: Option<u64>,

    /// 日志目录
    #[arg(long, value_name = "DIR")]
    log_dir: Option<String>,

    /// 日志详细程度 (-v=debug, -vv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 探测结果
#[derive(Serialize, Debug)]
struct ProbeOutput {
    filename: String,
    codec_name: &'static str,
    sample_rate: u32,
    channels: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    bit_rate: Option<u32>,
    nb_samples: u64,
    nb_frames: u64,
    duration: f64,
    peak: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// 样本统计
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct SampleStats {
    samples: u64,
    peak: f32,
}

impl SampleStats {
    fn update(&mut self, pcm: &[f32]) {
        self.samples += pcm.len() as u64;
        self.peak = pcm.iter().fold(self.peak, |m, v| m.max(v.abs()));
    }

    fn duration(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            0.0
        } else {
            self.samples as f64 / f64::from(sample_rate)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_verbosity("mog-probe", cli.verbose);
    if let Some(dir) = &cli.log_dir {
        log_config.directory = dir.clone();
    }
    if let Err(e) = logging::init(&log_config) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    match run(&cli) {
        Ok(output) => {
            if let Err(e) = print_output(&output, cli.json) {
                eprintln!("错误: {e:#}");
                process::exit(1);
            }
            if output.error.is_some() {
                process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("探测失败: {:#}", e);
            eprintln!("错误: {e:#}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<ProbeOutput> {
    if !looks_like_mp3(&cli.input)? {
        tracing::warn!(
            "{} 不以 MP3 帧头开头, 尝试搜索同步字",
            cli.input.display()
        );
    }

    let mut decoder = Mp3Decoder::open_path(&cli.input)
        .with_context(|| format!("打开输入文件失败: {}", cli.input.display()))?;
    let mut dump = match &cli.dump {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("创建导出文件失败: {}", path.display()))?,
        )),
        None => None,
    };

    let mut stats = SampleStats::default();
    let mut error = None;
    let limit = cli.max_samples.unwrap_or(u64::MAX);
    while stats.samples < limit {
        let want = cli.chunk.min(limit - stats.samples) as usize;
        let pcm = match decoder.pull(want) {
            Ok(pcm) => pcm,
            Err(e) => {
                tracing::warn!("解码在 {} 个样本后停止: {}", stats.samples, e);
                error = Some(e.to_string());
                break;
            }
        };
        if pcm.is_empty() {
            break;
        }
        stats.update(&pcm);
        if let Some(w) = dump.as_mut() {
            write_pcm(w, &pcm)?;
        }
    }
    if let Some(mut w) = dump {
        w.flush().context("写入导出文件失败")?;
    }

    let info = decoder.stream_info();
    let output = ProbeOutput {
        filename: cli.input.display().to_string(),
        codec_name: "mp3",
        sample_rate: info.sample_rate,
        channels: info.channels,
        bit_rate: decoder
            .last_header()
            .map(|h| h.bitrate_kbps() * 1000)
            .filter(|&b| b > 0),
        nb_samples: stats.samples,
        nb_frames: decoder.frames_decoded(),
        duration: stats.duration(info.sample_rate),
        peak: stats.peak,
        error,
    };
    decoder.close();

    tracing::info!(
        "{}: {} 帧, {} 个样本",
        output.filename,
        output.nb_frames,
        output.nb_samples
    );
    Ok(output)
}

/// 检查文件开头是否为 MP3 帧头
fn looks_like_mp3(path: &Path) -> Result<bool> {
    let mut magic = Vec::with_capacity(2);
    File::open(path)
        .with_context(|| format!("打开输入文件失败: {}", path.display()))?
        .take(2)
        .read_to_end(&mut magic)?;
    Ok(mp3::probe(&magic))
}

/// 以 f32 小端格式写出样本
fn write_pcm<W: Write>(writer: &mut W, pcm: &[f32]) -> Result<()> {
    for sample in pcm {
        writer.write_all(&sample.to_le_bytes())?;
    }
    Ok(())
}

fn print_output(output: &ProbeOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(output)?);
        return Ok(());
    }
    if output.nb_frames == 0 && output.error.is_some() {
        bail!(
            "{}: 未能解码任何帧 ({})",
            output.filename,
            output.error.as_deref().unwrap_or_default()
        );
    }

    println!("文件: {}", output.filename);
    println!("编解码器: {}", output.codec_name);
    println!("采样率: {} Hz", output.sample_rate);
    println!("声道数: {}", output.channels);
    if let Some(bit_rate) = output.bit_rate {
        println!("码率: {} kb/s", bit_rate / 1000);
    }
    println!("帧数: {}", output.nb_frames);
    println!("样本数: {}", output.nb_samples);
    println!("时长: {:.3} 秒", output.duration);
    println!("峰值: {:.6}", output.peak);
    if let Some(err) = &output.error {
        println!("解码错误: {err}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args() {
        let cli = Cli::try_parse_from(["mog-probe", "a.mp3", "--json", "-vv", "--chunk", "1152"])
            .unwrap();
        assert_eq!(cli.input, PathBuf::from("a.mp3"));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.chunk, 1152);
        assert!(cli.dump.is_none());

        assert!(Cli::try_parse_from(["mog-probe", "a.mp3", "--chunk", "0"]).is_err());
        assert!(Cli::try_parse_from(["mog-probe"]).is_err());
    }

    #[test]
    fn test_sample_stats() {
        let mut stats = SampleStats::default();
        stats.update(&[0.25, -0.75, 0.5]);
        stats.update(&[]);
        stats.update(&[0.1]);
        assert_eq!(stats.samples, 4);
        assert_eq!(stats.peak, 0.75);
        assert_eq!(stats.duration(0), 0.0);
        assert_eq!(stats.duration(4), 1.0);
    }

    #[test]
    fn test_write_pcm_and_magic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pcm.raw");
        let mut file = File::create(&path).unwrap();
        write_pcm(&mut file, &[1.0, -0.5]).unwrap();
        drop(file);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..], &(-0.5f32).to_le_bytes());
        assert!(!looks_like_mp3(&path).unwrap());

        let mp3_path = dir.path().join("a.mp3");
        std::fs::write(&mp3_path, [0xFF, 0xFB, 0x90, 0xC0]).unwrap();
        assert!(looks_like_mp3(&mp3_path).unwrap());
        assert!(looks_like_mp3(&dir.path().join("missing.mp3")).is_err());
    }
}
