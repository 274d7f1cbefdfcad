//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取文本与文件。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取文本与文件。支持四种像素选择方法：0=全部像素，1=偶数索引，2=奇数索引，3=边框像素。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide-text (隐藏文本)、hide-file (隐藏文件) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏一段 UTF-8 文本。
    HideText(HideTextArgs),

    /// 在无损格式图像 (如 PNG, BMP) 中隐藏一个文件。
    HideFile(HideFileArgs),

    /// 从经过隐写的图像中提取隐藏的内容。
    Extract(ExtractArgs),
}

/// 'hide-text' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideTextArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容。
    #[arg(short, long)]
    pub message: String,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: PathBuf,

    /// 像素选择方法 (0=全部, 1=偶数, 2=奇数, 3=边框)。
    #[arg(short = 'M', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub method: u8,

    /// 如果输出文件已存在，允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'hide-file' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideFileArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文件路径。
    #[arg(short = 'F', long)]
    pub file: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    #[arg(short, long)]
    pub dest: PathBuf,

    /// 像素选择方法 (0=全部, 1=偶数, 2=奇数, 3=边框)。
    #[arg(short = 'M', long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub method: u8,

    /// 如果输出文件已存在，允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取内容的输出路径。文本默认打印到标准输出；
    /// 文件默认使用头部中恢复的文件名。
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// 如果输出文件已存在，允许覆盖。
    #[arg(short, long)]
    pub force: bool,
}
