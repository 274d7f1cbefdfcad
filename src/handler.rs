//! # 命令处理逻辑模块
//!
//! 包含处理 `hide-text`、`hide-file` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{ExtractArgs, HideFileArgs, HideTextArgs};
use crate::steganography::{Extracted, PayloadKind, embed, extract};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::fs;
use std::path::{Path, PathBuf};

/// 检查输出路径是否可以安全写入。
///
/// 目标文件已存在且未指定 `--force` 时返回错误。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 读取输入图像并转换为 RGB 像素网格。
fn load_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.to_rgb8())
}

/// 处理 'hide-text' 命令的执行逻辑。
///
/// 负责读取输入图像、将文本负载嵌入像素网格，并把结果图像写入目标路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像容量不足或核心嵌入函数 (`embed`) 执行失败。
/// * 无法写入到目标图像文件。
pub fn handle_hide_text(args: HideTextArgs) -> Result<()> {
    ensure_writable(&args.dest, args.force)?;
    let picture = load_image(&args.image)?;

    let stego = embed(
        picture,
        args.message.as_bytes(),
        PayloadKind::Text,
        args.method,
        "",
    )
    .with_context(|| {
        format!(
            "Failed to hide the text in image {} using method {}.",
            args.image.to_string_lossy().red().bold(),
            args.method.to_string().green()
        )
    })?;

    stego.save(&args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'hide-file' 命令的执行逻辑。
///
/// 与 `hide-text` 类似，但负载来自文件，并把文件名记录到头部，
/// 以便提取时恢复。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像或负载文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像容量不足或核心嵌入函数 (`embed`) 执行失败。
/// * 无法写入到目标图像文件。
pub fn handle_hide_file(args: HideFileArgs) -> Result<()> {
    ensure_writable(&args.dest, args.force)?;
    let picture = load_image(&args.image)?;

    let payload = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let filename = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stego = embed(
        picture,
        &payload,
        PayloadKind::File,
        args.method,
        &filename,
    )
    .with_context(|| {
        format!(
            "Failed to hide file {} in image {} using method {}.",
            args.file.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold(),
            args.method.to_string().green()
        )
    })?;

    stego.save(&args.dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The file has been successfully hidden and saved: {}",
        args.dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'extract' 命令的执行逻辑。
///
/// 从隐写图像中恢复隐藏内容。文本在未指定输出路径时打印到标准输出；
/// 文件优先写入指定路径，其次是头部中恢复的文件名，最后回退到
/// `output.bin`。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入图像文件。
/// * 核心提取函数 (`extract`) 执行失败 (图像可能不含隐藏数据或已损坏)。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到输出文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let picture = load_image(&args.image)?;

    let recovered = extract(&picture).with_context(|| {
        format!(
            "Failed to extract hidden data from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match recovered {
        Extracted::Text(data) => {
            let text = String::from_utf8_lossy(&data);
            match args.out {
                Some(path) => {
                    ensure_writable(&path, args.force)?;
                    fs::write(&path, text.as_bytes()).with_context(|| {
                        format!(
                            "Unable to write to target text file: {}",
                            path.to_string_lossy().red().bold()
                        )
                    })?;
                    println!(
                        "The text has been successfully extracted and saved: {}",
                        path.to_string_lossy().green().bold()
                    );
                }
                None => println!("{}", text),
            }
        }
        Extracted::File { name, data } => {
            let path = args
                .out
                .or_else(|| name.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("output.bin"));
            ensure_writable(&path, args.force)?;
            fs::write(&path, &data).with_context(|| {
                format!(
                    "Unable to write to target file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The file has been successfully extracted and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
    }

    Ok(())
}
