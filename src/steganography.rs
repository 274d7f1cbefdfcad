//! # 隐写引擎模块
//!
//! 嵌入与提取的核心算法。嵌入端负责头部放置、容量校验和负载写入，
//! 返回被修改过的像素网格；提取端从固定位置读取头部，再按头部记录的
//! 方法恢复带长度前缀的负载。两端都是单遍、无状态的纯函数，调用之间
//! 不携带任何状态。
//!
//! 所有写入都只覆盖蓝色通道的最低有效位，其余两个通道和高 7 位保持
//! 不变，因此每个受影响像素的亮度变化至多 ±1。

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::constants::{HEADER_BITS, LENGTH_PREFIX_BYTES, MAX_PAYLOAD_BYTES};
use crate::error::{Result, StegoError};
use crate::header::{StegoHeader, pad_filename};
use crate::indices::{eligible_indices, header_indices};
use image::RgbImage;

/// 负载的类别，对应头部的 `info_type` 位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Text,
    File,
}

impl PayloadKind {
    fn to_bit(self) -> u8 {
        match self {
            PayloadKind::Text => 0,
            PayloadKind::File => 1,
        }
    }
}

/// 提取操作的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    /// 文本负载，字节序列由调用方按 UTF-8 解码。
    Text(Vec<u8>),
    /// 文件负载，附带从头部恢复的文件名 (可能为空)。
    File {
        name: Option<String>,
        data: Vec<u8>,
    },
}

/// 将负载嵌入图像，返回被修改过的像素网格。
///
/// 负载帧为 `4 字节大端长度前缀 ‖ 原始字节`，从大于等于 579 的第一个
/// 合格索引开始放置；头部固定写入前 579 个原始索引，与方法无关。
/// 文件名仅在 `kind` 为 [`PayloadKind::File`] 时写入，文本负载的
/// 文件名槽位保持全零。
///
/// # Errors
///
/// * [`StegoError::PayloadTooLarge`] — 负载超出 4 字节长度前缀的表示范围。
/// * [`StegoError::ImageTooSmall`] — 总像素数不足以容纳头部。
/// * [`StegoError::UnsupportedMethod`] — 方法取值不在 0..=3。
/// * [`StegoError::InsufficientCapacity`] — 所选方法的可用位数少于负载帧位长。
pub fn embed(
    mut image: RgbImage,
    payload: &[u8],
    kind: PayloadKind,
    method: u8,
    filename: &str,
) -> Result<RgbImage> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(StegoError::PayloadTooLarge(payload.len()));
    }

    let mut frame = Vec::with_capacity(LENGTH_PREFIX_BYTES + payload.len());
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);
    let frame_bits = bytes_to_bits(&frame);

    let (width, height) = image.dimensions();
    let total = width as usize * height as usize;
    if total < HEADER_BITS {
        return Err(StegoError::ImageTooSmall {
            pixels: total,
            required: HEADER_BITS,
        });
    }

    let positions = eligible_indices(width, height, method)?;
    let data_positions: Vec<usize> = positions
        .into_iter()
        .filter(|&pos| pos >= HEADER_BITS)
        .collect();

    if data_positions.len() < frame_bits.len() {
        return Err(StegoError::InsufficientCapacity {
            required: frame_bits.len(),
            available: data_positions.len(),
        });
    }

    let header = StegoHeader {
        info_type: kind.to_bit(),
        method,
        filename: match kind {
            PayloadKind::File => pad_filename(filename),
            PayloadKind::Text => pad_filename(""),
        },
        first_bit_position: data_positions[0] as u32,
        last_bit_position: data_positions[frame_bits.len() - 1] as u32,
    };

    write_bits(&mut image, header_indices(), &header.to_bits())?;
    write_bits(&mut image, data_positions.into_iter(), &frame_bits)?;

    Ok(image)
}

/// 从图像中提取隐藏内容。
///
/// 头部从固定区域读出后，提取过程完全由头部自描述：方法、负载类别和
/// 文件名都来自头部，不需要任何带外参数。负载长度从 32 位长度前缀
/// 重新推导，头部记录的 `last_bit_position` 仅作审计记录，不参与
/// 读取边界的判定。
///
/// # Errors
///
/// * [`StegoError::TruncatedHeader`] — 图像像素数少于 579。
/// * [`StegoError::UnsupportedMethod`] — 头部记录的方法越界。
/// * [`StegoError::InsufficientData`] — 合格像素在满足读取需求之前耗尽。
pub fn extract(image: &RgbImage) -> Result<Extracted> {
    let (width, height) = image.dimensions();
    let total = width as usize * height as usize;
    if total < HEADER_BITS {
        return Err(StegoError::TruncatedHeader {
            got: total,
            expected: HEADER_BITS,
        });
    }

    let header_bits = read_bits(image, header_indices(), HEADER_BITS)?;
    let header = StegoHeader::from_bits(&header_bits)?;

    let positions = eligible_indices(width, height, header.method)?;
    let start = (header.first_bit_position as usize).max(HEADER_BITS);
    let data_positions: Vec<usize> = positions
        .into_iter()
        .filter(|&pos| pos >= start)
        .collect();

    let length_bits = read_bits(image, data_positions.iter().copied(), 32)?;
    let length_bytes = bits_to_bytes(&length_bits)?;
    let payload_len = u32::from_be_bytes([
        length_bytes[0],
        length_bytes[1],
        length_bytes[2],
        length_bytes[3],
    ]) as usize;

    // 为简单起见，连同长度前缀一起重读整个负载帧。
    let frame_bits = read_bits(
        image,
        data_positions.iter().copied(),
        32 + payload_len * 8,
    )?;
    let payload = bits_to_bytes(&frame_bits)?[LENGTH_PREFIX_BYTES..].to_vec();

    match header.info_type {
        0 => Ok(Extracted::Text(payload)),
        _ => Ok(Extracted::File {
            name: header.filename_str(),
            data: payload,
        }),
    }
}

/// 按升序将位序列逐位写入给定位置上像素的蓝色通道最低有效位。
///
/// 位 `i` 总是写入第 `i` 个给定位置，这一顺序是格式不变量。位置耗尽
/// 而位未写完时返回 [`StegoError::InsufficientCapacity`]，这是对上游
/// 容量校验的兜底检查。
fn write_bits(
    image: &mut RgbImage,
    positions: impl Iterator<Item = usize>,
    bits: &[u8],
) -> Result<()> {
    let samples: &mut [u8] = image;

    let mut written = 0;
    for pos in positions {
        if written >= bits.len() {
            break;
        }
        let blue = &mut samples[pos * 3 + 2];
        *blue = (*blue & 0xFE) | bits[written];
        written += 1;
    }

    if written != bits.len() {
        return Err(StegoError::InsufficientCapacity {
            required: bits.len(),
            available: written,
        });
    }

    Ok(())
}

/// 按升序从给定位置上像素的蓝色通道最低有效位读取 `count` 个位。
fn read_bits(
    image: &RgbImage,
    positions: impl Iterator<Item = usize>,
    count: usize,
) -> Result<Vec<u8>> {
    let samples: &[u8] = image;

    let mut bits = Vec::with_capacity(count.min(samples.len() / 3));
    for pos in positions {
        if bits.len() >= count {
            break;
        }
        bits.push(samples[pos * 3 + 2] & 1);
    }

    if bits.len() < count {
        return Err(StegoError::InsufficientData {
            requested: count,
            available: bits.len(),
        });
    }

    Ok(bits)
}
