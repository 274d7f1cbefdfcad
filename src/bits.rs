//! # 位编解码模块
//!
//! 在字节序列与有序位序列 (每位以 `u8` 的 0/1 表示，最高有效位在前)
//! 之间转换。这是其他组件在面向字节的负载与面向像素的位流之间
//! 移动数据所用的唯一原语。

use crate::error::{Result, StegoError};

/// 将字节序列展开为位序列，每个字节产生 8 位，最高有效位在前。
///
/// 结果长度恒为 `8 * data.len()`。
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1);
        }
    }
    bits
}

/// 将位序列还原为字节序列，是 [`bytes_to_bits`] 的逆操作。
///
/// # Errors
///
/// 如果位序列的长度不是 8 的倍数，返回 [`StegoError::MisalignedBits`]。
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(StegoError::MisalignedBits(bits.len()));
    }

    let bytes = bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect();

    Ok(bytes)
}
