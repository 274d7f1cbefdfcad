//! # 头部编解码模块
//!
//! 负责固定 579 位头部结构与位序列之间的序列化和反序列化。
//! 字段按固定顺序排列，宽度精确，不存在变长字段：
//!
//! | 字段               | 宽度    | 含义                                   |
//! |--------------------|---------|----------------------------------------|
//! | info_type          | 1 位    | 0 = 文本负载, 1 = 文件负载             |
//! | method             | 2 位    | 0=全部, 1=偶数, 2=奇数, 3=边框         |
//! | filename           | 512 位  | UTF-8 文件名，NUL 填充至 64 字节       |
//! | first_bit_position | 32 位   | 第一个承载负载位的展平像素索引         |
//! | last_bit_position  | 32 位   | 最后一个承载负载位的展平像素索引       |

use crate::bits::bytes_to_bits;
use crate::constants::{FILENAME_BYTES, HEADER_BITS};
use crate::error::{Result, StegoError};

/// 嵌入图像的固定头部。
///
/// `info_type` 与 `method` 以原始整数形式保存；解码时不做字段语义校验，
/// 越界的 `method` 会在后续调用像素索引选择器时以
/// [`StegoError::UnsupportedMethod`] 的形式暴露。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StegoHeader {
    pub info_type: u8,
    pub method: u8,
    pub filename: [u8; FILENAME_BYTES],
    pub first_bit_position: u32,
    pub last_bit_position: u32,
}

impl StegoHeader {
    /// 将头部序列化为精确 579 位的位序列。
    pub fn to_bits(&self) -> Vec<u8> {
        let mut bits = Vec::with_capacity(HEADER_BITS);
        bits.push(self.info_type & 1);
        bits.push((self.method >> 1) & 1);
        bits.push(self.method & 1);
        bits.extend(bytes_to_bits(&self.filename));
        bits.extend(bytes_to_bits(&self.first_bit_position.to_be_bytes()));
        bits.extend(bytes_to_bits(&self.last_bit_position.to_be_bytes()));

        assert_eq!(bits.len(), HEADER_BITS);
        bits
    }

    /// 从位序列反序列化头部，是 [`StegoHeader::to_bits`] 的逆操作。
    ///
    /// 多余的位会被忽略，只消耗前 579 位。
    ///
    /// # Errors
    ///
    /// 提供的位数少于 579 时返回 [`StegoError::TruncatedHeader`]。
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        if bits.len() < HEADER_BITS {
            return Err(StegoError::TruncatedHeader {
                got: bits.len(),
                expected: HEADER_BITS,
            });
        }

        let info_type = bits[0];
        let method = (bits[1] << 1) | bits[2];

        let mut filename = [0u8; FILENAME_BYTES];
        let mut idx = 3;
        for byte in filename.iter_mut() {
            *byte = bits[idx..idx + 8]
                .iter()
                .fold(0u8, |acc, &bit| (acc << 1) | bit);
            idx += 8;
        }

        let mut read_u32 = || {
            let value = bits[idx..idx + 32]
                .iter()
                .fold(0u32, |acc, &bit| (acc << 1) | bit as u32);
            idx += 32;
            value
        };
        let first_bit_position = read_u32();
        let last_bit_position = read_u32();

        Ok(Self {
            info_type,
            method,
            filename,
            first_bit_position,
            last_bit_position,
        })
    }

    /// 取出文件名字段中第一个 NUL 之前的部分，按 UTF-8 解码
    /// (非法序列以替换字符代替)。字段全为零时返回 `None`。
    pub fn filename_str(&self) -> Option<String> {
        let end = self
            .filename
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(FILENAME_BYTES);
        if end == 0 {
            return None;
        }
        Some(String::from_utf8_lossy(&self.filename[..end]).into_owned())
    }
}

/// 将文件名编码为 UTF-8 并填充/截断到 64 字节的固定槽位。
pub fn pad_filename(name: &str) -> [u8; FILENAME_BYTES] {
    let mut slot = [0u8; FILENAME_BYTES];
    let encoded = name.as_bytes();
    let len = encoded.len().min(FILENAME_BYTES);
    slot[..len].copy_from_slice(&encoded[..len]);
    slot
}
