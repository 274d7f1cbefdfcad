//! # 错误类型模块
//!
//! 定义隐写核心所有可能的失败情况。所有错误都是输入的确定性函数，
//! 不存在可重试的瞬态条件。

use thiserror::Error;

/// 隐写核心的错误类型。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 嵌入方法的取值不在 {0, 1, 2, 3} 范围内。
    #[error("Unsupported embedding method: {0} (expected 0-3)")]
    UnsupportedMethod(u8),

    /// 图像的总像素数不足以容纳 579 位的固定头部。
    #[error("Image too small: {pixels} pixels, the header alone requires {required}")]
    ImageTooSmall { pixels: usize, required: usize },

    /// 所选方法在保留头部区域后的可用像素数小于负载帧的位长。
    #[error("Insufficient capacity. Required: {required} bits, Available: {available} bits")]
    InsufficientCapacity { required: usize, available: usize },

    /// 提供给头部解码器的位数少于 579。
    #[error("Truncated header: got {got} bits, expected {expected}")]
    TruncatedHeader { got: usize, expected: usize },

    /// 提取时图像中可读取的位数少于所需数量。
    #[error("Insufficient data: requested {requested} bits, only {available} available")]
    InsufficientData { requested: usize, available: usize },

    /// 位序列的长度不是 8 的倍数，无法转换为字节。
    #[error("Bit sequence length {0} is not a multiple of 8")]
    MisalignedBits(usize),

    /// 负载长度超出了 4 字节长度前缀所能表示的范围。
    #[error("Payload too large: {0} bytes exceeds the 4-byte length field")]
    PayloadTooLarge(usize),
}

/// 隐写核心操作的 Result 别名。
pub type Result<T> = std::result::Result<T, StegoError>;
