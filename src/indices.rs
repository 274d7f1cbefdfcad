//! # 像素索引选择模块
//!
//! 给定图像尺寸和方法编号，生成有资格承载负载位的展平像素索引序列
//! (`idx = y * width + x`)，严格升序且无重复。
//!
//! 索引序列总是针对整幅图像计算；调用方通过丢弃小于 579 的前导元素来
//! 跳过保留的头部区域，而不是重新定义资格规则。头部本身始终通过
//! [`header_indices`] 按前 579 个原始索引寻址，与负载方法无关。

use crate::constants::HEADER_BITS;
use crate::error::{Result, StegoError};

/// 按给定方法枚举整幅图像中可承载负载位的展平像素索引。
///
/// * 方法 0：全部索引 `0..width*height`。
/// * 方法 1：仅偶数索引。
/// * 方法 2：仅奇数索引。
/// * 方法 3：仅边框像素 (`x ∈ {0, width-1}` 或 `y ∈ {0, height-1}`)，按行主序。
///
/// # Errors
///
/// 方法取值不在 0..=3 时返回 [`StegoError::UnsupportedMethod`]。
pub fn eligible_indices(width: u32, height: u32, method: u8) -> Result<Vec<usize>> {
    let total = width as usize * height as usize;

    let indices = match method {
        0 => (0..total).collect(),
        1 => (0..total).step_by(2).collect(),
        2 => (1..total).step_by(2).collect(),
        3 => {
            let (width, height) = (width as usize, height as usize);
            let mut indices = Vec::new();
            for y in 0..height {
                for x in 0..width {
                    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                        indices.push(y * width + x);
                    }
                }
            }
            indices
        }
        other => return Err(StegoError::UnsupportedMethod(other)),
    };

    Ok(indices)
}

/// 头部保留区域的寻址：前 579 个原始展平索引。
///
/// 与 [`eligible_indices`] 保持为两个独立的寻址函数，头部从不经过
/// 方法选择逻辑。
pub fn header_indices() -> std::ops::Range<usize> {
    0..HEADER_BITS
}
