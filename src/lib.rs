//! # lsb_stash 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：固定布局的 579 位头部格式、
//! 四种可选的像素寻址方法，以及在像素网格中写入/恢复带长度前缀
//! 负载的嵌入与提取算法。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod header;
pub mod indices;
pub mod steganography;
