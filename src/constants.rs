/// 头部中负载类型标志的位宽 (0 = 文本, 1 = 文件)。
pub const INFO_TYPE_BITS: usize = 1;

/// 头部中嵌入方法字段的位宽。
/// 方法取值：0 = 全部像素, 1 = 偶数索引, 2 = 奇数索引, 3 = 边框像素。
pub const METHOD_BITS: usize = 2;

/// 头部中文件名槽位的字节数。
/// 文件名按 UTF-8 编码，不足时以 NUL 填充，超出时截断。
pub const FILENAME_BYTES: usize = 64;

/// 头部中单个像素位置字段 (first/last) 的位宽。
pub const POSITION_BITS: usize = 32;

/// 固定头部的总位数：1 + 2 + 512 + 32 + 32 = 579。
/// 无论选择哪种嵌入方法，头部始终占据展平索引 `[0, 579)`。
pub const HEADER_BITS: usize =
    INFO_TYPE_BITS + METHOD_BITS + FILENAME_BYTES * 8 + POSITION_BITS * 2;

/// 负载帧长度前缀的字节数 (大端序无符号整数)。
pub const LENGTH_PREFIX_BYTES: usize = 4;

/// 长度前缀所能表示的最大负载字节数。
pub const MAX_PAYLOAD_BYTES: usize = u32::MAX as usize;
