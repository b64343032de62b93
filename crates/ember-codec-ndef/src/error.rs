//! NDEF 记录编解码错误类型定义。
//!
//! # 教案定位（Why）
//! - 编码与解析处于调用链的最底层，向上游暴露精确的失败原因，才能让标签写入流程
//!   判断是「缓冲不足需要换更大的内存」还是「输入描述符本身非法」。
//! - 与 `encode`/`parse` 模块解耦，避免字节处理逻辑与错误枚举互相污染。
//!
//! # 使用契约（What）
//! - [`NdefEncodeError`] 覆盖编码路径：缓冲容量、位置字段、描述符字段长度以及
//!   payload 构造器的契约违背；构造器自定义失败通过 `Constructor` 分支原样透传，
//!   编码器不做任何解释或降级。
//! - [`NdefParseError`] 覆盖解析路径：字段截断与不支持的分块记录。
//! - 所有变体实现 `Clone`/`PartialEq`，测试可以直接断言具体错误及其携带的诊断数据。
//!
//! # 设计考量（How）
//! - 错误枚举仅存储整型诊断数据或静态字符串，保证在 `no_std` 环境中可用。
//! - `Display` 输出面向排障人员；`#[cfg(feature = "std")]` 下补充 `Error` 实现，
//!   接入常规错误栈。

use core::fmt;

/// 编码 NDEF 记录时可能出现的错误。
///
/// ## 教案解读（Why）
/// - 每个分支对应一类调用方可以采取不同补救措施的失败：`BufferTooSmall` 需要更大
///   的输出缓冲；`InvalidLocation`/`FieldTooLong` 说明输入本身非法；`Constructor`
///   则来自可插拔的 payload 构造器，语义由实现方自行约定。
///
/// ## 契约定义（What）
/// - 任何错误返回后，输出缓冲内容均视为未定义，调用方不得将其中的字节当作
///   合法记录使用。
/// - 编码函数不会在内部重试；是否换用更大缓冲或调整位置由调用方决定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefEncodeError {
    /// 输出缓冲不足以容纳头部或完整记录。
    BufferTooSmall {
        /// 当前步骤至少需要的字节数。
        required: usize,
        /// 调用方实际提供的缓冲容量。
        capacity: usize,
    },
    /// 记录位置字节不是四个合法 MB/ME 组合之一。
    InvalidLocation {
        /// 实际读到的位置字节。
        bits: u8,
    },
    /// 描述符字段超出线上格式的长度上限（Type/ID 各 1 字节长度域，payload 4 字节）。
    FieldTooLong {
        /// 超限字段的静态名称（`"type"`、`"id"` 或 `"payload"`）。
        field: &'static str,
        /// 实际长度。
        len: usize,
    },
    /// payload 构造器报告的写入长度超过交给它的可用空间，契约被破坏。
    PayloadOverrun {
        /// 构造器声称写入的字节数。
        written: usize,
        /// 实际交给构造器的可用字节数。
        available: usize,
    },
    /// 可插拔 payload 构造器的自定义失败，编码器原样向上透传。
    Constructor {
        /// 构造器给出的静态失败原因。
        reason: &'static str,
    },
}

impl fmt::Display for NdefEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall { required, capacity } => {
                write!(f, "输出缓冲容量 {capacity} 不足，至少需要 {required} 字节")
            }
            Self::InvalidLocation { bits } => {
                write!(f, "记录位置字节 {bits:#04x} 不是合法的 MB/ME 组合")
            }
            Self::FieldTooLong { field, len } => {
                write!(f, "{field} 字段长度 {len} 超出线上格式上限")
            }
            Self::PayloadOverrun { written, available } => {
                write!(
                    f,
                    "payload 构造器声称写入 {written} 字节，但可用空间仅 {available} 字节"
                )
            }
            Self::Constructor { reason } => {
                write!(f, "payload 构造器失败：{reason}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NdefEncodeError {}

/// 解析单条 NDEF 记录时可能出现的错误。
///
/// ## 契约定义（What）
/// - 所有错误均表示「当前输入无法还原为一条完整记录」，调用方不得继续使用解析产物。
/// - 截断类错误携带所需/剩余字节数，便于定位是头部还是某个变长字段出了问题。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefParseError {
    /// 剩余字节不足以读出当前字段。
    RecordTruncated {
        /// 当前字段需要的字节数。
        needed: usize,
        /// 输入中剩余的字节数。
        available: usize,
    },
    /// 记录的 Chunk Flag 被置位；本实现不支持分块 payload。
    ChunkedRecord,
}

impl fmt::Display for NdefParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordTruncated { needed, available } => {
                write!(f, "记录被截断：字段需要 {needed} 字节，仅剩 {available} 字节")
            }
            Self::ChunkedRecord => f.write_str("记录的 Chunk Flag 被置位，分块 payload 不受支持"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NdefParseError {}
