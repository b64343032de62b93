//! NDEF 记录的数据模型：线上格式常量、TNF 与位置枚举、记录描述符。
//!
//! # 教案定位（Why）
//! - 记录描述符是编码器的唯一输入，把「记录是什么」与「记录如何生成 payload」
//!   （见 [`crate::payload`]）分离，编码算法只消费本模块的只读视图。
//! - 位域常量集中定义在这里，编码与解析共享同一套掩码，避免两侧各写一份魔法数。
//!
//! # 契约说明（What）
//! - [`NdefRecordDesc`] 仅借用调用方的字节序列，编码调用期间这些序列必须保持有效
//!   且不被修改；本 crate 不复制、不持有超出调用生命周期的引用。
//! - Type 与 ID 的长度上限在构造阶段校验（各占 1 字节长度域），编码路径因此
//!   可以直接做 `u8` 收窄而无需二次检查。
//!
//! # 设计考量（How）
//! - 按 REDESIGN 约定，描述符采用纯值构造（`new` + builder 方法），不提供任何
//!   进程级静态实例。
//! - 非法的记录位置在 [`RecordLocation::from_bits`] 边界被拒绝，越过该边界后
//!   类型系统保证位置恒为四个合法组合之一。

use core::fmt;

use crate::{error::NdefEncodeError, payload::PayloadConstructor};

/// 标志字节 bit 7：Message Begin，记录是消息的第一条。
pub const FLAG_MESSAGE_BEGIN: u8 = 0b1000_0000;
/// 标志字节 bit 6：Message End，记录是消息的最后一条。
pub const FLAG_MESSAGE_END: u8 = 0b0100_0000;
/// 标志字节 bit 5：Chunk Flag。本实现不支持分块 payload，编码恒置 0。
pub const FLAG_CHUNK: u8 = 0b0010_0000;
/// 标志字节 bit 4：Short Record，payload 长度域收窄为 1 字节。
pub const FLAG_SHORT_RECORD: u8 = 0b0001_0000;
/// 标志字节 bit 3：IL，记录携带 ID_LENGTH 与 ID 字段。
pub const FLAG_ID_PRESENT: u8 = 0b0000_1000;
/// 标志字节 bits 2-0：TNF 字段掩码。
pub const TNF_MASK: u8 = 0b0000_0111;
/// 标志字节中记录位置（MB/ME）两个 bit 的掩码。
pub const LOCATION_MASK: u8 = FLAG_MESSAGE_BEGIN | FLAG_MESSAGE_END;

/// Short Record 形态允许的最大 payload 长度（1 字节长度域）。
pub const SHORT_PAYLOAD_MAX: usize = 255;
/// Type 与 ID 字段各自的长度上限（1 字节长度域）。
pub const MAX_FIELD_LEN: usize = 255;

/// Type Name Format：3 bit 字段，说明 Type 字节序列应如何解释。
///
/// 取值与 NFC Forum NDEF 规范一致，完整覆盖 0–7 的全部编码空间，
/// 因此 [`Tnf::from_bits`] 在掩码后总能得到合法值，无需错误分支。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Tnf {
    /// 记录不携带 Type 与 payload。
    Empty = 0x00,
    /// NFC Forum well-known 类型（RTD）。
    WellKnown = 0x01,
    /// RFC 2046 定义的 media-type。
    MediaType = 0x02,
    /// RFC 3986 定义的绝对 URI。
    AbsoluteUri = 0x03,
    /// NFC Forum external 类型。
    External = 0x04,
    /// 类型未知，Type 字段应为空。
    Unknown = 0x05,
    /// 分块 payload 的后续分片使用；本实现不生成该值。
    Unchanged = 0x06,
    /// 保留值。
    Reserved = 0x07,
}

impl Tnf {
    /// 返回 3 bit 的线上编码值。
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// 从标志字节（或任意字节）的低 3 bit 还原 TNF。
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & TNF_MASK {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MediaType,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::External,
            0x05 => Self::Unknown,
            0x06 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// 记录在 NDEF 消息中的位置，决定标志字节的 MB/ME 位组合。
///
/// 判别值直接取 MB/ME 在标志字节中的位模式，编码时可与其余标志位按位或合成。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordLocation {
    /// 消息首条记录：MB=1，ME=0。
    First = 0b1000_0000,
    /// 消息中间记录：MB=0，ME=0。
    Middle = 0b0000_0000,
    /// 消息末条记录：MB=0，ME=1。
    Last = 0b0100_0000,
    /// 消息仅此一条记录：MB=1，ME=1。
    Lone = 0b1100_0000,
}

impl RecordLocation {
    /// 返回 MB/ME 位模式（已位于标志字节的 bit 7/6 位置）。
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// 从原始字节还原记录位置。
    ///
    /// # 调用契约
    /// - **输入**：期望值为四个合法位模式之一（`0x80`/`0x00`/`0x40`/`0xC0`）。
    /// - **错误**：其余任何字节（包括 MB/ME 之外还有置位的字节）返回
    ///   [`NdefEncodeError::InvalidLocation`]，这是非法位置输入的唯一拒绝点。
    pub const fn from_bits(bits: u8) -> Result<Self, NdefEncodeError> {
        match bits {
            0b1000_0000 => Ok(Self::First),
            0b0000_0000 => Ok(Self::Middle),
            0b0100_0000 => Ok(Self::Last),
            0b1100_0000 => Ok(Self::Lone),
            other => Err(NdefEncodeError::InvalidLocation { bits: other }),
        }
    }

    /// 从完整标志字节中提取 MB/ME 位组合；四种组合均合法，故不会失败。
    #[must_use]
    pub(crate) const fn from_flags(flags: u8) -> Self {
        match (
            flags & FLAG_MESSAGE_BEGIN != 0,
            flags & FLAG_MESSAGE_END != 0,
        ) {
            (true, false) => Self::First,
            (false, false) => Self::Middle,
            (false, true) => Self::Last,
            (true, true) => Self::Lone,
        }
    }
}

/// 单条 NDEF 记录的不可变描述符：身份字段加 payload 来源。
///
/// ### 设计意图（Why）
/// - 记录的「框架」（TNF、Type、ID）与「内容」（payload）由不同主体决定：前者是
///   静态身份，后者可能即时生成。描述符持有一个 [`PayloadConstructor`] 引用，
///   编码时才真正物化 payload 字节。
///
/// ### 契约描述（What）
/// - 所有字节序列均为调用方所有的借用；编码调用期间不得被修改。
/// - `id` 为空即表示记录不携带 ID 字段（IL=0），线上不会出现 ID_LENGTH 字节。
/// - `with_type`/`with_id` 在长度超出 1 字节长度域时返回
///   [`NdefEncodeError::FieldTooLong`]，保证已构造的描述符总能编码出合法头部。
///
/// ### 实现细节（How）
/// - 构造器引用使用 trait object，替代原始「函数指针 + 不透明上下文指针」的组合；
///   实现状态由各构造器类型自行携带。
#[derive(Clone, Copy)]
pub struct NdefRecordDesc<'a> {
    tnf: Tnf,
    id: &'a [u8],
    record_type: &'a [u8],
    constructor: &'a dyn PayloadConstructor,
}

impl<'a> NdefRecordDesc<'a> {
    /// 创建 Type 与 ID 均为空的描述符。
    #[must_use]
    pub fn new(tnf: Tnf, constructor: &'a dyn PayloadConstructor) -> Self {
        Self {
            tnf,
            id: &[],
            record_type: &[],
            constructor,
        }
    }

    /// 设置 Type 字段。
    ///
    /// - **错误条件**：`record_type.len() > 255` 时返回 `FieldTooLong`。
    pub fn with_type(mut self, record_type: &'a [u8]) -> Result<Self, NdefEncodeError> {
        if record_type.len() > MAX_FIELD_LEN {
            return Err(NdefEncodeError::FieldTooLong {
                field: "type",
                len: record_type.len(),
            });
        }
        self.record_type = record_type;
        Ok(self)
    }

    /// 设置 ID 字段；传入空切片等价于不携带 ID。
    ///
    /// - **错误条件**：`id.len() > 255` 时返回 `FieldTooLong`。
    pub fn with_id(mut self, id: &'a [u8]) -> Result<Self, NdefEncodeError> {
        if id.len() > MAX_FIELD_LEN {
            return Err(NdefEncodeError::FieldTooLong {
                field: "id",
                len: id.len(),
            });
        }
        self.id = id;
        Ok(self)
    }

    /// 返回记录的 TNF。
    #[must_use]
    pub const fn tnf(&self) -> Tnf {
        self.tnf
    }

    /// 返回 Type 字段的字节序列。
    #[must_use]
    pub const fn record_type(&self) -> &'a [u8] {
        self.record_type
    }

    /// 返回 ID 字段的字节序列；为空表示记录不携带 ID。
    #[must_use]
    pub const fn id(&self) -> &'a [u8] {
        self.id
    }

    /// 返回 payload 构造器引用。
    #[must_use]
    pub const fn constructor(&self) -> &'a dyn PayloadConstructor {
        self.constructor
    }
}

impl fmt::Debug for NdefRecordDesc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdefRecordDesc")
            .field("tnf", &self.tnf)
            .field("type_len", &self.record_type.len())
            .field("id_len", &self.id.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::BinPayloadDesc;

    #[test]
    fn tnf_bits_round_trip() {
        for bits in 0u8..=7 {
            assert_eq!(Tnf::from_bits(bits).bits(), bits);
        }
        // 高位在掩码后不影响还原结果。
        assert_eq!(Tnf::from_bits(0b1111_1001), Tnf::WellKnown);
    }

    #[test]
    fn location_accepts_only_defined_bit_patterns() {
        assert_eq!(RecordLocation::from_bits(0x80), Ok(RecordLocation::First));
        assert_eq!(RecordLocation::from_bits(0x00), Ok(RecordLocation::Middle));
        assert_eq!(RecordLocation::from_bits(0x40), Ok(RecordLocation::Last));
        assert_eq!(RecordLocation::from_bits(0xC0), Ok(RecordLocation::Lone));
        for bits in [0x01, 0x20, 0x41, 0x81, 0xC1, 0xFF] {
            assert_eq!(
                RecordLocation::from_bits(bits),
                Err(NdefEncodeError::InvalidLocation { bits })
            );
        }
    }

    #[test]
    fn desc_rejects_oversized_fields() {
        let payload = BinPayloadDesc::new(&[]);
        let long = [0u8; 256];
        let desc = NdefRecordDesc::new(Tnf::External, &payload);
        assert_eq!(
            desc.with_type(&long).unwrap_err(),
            NdefEncodeError::FieldTooLong {
                field: "type",
                len: 256,
            }
        );
        assert_eq!(
            desc.with_id(&long).unwrap_err(),
            NdefEncodeError::FieldTooLong {
                field: "id",
                len: 256,
            }
        );
    }
}
