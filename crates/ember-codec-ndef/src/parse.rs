//! 单条 NDEF 记录的解析，产出零拷贝字段视图。
//!
//! # 教案定位（Why）
//! - 与编码路径配对：标签读取流程需要把线上字节还原为结构化字段，回归测试也
//!   借助它验证编码产物可精确还原。
//! - 只解析**一条**记录并报告消耗的字节数；把多条记录组装成完整消息属于上层
//!   职责，不在本 crate 范围内。
//!
//! # 使用契约（What）
//! - 输入缓冲自偏移 0 起必须是一条记录的开头；尾随字节被忽略，调用方可依据
//!   [`NdefRecordView::wire_len`] 自行推进。
//! - 解析产物全部为输入缓冲的借用切片，调用期间底层数据须保持只读。
//!
//! # 设计考量（How）
//! - 用游标逐字段推进，每一步先校验剩余长度，再切出借用区间；全程不复制
//!   payload 字节。
//! - Chunk Flag 置位的记录直接拒绝，与编码侧「CF 恒为 0」的不变量对称。

use crate::{
    error::NdefParseError,
    record::{FLAG_CHUNK, FLAG_ID_PRESENT, FLAG_SHORT_RECORD, RecordLocation, Tnf},
};

/// 解析出的单条记录视图，所有字段借用输入缓冲。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdefRecordView<'a> {
    tnf: Tnf,
    location: RecordLocation,
    type_bytes: &'a [u8],
    id: &'a [u8],
    payload: &'a [u8],
    wire_len: usize,
}

impl<'a> NdefRecordView<'a> {
    /// 返回记录的 TNF。
    #[must_use]
    pub const fn tnf(&self) -> Tnf {
        self.tnf
    }

    /// 返回由 MB/ME 位还原的记录位置。
    #[must_use]
    pub const fn location(&self) -> RecordLocation {
        self.location
    }

    /// 返回 Type 字段的借用切片。
    #[must_use]
    pub const fn type_bytes(&self) -> &'a [u8] {
        self.type_bytes
    }

    /// 返回 ID 字段的借用切片；IL=0 时为空切片。
    #[must_use]
    pub const fn id(&self) -> &'a [u8] {
        self.id
    }

    /// 返回 payload 的借用切片。
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// 返回记录在线上占用的总字节数，供调用方跨过本条记录继续读取。
    #[must_use]
    pub const fn wire_len(&self) -> usize {
        self.wire_len
    }
}

/// 从缓冲起始处解析一条 NDEF 记录。
///
/// # 调用契约
/// - **输入**：`src` 自偏移 0 起为记录的标志字节；之后允许存在尾随数据。
/// - **返回值**：成功时为借用 `src` 的 [`NdefRecordView`]。
/// - **错误**：任一字段越过缓冲末尾返回 [`NdefParseError::RecordTruncated`]；
///   Chunk Flag 置位返回 [`NdefParseError::ChunkedRecord`]。
pub fn parse_record(src: &[u8]) -> Result<NdefRecordView<'_>, NdefParseError> {
    let mut cursor = 0usize;
    let fixed = take(src, &mut cursor, 2)?;
    let flags = fixed[0];
    if flags & FLAG_CHUNK != 0 {
        return Err(NdefParseError::ChunkedRecord);
    }
    let tnf = Tnf::from_bits(flags);
    let location = RecordLocation::from_flags(flags);
    let type_len = fixed[1] as usize;

    let payload_len = if flags & FLAG_SHORT_RECORD != 0 {
        take(src, &mut cursor, 1)?[0] as usize
    } else {
        let raw = take(src, &mut cursor, 4)?;
        u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]) as usize
    };
    let id_len = if flags & FLAG_ID_PRESENT != 0 {
        take(src, &mut cursor, 1)?[0] as usize
    } else {
        0
    };

    let type_bytes = take(src, &mut cursor, type_len)?;
    let id = take(src, &mut cursor, id_len)?;
    let payload = take(src, &mut cursor, payload_len)?;

    Ok(NdefRecordView {
        tnf,
        location,
        type_bytes,
        id,
        payload,
        wire_len: cursor,
    })
}

/// 自游标处切出 `len` 个字节并推进游标；剩余不足时报告截断。
fn take<'a>(src: &'a [u8], cursor: &mut usize, len: usize) -> Result<&'a [u8], NdefParseError> {
    let available = src.len() - *cursor;
    if len > available {
        return Err(NdefParseError::RecordTruncated { needed: len, available });
    }
    let slice = &src[*cursor..*cursor + len];
    *cursor += len;
    Ok(slice)
}
