//! NDEF 记录编码：头部位域合成与两阶段缓冲布局。
//!
//! # 教案定位（Why）
//! - 头部中 PAYLOAD_LENGTH 域的宽度（1 或 4 字节）取决于 payload 的真实长度，而
//!   真实长度只有在 payload 构造器运行之后才能知道，因此编码必须分两个阶段：
//!   先把 payload 物化到一个预留偏移，再据实补写头部。
//!
//! # 实现策略（How）
//! - 预留偏移采用**短格式**头部尺寸：payload 先写在短格式头部之后。多数记录
//!   payload 不超过 255 字节，此时布局一步到位；若实测为长格式，则在容量复查
//!   通过后把 payload 整体后移 3 字节，为 4 字节长度域让位。
//! - 之所以不预留 4 字节长度域的最坏偏移：那样「缓冲恰好等于成品记录长度」的
//!   短记录会在构造器阶段被误判为空间不足，违反精确容量边界的可观测契约。
//!   后移使用 `copy_within`，两段区间重叠时语义等同 `memmove`。
//!
//! # 风险提示（Trade-offs）
//! - 长记录付出一次至多 payload 长度的内存移动；若上层确知 payload 超过 255
//!   字节且对延迟敏感，可在未来扩展「构造器预报长度」的快速路径。

use crate::{
    error::NdefEncodeError,
    record::{
        FLAG_ID_PRESENT, FLAG_SHORT_RECORD, NdefRecordDesc, RecordLocation, SHORT_PAYLOAD_MAX,
    },
};

/// FLAGS、TYPE_LENGTH 与短格式 PAYLOAD_LENGTH 三个定长字节。
const SHORT_FIXED_HEADER: usize = 3;
/// 长格式 PAYLOAD_LENGTH（4 字节）相对短格式多出的字节数。
const LONG_FORM_EXTRA: usize = 3;

/// 把一条 NDEF 记录编码进调用方提供的输出缓冲，返回记录的总字节数。
///
/// # 调用契约
/// - **输入**：`desc` 描述记录身份与 payload 来源；`location` 决定 MB/ME 位；
///   `dst` 为调用方独占的输出缓冲，容量即 `dst.len()`。
/// - **返回值**：成功时为头部与 payload 的总长度，即记录在 `dst` 起始处占用的
///   字节数；本函数自身不会触碰记录末尾之后的字节。
/// - **错误**：容量不足返回 [`NdefEncodeError::BufferTooSmall`]；payload 构造器的
///   失败原样透传；构造器越界报告返回 [`NdefEncodeError::PayloadOverrun`]；
///   payload 长度超出 4 字节长度域返回 [`NdefEncodeError::FieldTooLong`]。
/// - **后置条件**：任何错误返回后 `dst` 的内容均未定义（payload 可能已部分写入），
///   调用方不得将其中字节解释为记录。本函数不重试，也没有部分成功语义。
/// - **并发**：无共享可变状态，可重入；多个调用只要使用互不重叠的输出缓冲即可
///   并发执行。
pub fn encode_record(
    desc: &NdefRecordDesc<'_>,
    location: RecordLocation,
    dst: &mut [u8],
) -> Result<usize, NdefEncodeError> {
    let type_len = desc.record_type().len();
    let id_len = desc.id().len();
    let id_present = id_len > 0;

    // 第一阶段：按短格式预留头部区间，把 payload 物化到预留偏移之后。
    let short_header = SHORT_FIXED_HEADER + usize::from(id_present) + type_len + id_len;
    if short_header > dst.len() {
        return Err(NdefEncodeError::BufferTooSmall {
            required: short_header,
            capacity: dst.len(),
        });
    }

    let available = dst.len() - short_header;
    let written = desc.constructor().construct_payload(&mut dst[short_header..])?;
    if written > available {
        return Err(NdefEncodeError::PayloadOverrun { written, available });
    }

    // 第二阶段：真实长度已知，决定长度域宽度并在需要时为其让位。
    let short_form = written <= SHORT_PAYLOAD_MAX;
    let header_len = if short_form {
        short_header
    } else {
        short_header + LONG_FORM_EXTRA
    };
    if !short_form {
        if u32::try_from(written).is_err() {
            return Err(NdefEncodeError::FieldTooLong {
                field: "payload",
                len: written,
            });
        }
        let required = header_len + written;
        if required > dst.len() {
            return Err(NdefEncodeError::BufferTooSmall {
                required,
                capacity: dst.len(),
            });
        }
        dst.copy_within(short_header..short_header + written, header_len);
    }

    // 合成标志字节：MB/ME 来自位置，CF 恒为 0。
    let mut flags = location.bits() | desc.tnf().bits();
    if short_form {
        flags |= FLAG_SHORT_RECORD;
    }
    if id_present {
        flags |= FLAG_ID_PRESENT;
    }
    dst[0] = flags;
    dst[1] = type_len as u8;
    let mut cursor = 2;
    if short_form {
        dst[cursor] = written as u8;
        cursor += 1;
    } else {
        dst[cursor..cursor + 4].copy_from_slice(&(written as u32).to_be_bytes());
        cursor += 4;
    }
    if id_present {
        dst[cursor] = id_len as u8;
        cursor += 1;
    }
    dst[cursor..cursor + type_len].copy_from_slice(desc.record_type());
    cursor += type_len;
    if id_present {
        dst[cursor..cursor + id_len].copy_from_slice(desc.id());
        cursor += id_len;
    }
    debug_assert_eq!(cursor, header_len);

    Ok(header_len + written)
}
