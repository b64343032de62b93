//! payload 构造器抽象与内置的二进制拷贝实现。
//!
//! # 教案定位（Why）
//! - 记录编码器不关心 payload 字节从哪里来：可能是现成的二进制块，也可能是
//!   即时生成的文本或嵌套结构。把「生成 payload」抽象为能力契约，编码器对其
//!   保持多态，上层的 URI/文本等构建器只需实现本 trait 即可接入。
//!
//! # 使用契约（What）
//! - 实现方在 `dst` 范围内写入 payload 并返回写入的字节数，绝不越界；空间不足时
//!   返回 [`NdefEncodeError::BufferTooSmall`]，此时 `dst` 中可能已有部分字节，
//!   但整个调用视为失败。
//! - 实现自定义的失败语义使用 [`NdefEncodeError::Constructor`]，编码器原样透传。
//!
//! # 设计考量（How）
//! - trait object 形式替代原始「函数指针 + 不透明上下文指针」的组合：实现状态
//!   由类型自身携带，取消了无类型指针。

use crate::error::NdefEncodeError;

/// payload 生成策略的能力契约。
///
/// ## 契约约束（What）
/// - `dst.len()` 即可用空间；返回值为实际写入的字节数，必须不大于 `dst.len()`。
/// - 若预期的 payload 放不进 `dst`，必须返回
///   [`NdefEncodeError::BufferTooSmall`] 而不是截断写入。
/// - 实现应当是可重入的纯函数：除向 `dst` 写入外不得有其它副作用。
pub trait PayloadConstructor {
    /// 在 `dst` 中物化 payload 字节，返回写入长度。
    fn construct_payload(&self, dst: &mut [u8]) -> Result<usize, NdefEncodeError>;
}

/// 内置 payload 来源：把一段现成的二进制数据按原样拷贝进记录。
///
/// 切片本身同时承载数据指针与长度，对应原始描述符中的「指针 + 长度」二元组。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinPayloadDesc<'a> {
    payload: &'a [u8],
}

impl<'a> BinPayloadDesc<'a> {
    /// 包装一段调用方所有的 payload 数据。
    #[must_use]
    pub const fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    /// 返回底层数据切片。
    #[must_use]
    pub const fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

impl PayloadConstructor for BinPayloadDesc<'_> {
    fn construct_payload(&self, dst: &mut [u8]) -> Result<usize, NdefEncodeError> {
        let len = self.payload.len();
        if len > dst.len() {
            return Err(NdefEncodeError::BufferTooSmall {
                required: len,
                capacity: dst.len(),
            });
        }
        dst[..len].copy_from_slice(self.payload);
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_copy_reports_written_length() {
        let desc = BinPayloadDesc::new(b"payload");
        let mut dst = [0u8; 16];
        assert_eq!(desc.construct_payload(&mut dst), Ok(7));
        assert_eq!(&dst[..7], b"payload");
    }

    #[test]
    fn bin_copy_fails_without_partial_success() {
        let desc = BinPayloadDesc::new(&[0xAA; 8]);
        let mut dst = [0u8; 4];
        assert_eq!(
            desc.construct_payload(&mut dst),
            Err(NdefEncodeError::BufferTooSmall {
                required: 8,
                capacity: 4,
            })
        );
        // 失败路径不写入任何字节。
        assert_eq!(dst, [0u8; 4]);
    }
}
