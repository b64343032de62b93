#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # ember-codec-ndef
//!
//! ## 教案目的（Why）
//! - **定位**：NFC Data Exchange Format (NDEF) 记录层的二进制编解码，是消息组装
//!   与标签写入栈底下的叶子 codec。
//! - **架构角色**：上层的 URI/文本等 well-known 构建器与多记录消息组装器都以本
//!   crate 的记录编码为基石；本 crate 自身不做无线传输，也不分配内存。
//! - **设计策略**：以「记录描述符 + 可插拔 payload 构造器」解耦记录框架与
//!   payload 生成，编码器对构造器保持多态。
//!
//! ## 交互契约（What）
//! - **依赖输入**：调用方提供只读的记录描述符与独占的定容输出缓冲（`&mut [u8]`），
//!   所有字节序列在调用期间保持有效且不被修改。
//! - **输出职责**：
//!   1. [`encode_record`] 把一条记录编码进输出缓冲并返回总长度；
//!   2. [`parse_record`] 把线上字节还原为零拷贝的 [`NdefRecordView`]；
//!   3. [`BinPayloadDesc`] 提供开箱即用的二进制拷贝构造器。
//! - **前置条件**：多记录消息的 MB/ME 排布由调用方通过 [`RecordLocation`] 指定，
//!   本 crate 不校验跨记录的序列一致性。
//!
//! ## 实现策略（How）
//! - **编码路径**：两阶段布局——先按短格式头部预留偏移物化 payload，真实长度
//!   确定后据实选择 1/4 字节长度域并在需要时整体后移 payload（策略取舍见
//!   [`encode_record`] 的契约说明）。
//! - **解析路径**：游标推进 + 借用切片，不复制 payload 字节。
//!
//! ## 风险提示（Trade-offs）
//! - **分块记录**：Chunk Flag 恒为 0，分块 payload 的生成与解析均不支持；需要
//!   分块时应在上层拆分为多条记录并另行实现。
//! - **失败后的缓冲内容**：编码失败后输出缓冲内容未定义（payload 可能已部分
//!   写入），调用方必须丢弃，不得尝试解读其中字节。

mod encode;
mod error;
mod parse;
mod payload;
mod record;

pub use crate::{
    encode::encode_record,
    error::{NdefEncodeError, NdefParseError},
    parse::{NdefRecordView, parse_record},
    payload::{BinPayloadDesc, PayloadConstructor},
    record::{
        FLAG_CHUNK, FLAG_ID_PRESENT, FLAG_MESSAGE_BEGIN, FLAG_MESSAGE_END, FLAG_SHORT_RECORD,
        LOCATION_MASK, MAX_FIELD_LEN, NdefRecordDesc, RecordLocation, SHORT_PAYLOAD_MAX, TNF_MASK,
        Tnf,
    },
};
