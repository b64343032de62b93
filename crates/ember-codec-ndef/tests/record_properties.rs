//! NDEF 记录编解码性质验证。
//!
//! # 教案式说明
//! - **Why**：逐字节向量只能钉住有限的代表点；编码布局的普适不变量（往返一致、
//!   报告长度恰为头部加 payload、容量边界精确）需要在随机描述符空间上验证。
//! - **How**：用 Proptest 随机生成 TNF、Type/ID 字节、payload（长度跨越 255/256
//!   边界）与记录位置，对每个样本断言：
//!   1. 精确容量缓冲编码成功且报告长度等于计算值；
//!   2. 解析产物逐字段还原原始描述符；
//!   3. 容量再少一个字节必然 `BufferTooSmall`；
//!   4. 标志字节各 bit 与描述符严格对应（CF 恒 0）。
//! - **What**：性质失败时 Proptest 会收缩出最小反例描述符，按字段对照排查。

use ember_codec_ndef::{
    BinPayloadDesc, FLAG_CHUNK, FLAG_ID_PRESENT, FLAG_SHORT_RECORD, LOCATION_MASK,
    NdefEncodeError, NdefRecordDesc, RecordLocation, SHORT_PAYLOAD_MAX, TNF_MASK, Tnf,
    encode_record, parse_record,
};
use proptest::prelude::*;

fn location_strategy() -> impl Strategy<Value = RecordLocation> {
    prop_oneof![
        Just(RecordLocation::First),
        Just(RecordLocation::Middle),
        Just(RecordLocation::Last),
        Just(RecordLocation::Lone),
    ]
}

/// 成品记录的精确总长：头部（长度域宽度依 payload 而定）加 payload。
fn required_len(type_len: usize, id_len: usize, payload_len: usize) -> usize {
    let len_field = if payload_len <= SHORT_PAYLOAD_MAX { 1 } else { 4 };
    2 + len_field + usize::from(id_len > 0) + type_len + id_len + payload_len
}

proptest! {
    /// 精确容量下编码成功，解析产物逐字段还原描述符。
    #[test]
    fn encode_parse_round_trip(
        tnf_bits in 0u8..8,
        record_type in proptest::collection::vec(any::<u8>(), 0..48),
        id in proptest::collection::vec(any::<u8>(), 0..48),
        payload in proptest::collection::vec(any::<u8>(), 0..600),
        location in location_strategy(),
    ) {
        let tnf = Tnf::from_bits(tnf_bits);
        let bin = BinPayloadDesc::new(&payload);
        let desc = NdefRecordDesc::new(tnf, &bin)
            .with_type(&record_type)
            .unwrap()
            .with_id(&id)
            .unwrap();

        let required = required_len(record_type.len(), id.len(), payload.len());
        let mut buf = vec![0u8; required];
        let written = encode_record(&desc, location, &mut buf).unwrap();
        prop_assert_eq!(written, required);

        let view = parse_record(&buf).unwrap();
        prop_assert_eq!(view.tnf(), tnf);
        prop_assert_eq!(view.location(), location);
        prop_assert_eq!(view.type_bytes(), record_type.as_slice());
        prop_assert_eq!(view.id(), id.as_slice());
        prop_assert_eq!(view.payload(), payload.as_slice());
        prop_assert_eq!(view.wire_len(), required);
    }

    /// 容量比成品记录少一个字节时，编码在某个阶段以 `BufferTooSmall` 失败。
    #[test]
    fn capacity_one_below_required_is_rejected(
        record_type in proptest::collection::vec(any::<u8>(), 0..32),
        id in proptest::collection::vec(any::<u8>(), 0..32),
        payload in proptest::collection::vec(any::<u8>(), 0..600),
        location in location_strategy(),
    ) {
        let bin = BinPayloadDesc::new(&payload);
        let desc = NdefRecordDesc::new(Tnf::MediaType, &bin)
            .with_type(&record_type)
            .unwrap()
            .with_id(&id)
            .unwrap();

        let required = required_len(record_type.len(), id.len(), payload.len());
        let mut buf = vec![0u8; required - 1];
        prop_assert!(
            matches!(
                encode_record(&desc, location, &mut buf),
                Err(NdefEncodeError::BufferTooSmall { .. })
            ),
            "expected BufferTooSmall when capacity is one byte short"
        );
    }

    /// 标志字节各 bit 与描述符严格对应；Chunk Flag 恒为 0。
    #[test]
    fn flags_byte_reflects_descriptor(
        tnf_bits in 0u8..8,
        id in proptest::collection::vec(any::<u8>(), 0..16),
        payload in proptest::collection::vec(any::<u8>(), 0..300),
        location in location_strategy(),
    ) {
        let tnf = Tnf::from_bits(tnf_bits);
        let bin = BinPayloadDesc::new(&payload);
        let desc = NdefRecordDesc::new(tnf, &bin).with_id(&id).unwrap();

        let mut buf = vec![0u8; required_len(0, id.len(), payload.len())];
        encode_record(&desc, location, &mut buf).unwrap();

        let flags = buf[0];
        prop_assert_eq!(flags & LOCATION_MASK, location.bits());
        prop_assert_eq!(flags & FLAG_CHUNK, 0);
        prop_assert_eq!(
            flags & FLAG_SHORT_RECORD != 0,
            payload.len() <= SHORT_PAYLOAD_MAX
        );
        prop_assert_eq!(flags & FLAG_ID_PRESENT != 0, !id.is_empty());
        prop_assert_eq!(flags & TNF_MASK, tnf.bits());
    }
}
