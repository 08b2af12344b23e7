//! Property tests for header round-trips, sync and decoder robustness.

use proptest::prelude::*;
use tile3d::{
    decode_tile, B3dmBody, B3dmHeader, DecodeOptions, TileBody, TileError, TileHeader,
};

fn arb_header() -> impl Strategy<Value = B3dmHeader> {
    any::<[u32; 6]>().prop_map(|f| B3dmHeader {
        tile_byte_length: f[0],
        feature_table_json_byte_length: f[1],
        feature_table_binary_byte_length: f[2],
        batch_table_json_byte_length: f[3],
        batch_table_binary_byte_length: f[4],
        batch_length: f[5],
        ..B3dmHeader::new()
    })
}

fn arb_body() -> impl Strategy<Value = B3dmBody> {
    (
        proptest::collection::vec(any::<u8>(), 0..256),
        proptest::collection::vec(any::<u8>(), 0..64),
        proptest::collection::vec(any::<u8>(), 0..64),
        proptest::option::of(0u32..10_000),
    )
        .prop_map(|(payload, ft_binary, bt_binary, batch_length)| {
            let mut body = B3dmBody::from_payload(payload);
            *body.feature_table_mut().binary_mut() = ft_binary;
            *body.batch_table_mut().binary_mut() = bt_binary;
            if let Some(n) = batch_length {
                body.feature_table_mut()
                    .json_mut()
                    .insert("BATCH_LENGTH".into(), n.into());
            }
            body
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn header_round_trips_field_for_field(header in arb_header()) {
        let bytes = header.to_bytes();
        prop_assert_eq!(bytes.len(), 32);
        prop_assert_eq!(B3dmHeader::from_bytes(&bytes).unwrap(), header);
    }

    #[test]
    fn synced_header_round_trips(body in arb_body()) {
        let mut header = B3dmHeader::new();
        header.sync(&body);
        prop_assert_eq!(B3dmHeader::from_bytes(&header.to_bytes()).unwrap(), header);
    }

    #[test]
    fn sync_accounts_for_every_body_byte(body in arb_body()) {
        let mut header = B3dmHeader::new();
        header.sync(&body);
        prop_assert_eq!(header.tile_byte_length as usize, 32 + body.to_bytes().len());
        prop_assert_eq!(header.batch_length, body.batch_length());
    }

    #[test]
    fn sync_twice_changes_nothing(body in arb_body()) {
        let mut header = B3dmHeader::new();
        header.sync(&body);
        let once = header.clone();
        header.sync(&body);
        prop_assert_eq!(header, once);
    }

    #[test]
    fn header_length_must_be_exact(len in 0usize..96) {
        prop_assume!(len != 32);
        let buf = vec![0u8; len];
        prop_assert_eq!(
            B3dmHeader::from_bytes(&buf),
            Err(TileError::InvalidHeaderLength { expected: 32, actual: len })
        );
    }

    #[test]
    fn decoding_arbitrary_bytes_never_panics(
        tail in proptest::collection::vec(any::<u8>(), 0..128),
        lenient in any::<bool>(),
    ) {
        let mut bytes = b"b3dm".to_vec();
        bytes.extend_from_slice(&tail);
        let options = if lenient { DecodeOptions::lenient() } else { DecodeOptions::default() };
        let _ = decode_tile(&bytes, &options);
    }
}
