use proptest::prelude::*;

use gridmerge::{
    codec,
    record::{AdifRecord, Header},
    types::FieldName,
};

fn field_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

// Printable ASCII including `<` and `>`; trimmed because the decoder trims
// values, and never embedding a record terminator because segment splitting
// runs before tag scanning.
fn field_value() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
        .prop_map(|s| s.trim().to_string())
        .prop_filter("value must not embed a record terminator", |v| {
            !v.to_ascii_lowercase().contains("<eor>")
        })
}

fn record_strategy() -> impl Strategy<Value = AdifRecord> {
    prop::collection::btree_map(field_name(), field_value(), 1..10).prop_map(|fields| {
        let mut record = AdifRecord::new();
        for (name, value) in fields {
            record.set(FieldName::canonical(&name), value);
        }
        record
    })
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(records in prop::collection::vec(record_strategy(), 1..20)) {
        let header = Header {
            text: "roundtrip log\n<eoh>".to_string(),
        };

        let text = codec::encode(&header, &records);
        let (decoded_header, decoded) = codec::decode(&text).expect("decode");

        prop_assert_eq!(decoded_header, header);
        prop_assert_eq!(decoded, records);
    }

    #[test]
    fn reencoding_decoded_output_is_stable(records in prop::collection::vec(record_strategy(), 1..12)) {
        let header = Header {
            text: "stability log\n<eoh>".to_string(),
        };

        let once = codec::encode(&header, &records);
        let (h, rs) = codec::decode(&once).expect("decode");
        let twice = codec::encode(&h, &rs);

        prop_assert_eq!(once, twice);
    }
}
