use gridmerge::{
    codec::{self, DecodeError},
    record::{AdifRecord, Header},
    types::{CALL, FieldName, GRIDSQUARE},
};

fn decode_records(raw: &str) -> Vec<AdifRecord> {
    codec::decode(raw).expect("decode").1
}

#[test]
fn header_is_kept_verbatim_and_markers_match_any_case() {
    let raw = "Generated by a logger\nrevision 2\n<EoH>\n\
        <CALL:5>W1ABC <eor>\n<call:5>K9XYZ <EOR>\n";

    let (header, records) = codec::decode(raw).expect("decode");
    assert_eq!(header.text, "Generated by a logger\nrevision 2\n<EoH>");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get(CALL), Some("W1ABC"));
    assert_eq!(records[1].get(CALL), Some("K9XYZ"));
}

#[test]
fn field_names_are_case_insensitive_on_read() {
    let upper = decode_records("<eoh><NAME:3>abc <eor>");
    let lower = decode_records("<eoh><name:3>abc <eor>");
    assert_eq!(upper, lower);
    assert_eq!(upper[0].get("NAME"), Some("abc"));
}

#[test]
fn implicit_form_stops_at_next_tag_and_trims() {
    let records = decode_records("<eoh><mode>FT8  <band>20m <eor>");
    assert_eq!(records[0].get("MODE"), Some("FT8"));
    assert_eq!(records[0].get("BAND"), Some("20m"));
}

#[test]
fn explicit_length_preserves_delimiter_characters() {
    let records = decode_records("<eoh><comment:9>a <b> c<d <eor>");
    assert_eq!(records[0].get("COMMENT"), Some("a <b> c<d"));
    assert_eq!(records[0].len(), 1);
}

#[test]
fn explicit_length_counts_characters_not_bytes() {
    let records = decode_records("<eoh><name:3>\u{3b1}\u{3b2}\u{3b3} <eor>");
    assert_eq!(records[0].get("NAME"), Some("\u{3b1}\u{3b2}\u{3b3}"));
}

#[test]
fn duplicate_name_keeps_last_value() {
    let records = decode_records("<eoh><call:5>W1ABC <CALL:5>K9XYZ <eor>");
    assert_eq!(records[0].get(CALL), Some("K9XYZ"));
    assert_eq!(records[0].len(), 1);
}

#[test]
fn zero_length_value_is_present_and_empty() {
    let records = decode_records("<eoh><gridsquare:0> <call:5>W1ABC <eor>");
    assert_eq!(records[0].get(GRIDSQUARE), Some(""));
    assert!(records[0].contains(GRIDSQUARE));
}

#[test]
fn blank_and_tagless_segments_are_dropped() {
    let records = decode_records("<eoh> stray text <eor>\n\n<eor> <call:5>W1ABC <eor>\n");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get(CALL), Some("W1ABC"));
}

#[test]
fn missing_header_terminator_is_fatal() {
    assert_eq!(
        codec::decode("<call:5>W1ABC <eor>"),
        Err(DecodeError::MissingHeaderTerminator)
    );
}

#[test]
fn unterminated_tag_is_fatal() {
    let err = codec::decode("<eoh><call:5>W1ABC <qso").expect_err("must fail");
    assert!(matches!(err, DecodeError::UnterminatedTag { .. }));
}

#[test]
fn length_past_end_of_segment_is_fatal() {
    let err = codec::decode("<eoh><call:10>W1ABC<eor>").expect_err("must fail");
    assert_eq!(
        err,
        DecodeError::LengthOutOfBounds {
            name: FieldName::canonical("call"),
            length: 10,
        }
    );
}

#[test]
fn non_decimal_length_is_fatal() {
    let err = codec::decode("<eoh><call:abc>W1ABC <eor>").expect_err("must fail");
    assert!(matches!(err, DecodeError::BadLength { .. }));

    // The three-part type-annotated tag form is out of scope.
    let err = codec::decode("<eoh><call:5:s>W1ABC <eor>").expect_err("must fail");
    assert!(matches!(err, DecodeError::BadLength { .. }));
}

#[test]
fn next_tag_reports_position_past_closing_bracket() {
    let text = "xx<call:5>W1ABC";
    let (tag, after) = codec::next_tag(text, 0).expect("scan").expect("tag");
    assert_eq!(tag.name, FieldName::canonical("CALL"));
    assert_eq!(tag.length, Some(5));
    assert_eq!(&text[after..], "W1ABC");

    assert_eq!(codec::next_tag(text, after).expect("scan"), None);
}

#[test]
fn encode_emits_lowercase_length_prefixed_fields() {
    let mut record = AdifRecord::new();
    record.set(FieldName::canonical("CALL"), "W1ABC");
    record.set(FieldName::canonical("GRIDSQUARE"), "");

    assert_eq!(
        codec::encode_record(&record),
        "<call:5>W1ABC <gridsquare:0> <eor>"
    );
}

#[test]
fn encode_joins_header_and_records_with_newlines() {
    let mut record = AdifRecord::new();
    record.set(FieldName::canonical("call"), "W1ABC");

    let header = Header {
        text: "log\n<eoh>".to_string(),
    };
    let text = codec::encode(&header, std::slice::from_ref(&record));
    assert_eq!(text, "log\n<eoh>\n<call:5>W1ABC <eor>\n");
}
