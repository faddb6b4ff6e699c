use crate::codec::EOR;
use crate::record::{AdifRecord, Header};

/// Serializes `records` after `header` in ADIF tag-length-value form.
///
/// The header is emitted verbatim plus one trailing newline, then one
/// record per line.
pub fn encode(header: &Header, records: &[AdifRecord]) -> String {
    let mut out = String::with_capacity(header.text.len() + records.len() * 64);
    out.push_str(&header.text);
    out.push('\n');
    for record in records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

/// Serializes one record as space-joined `<name:length>value` fields plus
/// the record terminator.
///
/// Every field is length-prefixed with its value's character count, so any
/// value (including ones containing `<`) survives a decode round trip.
/// Absent fields are simply not present in the record; empty values are
/// emitted as `<name:0>`.
pub fn encode_record(record: &AdifRecord) -> String {
    let mut out = String::new();
    for (name, value) in record.iter() {
        out.push_str(&format!(
            "<{}:{}>{}",
            name.as_str().to_ascii_lowercase(),
            value.chars().count(),
            value
        ));
        out.push(' ');
    }
    out.push_str(EOR);
    out
}
