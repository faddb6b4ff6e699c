use crate::record::AdifRecord;
use crate::types::{CALL, QSO_DATE, TIME_ON};

/// Identity of one contact event across independently produced logs.
///
/// Component values are compared exactly as logged; only field *names* are
/// case-canonicalized upstream. Two logs that disagree on value casing
/// (e.g. a lowercased callsign) deliberately do not match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactKey {
    /// Contacted callsign, verbatim.
    pub call: String,
    /// Contact date, verbatim.
    pub qso_date: String,
    /// Contact start time, verbatim.
    pub time_on: String,
}

impl ContactKey {
    /// Builds the key from a record, or `None` when any component is absent.
    pub fn of(record: &AdifRecord) -> Option<Self> {
        Some(Self {
            call: record.get(CALL)?.to_string(),
            qso_date: record.get(QSO_DATE)?.to_string(),
            time_on: record.get(TIME_ON)?.to_string(),
        })
    }
}
