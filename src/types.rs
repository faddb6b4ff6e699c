//! Shared field-name primitives and well-known ADIF field names.

use std::borrow::Borrow;
use std::fmt;

/// Contacted station callsign.
pub const CALL: &str = "CALL";
/// Contact date, YYYYMMDD.
pub const QSO_DATE: &str = "QSO_DATE";
/// Contact start time, HHMM or HHMMSS.
pub const TIME_ON: &str = "TIME_ON";
/// Maidenhead locator of the contacted station.
pub const GRIDSQUARE: &str = "GRIDSQUARE";
/// Transmit power in watts.
pub const TX_PWR: &str = "TX_PWR";
/// Operator callsign at the logging station.
pub const OPERATOR: &str = "OPERATOR";

/// Canonical ADIF field name: trimmed and ASCII-uppercased.
///
/// Canonicalization applies to names only; field values are never
/// case-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Canonicalizes a raw tag name.
    pub fn canonical(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }

    /// Canonical name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
