//! ADIF contact-log enrichment: a tag-length-value codec plus a
//! key-matched record merge.
//!
//! Two independently produced amateur-radio logs are joined on the
//! (CALL, QSO_DATE, TIME_ON) triple; grid squares and selected station
//! metadata from the source log are copied into the target log, which is
//! then re-serialized in the same tagged wire format.
//!
//! # Examples
//!
//! ```
//! use gridmerge::{merge::engine::MergePolicy, pipeline};
//!
//! let grids = "Grids export\n<eoh>\n\
//!     <call:5>W1ABC <qso_date:8>20240101 <time_on:4>1200 <gridsquare:6>FN42ab <eor>\n";
//! let target = "WSJT-X ADIF Export\n<eoh>\n\
//!     <call:5>W1ABC <qso_date:8>20240101 <time_on:4>1200 <gridsquare:4>FN00 <eor>\n";
//!
//! let (updated, report) =
//!     pipeline::enrich(grids, target, &MergePolicy::default()).expect("enrich");
//! assert!(updated.contains("<gridsquare:4>FN42"));
//! assert_eq!(report.qsos_processed, 1);
//! assert_eq!(report.qsos_matched, 1);
//! ```
//!
//! Decoding alone:
//!
//! ```
//! use gridmerge::{codec, types::CALL};
//!
//! let raw = "note\n<EOH>\n<CALL:5>W1ABC <Mode>FT8 <eor>\n";
//! let (header, records) = codec::decode(raw).expect("decode");
//! assert_eq!(header.text, "note\n<EOH>");
//! assert_eq!(records[0].get(CALL), Some("W1ABC"));
//! assert_eq!(records[0].get("MODE"), Some("FT8"));
//! ```
#![deny(missing_docs)]

/// ADIF tag-length-value codec.
pub mod codec;
/// Defaults file for the command-line surface.
pub mod config;
/// Record matching and field-precedence merge.
pub mod merge;
/// Whole-file log access.
pub mod persist;
/// End-to-end enrichment pass and run reporting.
pub mod pipeline;
/// Header and ordered-record domain values.
pub mod record;
/// Field-name primitives and well-known field names.
pub mod types;
