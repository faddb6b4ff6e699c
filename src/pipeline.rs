//! End-to-end enrichment pass: decode both logs, merge, re-encode.

use std::fmt;

use serde::Serialize;

use crate::codec::{self, DecodeError};
use crate::merge::engine::{self, MergePolicy, MissingColumns, REQUIRED_FIELDS};

/// Which input file a fatal error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFile {
    /// The enrichment source carrying grid squares.
    Grids,
    /// The log being updated.
    Target,
}

impl fmt::Display for LogFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grids => f.write_str("grids log file"),
            Self::Target => f.write_str("target log file"),
        }
    }
}

/// Fatal pipeline failure. Either kind aborts the whole run before any
/// output text is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// One of the inputs failed to decode.
    Decode {
        /// File being decoded.
        file: LogFile,
        /// Underlying codec failure.
        source: DecodeError,
    },
    /// One of the inputs never carries a required column.
    MissingColumns {
        /// File that failed validation.
        file: LogFile,
        /// Names never observed in that file.
        source: MissingColumns,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { file, source } => write!(f, "failed to decode {file}: {source}"),
            Self::MissingColumns { file, source } => write!(f, "{source} in {file}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::MissingColumns { source, .. } => Some(source),
        }
    }
}

/// Summary counters for one enrichment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnrichReport {
    /// Records written to the output log.
    pub qsos_processed: usize,
    /// Target records that matched a grids-log record.
    pub qsos_matched: usize,
}

/// Enriches `target_text` with fields from `grids_text`.
///
/// Decodes both inputs, validates the required columns on each, merges
/// under `policy`, and re-encodes against the *target's* header. Returns
/// the serialized output log and the run counters.
pub fn enrich(
    grids_text: &str,
    target_text: &str,
    policy: &MergePolicy,
) -> Result<(String, EnrichReport), PipelineError> {
    let (_, grids_records) = codec::decode(grids_text).map_err(|source| PipelineError::Decode {
        file: LogFile::Grids,
        source,
    })?;
    let (target_header, target_records) =
        codec::decode(target_text).map_err(|source| PipelineError::Decode {
            file: LogFile::Target,
            source,
        })?;

    engine::validate_required_columns(&grids_records, &REQUIRED_FIELDS).map_err(|source| {
        PipelineError::MissingColumns {
            file: LogFile::Grids,
            source,
        }
    })?;
    engine::validate_required_columns(&target_records, &REQUIRED_FIELDS).map_err(|source| {
        PipelineError::MissingColumns {
            file: LogFile::Target,
            source,
        }
    })?;

    let outcome = engine::merge(&grids_records, &target_records, policy);
    let report = EnrichReport {
        qsos_processed: outcome.records.len(),
        qsos_matched: outcome.matched,
    };

    Ok((codec::encode(&target_header, &outcome.records), report))
}
