use std::fmt;

use hashbrown::{HashMap, HashSet};

use crate::record::AdifRecord;
use crate::types::{CALL, FieldName, GRIDSQUARE, OPERATOR, QSO_DATE, TIME_ON, TX_PWR};

use super::key::ContactKey;

/// Field names that must appear somewhere in each input file.
pub const REQUIRED_FIELDS: [&str; 4] = [CALL, QSO_DATE, TIME_ON, GRIDSQUARE];

/// Default optional enrichment fields copied when the source value is
/// non-empty.
pub const DEFAULT_OPTIONAL_FIELDS: [&str; 2] = [TX_PWR, OPERATOR];

/// One or more required field names never observed across a file's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumns {
    /// Required names absent from the whole file.
    pub missing: Vec<String>,
}

impl fmt::Display for MissingColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required columns: {}", self.missing.join(", "))
    }
}

impl std::error::Error for MissingColumns {}

/// Field-precedence knobs for the merge pass.
#[derive(Debug, Clone)]
pub struct MergePolicy {
    /// Locator precision kept when copying grid squares.
    pub grid_chars: usize,
    /// Fields copied from the source log when the source value is non-empty.
    pub optional_fields: Vec<FieldName>,
}

impl Default for MergePolicy {
    fn default() -> Self {
        Self {
            grid_chars: 4,
            optional_fields: DEFAULT_OPTIONAL_FIELDS
                .iter()
                .copied()
                .map(FieldName::canonical)
                .collect(),
        }
    }
}

/// Result of one merge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// One output record per target record, in target order.
    pub records: Vec<AdifRecord>,
    /// Target records that matched a source record.
    pub matched: usize,
}

/// Checks that every name in `required` is carried by at least one record.
///
/// This is a whole-file check: the names may be spread across different
/// records. It runs as a pre-pass before any merge work.
pub fn validate_required_columns(
    records: &[AdifRecord],
    required: &[&str],
) -> Result<(), MissingColumns> {
    let mut seen: HashSet<&str> = HashSet::new();
    for record in records {
        for name in record.field_names() {
            seen.insert(name.as_str());
        }
    }

    let missing: Vec<String> = required
        .iter()
        .copied()
        .filter(|name| !seen.contains(name))
        .map(String::from)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingColumns { missing })
    }
}

/// Joins `target` against `source` on [`ContactKey`] and applies the
/// field-precedence policy.
///
/// The source set is indexed once with first-occurrence-wins semantics;
/// each target record is then looked up in a single pass. Unmatched
/// records pass through unchanged. Decoder output is never mutated; every
/// output record is freshly constructed.
pub fn merge(source: &[AdifRecord], target: &[AdifRecord], policy: &MergePolicy) -> MergeOutcome {
    let mut by_key: HashMap<ContactKey, &AdifRecord> = HashMap::with_capacity(source.len());
    for record in source {
        if let Some(key) = ContactKey::of(record) {
            by_key.entry(key).or_insert(record);
        }
    }

    let mut records = Vec::with_capacity(target.len());
    let mut matched = 0usize;
    for original in target {
        let mut record = original.clone();
        let hit = ContactKey::of(original).and_then(|key| by_key.get(&key).copied());
        if let Some(enrichment) = hit {
            matched += 1;
            apply_enrichment(&mut record, enrichment, policy);
        }
        records.push(record);
    }

    MergeOutcome { records, matched }
}

/// Copies enrichment fields from `enrichment` into `record`.
///
/// A grid square overrides truncated to `policy.grid_chars`; optional
/// fields override verbatim. An empty source value carries no information
/// and never erases the target's own value.
fn apply_enrichment(record: &mut AdifRecord, enrichment: &AdifRecord, policy: &MergePolicy) {
    if let Some(grid) = enrichment.get(GRIDSQUARE).filter(|v| !v.is_empty()) {
        record.set(
            FieldName::canonical(GRIDSQUARE),
            truncate_chars(grid, policy.grid_chars),
        );
    }

    for field in &policy.optional_fields {
        if let Some(value) = enrichment.get(field.as_str()).filter(|v| !v.is_empty()) {
            record.set(field.clone(), value);
        }
    }
}

fn truncate_chars(s: &str, count: usize) -> String {
    s.chars().take(count).collect()
}
