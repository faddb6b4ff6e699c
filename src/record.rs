//! ADIF domain values: header block and ordered field records.

use hashbrown::HashMap;

use crate::types::FieldName;

/// Verbatim preamble text, up to and including the header terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Raw header text.
    pub text: String,
}

/// One logical contact entry as an insertion-ordered field mapping.
///
/// Names are stored canonicalized. Overwriting an existing field keeps its
/// position; a new field appends, so re-encoded output preserves the
/// original field order with merged-in fields at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdifRecord {
    values: HashMap<FieldName, String>,
    order: Vec<FieldName>,
}

impl AdifRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`, replacing any prior value.
    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        if self.values.insert(name.clone(), value.into()).is_none() {
            self.order.push(name);
        }
    }

    /// Looks up a field by its canonical name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true when the record carries `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.order
            .iter()
            .filter_map(|name| self.values.get(name).map(|value| (name, value.as_str())))
    }

    /// Iterates field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.order.iter()
    }
}
