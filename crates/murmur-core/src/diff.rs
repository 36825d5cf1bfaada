//! Shallow change tracking for audit logging
//!
//! Compares two flat entry snapshots field by field and reports
//! before/after pairs for everything that changed, skipping bookkeeping
//! fields like the auto-updated modification timestamp. Values are compared
//! by their canonical JSON serialization, so object-valued fields with the
//! same pairs in a different insertion order count as changed; audit-log
//! consumers depend on that serialized-form comparison, so it stays as-is.
//! Nested objects are never diffed recursively, only compared whole.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Field excluded from diffs by default: the timestamp every write bumps
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 1] = ["updated_at"];

/// Canonical form of an absent field. Distinct from every real value's
/// serialization (the string "undefined" serializes with quotes).
const ABSENT: &str = "undefined";

/// Before/after pair for a single changed field
///
/// A side is `None` when the field was absent in that snapshot; absent
/// sides are skipped when serialized, matching the audit-log JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

/// Computes per-field changes between two flat snapshots
#[derive(Debug, Clone)]
pub struct ChangeDiffer {
    excluded: HashSet<String>,
}

impl ChangeDiffer {
    /// Differ with the default exclusion set
    pub fn new() -> Self {
        Self::with_excluded(DEFAULT_EXCLUDED_FIELDS)
    }

    /// Differ with an explicit exclusion set (replaces the default)
    pub fn with_excluded<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Exclude one more field
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.excluded.insert(field.into());
        self
    }

    /// Compute the changes between two flat snapshots.
    ///
    /// `None` snapshots contribute no keys. A key present on only one side
    /// always counts as changed. Errors only when a value cannot be
    /// serialized for comparison; the caller needs to tell "no change" from
    /// "comparison failed", so that never degrades to an empty result.
    pub fn diff(
        &self,
        before: Option<&Map<String, Value>>,
        after: Option<&Map<String, Value>>,
    ) -> Result<BTreeMap<String, FieldChange>> {
        let empty = Map::new();
        let before = before.unwrap_or(&empty);
        let after = after.unwrap_or(&empty);

        let mut keys: Vec<&String> = before.keys().collect();
        keys.extend(after.keys().filter(|k| !before.contains_key(k.as_str())));

        let mut changes = BTreeMap::new();
        for key in keys {
            if self.excluded.contains(key.as_str()) {
                continue;
            }

            let old = before.get(key.as_str());
            let new = after.get(key.as_str());
            if canonical(key, old)? != canonical(key, new)? {
                changes.insert(
                    key.clone(),
                    FieldChange {
                        before: old.cloned(),
                        after: new.cloned(),
                    },
                );
            }
        }

        debug!(changed = changes.len(), "snapshot diff computed");
        Ok(changes)
    }
}

impl Default for ChangeDiffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute changes with the default exclusion set
pub fn calculate_changes(
    before: Option<&Map<String, Value>>,
    after: Option<&Map<String, Value>>,
) -> Result<BTreeMap<String, FieldChange>> {
    ChangeDiffer::new().diff(before, after)
}

/// Canonical string form used for comparison
fn canonical(field: &str, value: Option<&Value>) -> Result<String> {
    match value {
        None => Ok(ABSENT.to_string()),
        Some(value) => serde_json::to_string(value).map_err(|source| Error::Unserializable {
            field: field.to_string(),
            source,
        }),
    }
}
