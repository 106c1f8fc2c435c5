//! Field resolution.
//!
//! Looks values up by [`FieldPath`] and picks the first resolver of a column
//! that holds a usable value.

use serde_json::Value;

use crate::schema::{ColumnSpec, FieldPath};

/// Walks `path` through nested objects.
///
/// Returns `None` as soon as a segment is missing or an intermediate value is
/// not a container. Numeric segments index into arrays (`items.0.name`).
pub fn lookup<'a>(record: &'a Value, path: FieldPath) -> Option<&'a Value> {
    let mut current = record;
    for segment in path.segments() {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Whether a looked-up value counts as present.
///
/// `null` and `""` are absent; `false` and `0` are data.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// First present value among the column's resolvers, in declared order.
pub fn resolve<'a>(record: &'a Value, spec: &ColumnSpec) -> Option<&'a Value> {
    spec.resolvers()
        .filter_map(|path| lookup(record, path))
        .find(|value| is_present(value))
}
