// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Client side ordering of the records in the current page. The backend is asked to
//! sort as well, but the rows on screen follow the header indicator right away, even
//! before the new page arrives (or when the backend ignores the `sort` param).

use std::cmp::Ordering;

use serde_json::Value;

use super::{SortDirection, SortState};
use crate::Record;

/// Indices into `records`, in display order. The sort is stable, so rows that compare
/// equal keep the backend's order. Missing and `null` values always go last,
/// regardless of direction.
#[must_use]
pub fn sorted_row_indices(records: &[Record], sort_state: &SortState) -> Vec<usize> {
    let mut acc: Vec<usize> = (0..records.len()).collect();

    let Some(descriptor) = sort_state.descriptor() else {
        return acc;
    };

    acc.sort_by(|&lhs, &rhs| {
        let lhs = non_null(records[lhs].get(&descriptor.field_id));
        let rhs = non_null(records[rhs].get(&descriptor.field_id));
        match (lhs, rhs) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(lhs), Some(rhs)) => {
                let it = compare_values(lhs, rhs);
                match descriptor.direction {
                    SortDirection::Ascending => it,
                    SortDirection::Descending => it.reverse(),
                }
            }
        }
    });

    acc
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|it| !it.is_null())
}

/// Numbers compare numerically, strings lexicographically, `false < true`. Values of
/// different kinds are ordered by kind.
#[must_use]
pub fn compare_values(lhs: &Value, rhs: &Value) -> Ordering {
    match (lhs, rhs) {
        (Value::Number(lhs), Value::Number(rhs)) => {
            let lhs = lhs.as_f64().unwrap_or(f64::NAN);
            let rhs = rhs.as_f64().unwrap_or(f64::NAN);
            lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
        }
        (Value::String(lhs), Value::String(rhs)) => lhs.cmp(rhs),
        (Value::Bool(lhs), Value::Bool(rhs)) => lhs.cmp(rhs),
        _ => kind_rank(lhs).cmp(&kind_rank(rhs)),
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
