// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::HashSet,
          fmt::{Display, Formatter, Result}};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::GridError;

/// One row of backend supplied tabular data. The grid never looks inside the record
/// except through the field ids of its columns, so this is an opaque field map.
/// Records are read only on the client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

/// Which field identifies a record within a page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentityField {
    /// The backend doesn't supply an id, so the row position is the identity.
    #[default]
    RowPosition,
    Named(String),
}

impl Record {
    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&Value> { self.0.get(field_id) }

    /// The cell text for `field_id`, or `None` if the cell is empty. See
    /// [`stringify_value`].
    #[must_use]
    pub fn display_value(&self, field_id: &str) -> Option<String> {
        self.get(field_id).and_then(stringify_value)
    }

    /// # Errors
    ///
    /// Returns [`GridError::Decode`] if the record doesn't have the identity field, or
    /// if that field is empty.
    pub fn identity(
        &self,
        identity_field: &IdentityField,
        row_index: usize,
    ) -> std::result::Result<String, GridError> {
        match identity_field {
            IdentityField::RowPosition => Ok(row_index.to_string()),
            IdentityField::Named(field) => self.display_value(field).ok_or_else(|| {
                GridError::decode(format!(
                    "record at row {row_index} has no value for identity field `{field}`"
                ))
            }),
        }
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Record {
    fn from(pairs: [(&str, Value); N]) -> Self {
        Record(
            pairs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        )
    }
}

/// Turns a raw JSON value into the text shown in a cell, or copied from a detail
/// popup.
///
/// - `null` and `""` are empty, and return `None`.
/// - `0` and `false` are *not* empty.
/// - Arrays and objects are rendered as compact JSON.
#[must_use]
pub fn stringify_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(it) if it.is_empty() => None,
        Value::String(it) => Some(it.clone()),
        Value::Bool(it) => Some(it.to_string()),
        Value::Number(it) => Some(it.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Checks the invariant that the identity field is unique within a page.
///
/// # Errors
///
/// Returns [`GridError::DuplicateRecordId`] for the first repeated identity, or
/// [`GridError::Decode`] if a record is missing its identity.
pub fn validate_unique_identities(
    records: &[Record],
    identity_field: &IdentityField,
) -> std::result::Result<(), GridError> {
    let IdentityField::Named(field) = identity_field else {
        return Ok(());
    };

    let mut seen = HashSet::with_capacity(records.len());
    for (row_index, record) in records.iter().enumerate() {
        let id = record.identity(identity_field, row_index)?;
        if !seen.insert(id.clone()) {
            return Err(GridError::DuplicateRecordId {
                field: field.clone(),
                id,
            });
        }
    }

    Ok(())
}

impl Display for IdentityField {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            IdentityField::RowPosition => write!(f, "<row position>"),
            IdentityField::Named(field) => write!(f, "{field}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    #[test_case(json!(null), None; "null is empty")]
    #[test_case(json!(""), None; "empty string is empty")]
    #[test_case(json!("cam 1"), Some("cam 1"); "string")]
    #[test_case(json!(0), Some("0"); "zero is not empty")]
    #[test_case(json!(false), Some("false"); "false is not empty")]
    #[test_case(json!(12.5), Some("12.5"); "float")]
    #[test_case(json!([[1, 2], [3, 4]]), Some("[[1,2],[3,4]]"); "array")]
    fn test_stringify_value(value: Value, expected: Option<&str>) {
        assert_eq!(stringify_value(&value).as_deref(), expected);
    }

    #[test]
    fn test_display_value_for_missing_field() {
        let record = Record::from([("id", json!(1))]);
        assert_eq!(record.display_value("id"), Some("1".to_string()));
        assert_eq!(record.display_value("name"), None);
    }

    #[test]
    fn test_unique_identities() {
        let field = IdentityField::Named("id".into());
        let records = vec![
            Record::from([("id", json!(1))]),
            Record::from([("id", json!(2))]),
        ];
        assert!(validate_unique_identities(&records, &field).is_ok());

        let records = vec![
            Record::from([("id", json!(1))]),
            Record::from([("id", json!(1))]),
        ];
        let error = validate_unique_identities(&records, &field).unwrap_err();
        assert!(matches!(error, GridError::DuplicateRecordId { ref id, .. } if id == "1"));

        let records = vec![Record::from([("name", json!("x"))])];
        let error = validate_unique_identities(&records, &field).unwrap_err();
        assert!(matches!(error, GridError::Decode { .. }));
    }

    #[test]
    fn test_row_position_identity_never_collides() {
        let records = vec![Record::default(), Record::default()];
        assert!(validate_unique_identities(&records, &IdentityField::RowPosition).is_ok());
        assert_eq!(
            records[1].identity(&IdentityField::RowPosition, 1).unwrap(),
            "1"
        );
    }
}
