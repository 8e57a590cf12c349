// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use crate::{Record, stringify_value};

/// How date time cells are shown.
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset-less timestamps the backend is known to send.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// How the raw value of a cell is turned into text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CellFormat {
    /// See [`stringify_value`].
    #[default]
    Raw,
    /// Booleans (and `"Y"` / `"N"`) are shown as one of two labels.
    Flag { on: String, off: String },
    /// RFC 3339 or offset-less timestamps, and epoch millis, are shown w/
    /// [`DATE_TIME_DISPLAY_FORMAT`]. Anything else is shown as is.
    DateTime,
}

/// One column of the grid: which record field it shows, and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub id: String,
    pub header: String,
    pub sortable: bool,
    pub format: CellFormat,
}

impl ColumnDef {
    #[must_use]
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            format: CellFormat::Raw,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// The text shown in this column for `record`, or `None` for an empty cell.
    #[must_use]
    pub fn format_cell(&self, record: &Record) -> Option<String> {
        let value = record.get(&self.id)?;
        let raw = stringify_value(value)?;
        match &self.format {
            CellFormat::Raw => Some(raw),
            CellFormat::Flag { on, off } => Some(match flag_value(value) {
                Some(true) => on.clone(),
                Some(false) => off.clone(),
                None => raw,
            }),
            CellFormat::DateTime => Some(format_date_time(value).unwrap_or(raw)),
        }
    }
}

fn flag_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(it) => Some(*it),
        Value::String(it) if it.eq_ignore_ascii_case("y") => Some(true),
        Value::String(it) if it.eq_ignore_ascii_case("n") => Some(false),
        _ => None,
    }
}

fn format_date_time(value: &Value) -> Option<String> {
    match value {
        Value::Number(millis) => {
            let it = DateTime::from_timestamp_millis(millis.as_i64()?)?;
            Some(it.format(DATE_TIME_DISPLAY_FORMAT).to_string())
        }
        Value::String(text) => {
            if let Ok(it) = DateTime::parse_from_rfc3339(text) {
                return Some(it.format(DATE_TIME_DISPLAY_FORMAT).to_string());
            }
            NAIVE_DATE_TIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|it| it.format(DATE_TIME_DISPLAY_FORMAT).to_string())
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    use super::*;

    fn flag_column() -> ColumnDef {
        ColumnDef::new("useYN", "In Use").with_format(CellFormat::Flag {
            on: "Active".into(),
            off: "Inactive".into(),
        })
    }

    #[test_case(json!(true), Some("Active") ; "true")]
    #[test_case(json!(false), Some("Inactive") ; "false is not empty")]
    #[test_case(json!("Y"), Some("Active") ; "yes string")]
    #[test_case(json!("n"), Some("Inactive") ; "no string")]
    #[test_case(json!("maybe"), Some("maybe") ; "other string")]
    #[test_case(json!(null), None ; "null")]
    fn test_flag_format(value: Value, expected: Option<&str>) {
        let record = Record::from([("useYN", value)]);
        assert_eq!(flag_column().format_cell(&record).as_deref(), expected);
    }

    #[test_case(json!("2025-03-01T09:30:00Z"), "2025-03-01 09:30:00" ; "rfc 3339")]
    #[test_case(json!("2025-03-01T09:30:00+09:00"), "2025-03-01 09:30:00" ; "rfc 3339 w/ offset")]
    #[test_case(json!("2025-03-01T09:30:00.123"), "2025-03-01 09:30:00" ; "naive w/ fraction")]
    #[test_case(json!("2025-03-01 09:30:00"), "2025-03-01 09:30:00" ; "naive w/ space")]
    #[test_case(json!(0), "1970-01-01 00:00:00" ; "epoch millis")]
    #[test_case(json!("yesterday"), "yesterday" ; "unparseable")]
    fn test_date_time_format(value: Value, expected: &str) {
        let column = ColumnDef::new("regDate", "Registered").with_format(CellFormat::DateTime);
        let record = Record::from([("regDate", value)]);
        assert_eq!(column.format_cell(&record).as_deref(), Some(expected));
    }

    #[test]
    fn test_raw_format() {
        let column = ColumnDef::new("cctvName", "CCTV Name");
        assert!(column.sortable);
        assert_eq!(
            column.format_cell(&Record::from([("cctvName", json!("Gate 1"))])),
            Some("Gate 1".to_string())
        );
        assert_eq!(column.format_cell(&Record::from([("cctvName", json!(""))])), None);
        assert_eq!(column.format_cell(&Record::default()), None);
        assert!(!column.not_sortable().sortable);
    }
}
