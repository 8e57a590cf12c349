// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decoding of list endpoint responses. Two shapes are accepted:
//!
//! 1. An envelope object:
//!    ```json
//!    { "items": [ ... ], "totalItems": 95 }
//!    { "header": { "msg": "ok", "cd": 200 }, "eventList": [ ... ], "totCnt": 95 }
//!    ```
//!    If the total is missing, the number of records in the page is used.
//! 2. A bare array of records, in which case the total is the length of the array.

use serde::Deserialize;
use serde_json::Value;

use super::{IdentityField, Record, validate_unique_identities};
use crate::GridError;

/// One page of records, and the total number of records across all pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListPage {
    pub records: Vec<Record>,
    pub total_items: usize,
    /// The `header.msg` of an envelope response, if any. Only used for logging.
    pub server_message: Option<String>,
}

mod wire {
    use super::{Deserialize, Record};

    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum ListResponse {
        Bare(Vec<Record>),
        Envelope(Envelope),
    }

    #[derive(Debug, Deserialize)]
    pub struct Envelope {
        #[serde(default, alias = "eventList")]
        pub items: Option<Vec<Record>>,
        #[serde(default, rename = "totalItems", alias = "totCnt")]
        pub total_items: Option<u64>,
        #[serde(default)]
        pub header: Option<Header>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Header {
        #[serde(default)]
        pub msg: Option<String>,
        #[serde(default)]
        pub cd: Option<i64>,
    }
}

impl ListPage {
    #[must_use]
    pub fn new(records: Vec<Record>, total_items: usize) -> Self {
        Self {
            records,
            total_items,
            server_message: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`GridError::Decode`] if the value is neither an envelope w/ a record
    /// list, nor a bare array of records.
    pub fn try_from_json(value: Value) -> Result<Self, GridError> {
        let response: wire::ListResponse = serde_json::from_value(value)
            .map_err(|error| GridError::decode(format!("unexpected shape: {error}")))?;

        match response {
            wire::ListResponse::Bare(records) => {
                let total_items = records.len();
                Ok(Self::new(records, total_items))
            }
            wire::ListResponse::Envelope(envelope) => {
                let Some(records) = envelope.items else {
                    return Err(GridError::decode(
                        "object has neither `items` nor `eventList`",
                    ));
                };

                let total_items = match envelope.total_items {
                    Some(total) => usize::try_from(total).map_err(|_| {
                        GridError::decode(format!("total {total} does not fit in usize"))
                    })?,
                    None => records.len(),
                };

                let server_message = envelope.header.map(|header| {
                    format!(
                        "{} (cd: {})",
                        header.msg.unwrap_or_default(),
                        header.cd.map_or_else(|| "-".to_string(), |cd| cd.to_string())
                    )
                });

                Ok(Self {
                    records,
                    total_items,
                    server_message,
                })
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`GridError::Decode`] if the bytes aren't JSON, or the JSON doesn't have
    /// one of the accepted shapes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, GridError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|error| GridError::decode(format!("not JSON: {error}")))?;
        Self::try_from_json(value)
    }

    /// Checks that the identity field is unique within this page, and hands the page
    /// back if it is.
    ///
    /// # Errors
    ///
    /// See [`validate_unique_identities`].
    pub fn validated(self, identity_field: &IdentityField) -> Result<Self, GridError> {
        validate_unique_identities(&self.records, identity_field)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_items_and_total_items() {
        let page = ListPage::try_from_json(json!({
            "items": [{ "id": "a" }, { "id": "b" }],
            "totalItems": 42
        }))
        .unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_items, 42);
        assert_eq!(page.server_message, None);
    }

    #[test]
    fn test_event_list_and_tot_cnt() {
        let page = ListPage::try_from_json(json!({
            "header": { "msg": "success", "cd": 200 },
            "totCnt": 95,
            "eventList": [{ "rowIndexNumber": 1 }]
        }))
        .unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_items, 95);
        assert_eq!(page.server_message.as_deref(), Some("success (cd: 200)"));
    }

    #[test]
    fn test_missing_total_falls_back_to_record_count() {
        let page = ListPage::try_from_json(json!({ "items": [{}, {}, {}] })).unwrap();
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn test_bare_array() {
        let page = ListPage::try_from_slice(br#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn test_rejected_shapes() {
        for value in [
            json!({ "total": 3 }),
            json!([1, 2, 3]),
            json!("nope"),
            json!({ "items": [], "totalItems": -1 }),
        ] {
            let result = ListPage::try_from_json(value.clone());
            assert!(
                matches!(result, Err(GridError::Decode { .. })),
                "expected decode error for {value}"
            );
        }

        assert!(matches!(
            ListPage::try_from_slice(b"<html>"),
            Err(GridError::Decode { .. })
        ));
    }

    #[test]
    fn test_validated() {
        let page = ListPage::try_from_json(json!([{ "id": 1 }, { "id": 1 }])).unwrap();
        let result = page.validated(&IdentityField::Named("id".into()));
        assert!(matches!(result, Err(GridError::DuplicateRecordId { .. })));
    }
}
