// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The CCTV event ruleset records served by the `RiskAreaList` endpoint. This is what
//! the `grid` binary shows when it isn't given a column spec.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;
use crate::{CellFormat, ColumnDef};

pub const EVENT_LIST_ENDPOINT: &str = "/gw/v1/RiskAreaList";
pub const EVENT_IDENTITY_FIELD: &str = "rowIndexNumber";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    pub row_index_number: u64,
    pub event_ruleset_name: String,
    pub cctv_id: String,
    pub cctv_name: String,
    pub pixel_polygon_area: Vec<Vec<f64>>,
    pub wgs_polygon_area: Vec<Value>,
    pub reg_date: String,
    #[serde(rename = "useYN")]
    pub use_yn: bool,
    pub event_ruleset_id: u64,
    pub video_channel_id: u64,
    pub event_type_code: String,
}

/// Column definitions for [`EventData`] records. The polygon areas are left out, you
/// can still see them in the detail popup via the context menu.
#[must_use]
pub fn event_table_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("rowIndexNumber", "No."),
        ColumnDef::new("eventRulesetName", "Event Rule Name"),
        ColumnDef::new("cctvId", "CCTV ID"),
        ColumnDef::new("cctvName", "CCTV Name"),
        ColumnDef::new("regDate", "Registered").with_format(CellFormat::DateTime),
        ColumnDef::new("useYN", "In Use").with_format(CellFormat::Flag {
            on: "Active".into(),
            off: "Inactive".into(),
        }),
        ColumnDef::new("eventRulesetId", "Event Rule ID"),
        ColumnDef::new("videoChannelId", "Video Channel ID"),
        ColumnDef::new("eventTypeCode", "Event Type"),
    ]
}

impl TryFrom<&EventData> for Record {
    type Error = serde_json::Error;

    fn try_from(event: &EventData) -> Result<Self, Self::Error> {
        serde_json::to_value(event).and_then(serde_json::from_value)
    }
}
