// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort field and direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortDescriptor {
    pub field_id: String,
    pub direction: SortDirection,
}

/// At most one column is sorted at a time. `None` means the backend's natural order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortState(pub Option<SortDescriptor>);

impl SortDescriptor {
    #[must_use]
    pub fn new(field_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field_id: field_id.into(),
            direction,
        }
    }

    /// Wire format sent to the list endpoint, eg: `regDate:desc`.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!("{}:{}", self.field_id, self.direction.as_str())
    }
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl SortState {
    #[must_use]
    pub fn none() -> Self { Self(None) }

    #[must_use]
    pub fn by(field_id: impl Into<String>, direction: SortDirection) -> Self {
        Self(Some(SortDescriptor::new(field_id, direction)))
    }

    #[must_use]
    pub fn descriptor(&self) -> Option<&SortDescriptor> { self.0.as_ref() }

    /// The direction `field_id` is sorted in, if it is the active sort field.
    #[must_use]
    pub fn direction_of(&self, field_id: &str) -> Option<SortDirection> {
        self.0
            .as_ref()
            .filter(|it| it.field_id == field_id)
            .map(|it| it.direction)
    }

    /// A header click. The clicked column cycles through
    /// none → ascending → descending → none. Clicking a column other than the active
    /// one starts that column at ascending.
    pub fn toggle(&mut self, field_id: &str) {
        self.0 = match self.direction_of(field_id) {
            None => Some(SortDescriptor::new(field_id, SortDirection::Ascending)),
            Some(SortDirection::Ascending) => {
                Some(SortDescriptor::new(field_id, SortDirection::Descending))
            }
            Some(SortDirection::Descending) => None,
        };
    }
}

impl Display for SortState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.0 {
            Some(it) => write!(f, "{}", it.to_query_value()),
            None => write!(f, "unsorted"),
        }
    }
}
