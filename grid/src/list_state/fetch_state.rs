// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Where the list is in its fetch lifecycle. Being loading and having an error at the
/// same time can't be expressed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing in flight. Either nothing was fetched yet, or the last fetch worked.
    #[default]
    Idle,
    Loading,
    /// The last fetch failed. Holds the user facing message, not the cause.
    Failed(String),
}

impl FetchState {
    #[must_use]
    pub fn is_loading(&self) -> bool { matches!(self, FetchState::Loading) }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Display for FetchState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FetchState::Idle => write!(f, "idle"),
            FetchState::Loading => write!(f, "loading"),
            FetchState::Failed(message) => write!(f, "failed: {message}"),
        }
    }
}
