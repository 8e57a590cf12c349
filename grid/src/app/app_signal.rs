// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::FetchCompleted;

/// Sent from spawned tasks back to the main event loop, over an mpsc channel.
#[derive(Debug)]
pub enum AppSignal {
    FetchCompleted(FetchCompleted),
}

impl From<FetchCompleted> for AppSignal {
    fn from(completed: FetchCompleted) -> Self { AppSignal::FetchCompleted(completed) }
}
