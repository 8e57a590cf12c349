/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # r3bl_grid
//!
//! A fully async terminal data grid. It fetches paginated, sortable records from a
//! remote list endpoint and renders them in the terminal:
//!
//! - Click a column header to cycle its sort: none → ascending → descending → none.
//! - Right click a row (or the empty area below the rows) to open a context menu.
//! - Double click a non-empty cell to open a draggable detail popup. Its content is
//!   copied to the system clipboard.
//! - Use the pagination bar (or `n`, `p`, `g`, `G`, `+`, `-`) to move between pages and
//!   change the page size.
//!
//! # Data flow
//!
//! ```text
//! input event ──► ListState mutators ──► begin_fetch() ──► (FetchTicket, ListQuery)
//!                                                                │
//!       ┌─────────────── tokio task: ListFetcher::fetch_page ◄───┘
//!       ▼
//! AppSignal::FetchCompleted ──► apply_fetch_result() ──► GridViewModel ──► paint
//! ```
//!
//! All [`ListState`] mutation happens on the main event loop task. Fetches run on
//! spawned tasks, and their results come back as signals. Each fetch is tagged with a
//! [`FetchTicket`], and only the response for the latest ticket is applied. Responses
//! that arrive late for an older ticket are dropped.
//!
//! # Run the binary
//!
//! ```bash
//! GRID_API_BASE_URL=http://localhost:8080 cargo run --bin grid -- \
//!     --endpoint /gw/v1/RiskAreaList --company-id 2
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

/// Enables verbose logging for the list state container and the event loop.
pub const DEBUG_GRID_MOD: bool = true;
/// Enables verbose logging for requests sent to, and responses from, the list endpoint.
pub const DEBUG_GRID_FETCH: bool = true;
/// Enables verbose logging for context menus, detail popups, and the clipboard.
pub const DEBUG_GRID_OVERLAY: bool = false;

// Attach sources.
pub mod app;
pub mod clipboard;
pub mod common;
pub mod config;
pub mod fetch;
pub mod grid_view;
pub mod list_state;
pub mod log;
pub mod overlay;
pub mod pagination;
pub mod record;
pub mod sort;

// Re-export.
pub use app::*;
pub use clipboard::*;
pub use common::*;
pub use config::*;
pub use fetch::*;
pub use grid_view::*;
pub use list_state::*;
pub use log::*;
pub use overlay::*;
pub use pagination::*;
pub use record::*;
pub use sort::*;
