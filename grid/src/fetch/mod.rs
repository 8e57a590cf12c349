// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod http_list_fetcher;
pub mod list_fetcher;
pub mod list_query;

// Re-export.
pub use http_list_fetcher::*;
pub use list_fetcher::*;
pub use list_query::*;
