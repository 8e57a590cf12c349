// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod event_data;
pub mod list_page;
pub mod record_struct;

// Re-export.
pub use event_data::*;
pub use list_page::*;
pub use record_struct::*;
