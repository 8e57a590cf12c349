// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod page_tokens;
pub mod page_window;
pub mod pagination_model;

// Re-export.
pub use page_tokens::*;
pub use page_window::*;
pub use pagination_model::*;
