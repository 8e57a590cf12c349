// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod record_ordering;
pub mod sort_state;

// Re-export.
pub use record_ordering::*;
pub use sort_state::*;
