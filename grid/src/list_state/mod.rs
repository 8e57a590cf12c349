// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod fetch_state;
pub mod list_state_struct;
pub mod list_store;

// Re-export.
pub use fetch_state::*;
pub use list_state_struct::*;
pub use list_store::*;
