// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod column;
pub mod grid_interaction;
pub mod grid_layout;
pub mod grid_view_model;
pub mod menu_item_provider;

// Re-export.
pub use column::*;
pub use grid_interaction::*;
pub use grid_layout::*;
pub use grid_view_model::*;
pub use menu_item_provider::*;
