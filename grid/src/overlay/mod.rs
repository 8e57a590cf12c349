// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod context_menu;
pub mod detail_popup;
pub mod overlay_manager;

// Re-export.
pub use context_menu::*;
pub use detail_popup::*;
pub use overlay_manager::*;
