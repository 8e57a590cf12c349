// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod geometry;
pub mod grid_error;
pub mod ui_str;

// Re-export.
pub use geometry::*;
pub use grid_error::*;
pub use ui_str::*;
