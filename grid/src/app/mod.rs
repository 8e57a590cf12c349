// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod app_main;
pub mod app_signal;
pub mod grid_menu;
pub mod launcher;
pub mod terminal_painter;

#[cfg(test)]
pub mod test_string_writer;

// Re-export.
pub use app_main::*;
pub use app_signal::*;
pub use grid_menu::*;
pub use launcher::*;
pub use terminal_painter::*;
