// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clipboard_service;
pub mod system_clipboard;

// Re-export.
pub use clipboard_service::*;
pub use system_clipboard::*;
