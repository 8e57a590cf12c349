// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use crate::DEBUG_GRID_OVERLAY;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

/// Copies `content` into the clipboard. Failures (eg: no X11 display when running over
/// SSH) are logged and otherwise ignored, the caller never sees them. Returns whether
/// the copy worked.
pub fn copy_to_clipboard_best_effort(
    clipboard: &mut dyn ClipboardService,
    content: &str,
) -> bool {
    match clipboard.try_to_put_content_into_clipboard(content.to_string()) {
        Ok(()) => {
            DEBUG_GRID_OVERLAY.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋 Detail popup content copied to clipboard",
                    copied = %content,
                );
            });
            true
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not copy detail popup content to clipboard",
                error = %error,
            );
            false
        }
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }

    /// Behaves like a machine w/out a clipboard.
    #[derive(Debug, Default)]
    pub struct UnavailableClipboard;

    impl ClipboardService for UnavailableClipboard {
        fn try_to_put_content_into_clipboard(&mut self, _: String) -> ClipboardResult<()> {
            Err("clipboard is not available".into())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Err("clipboard is not available".into())
        }
    }
}
