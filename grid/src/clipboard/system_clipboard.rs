// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService};

/// The real clipboard. The `x11_fork` context keeps the copied text available after
/// the grid exits.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        let mut ctx = ClipboardContext::new()?;
        ctx.set_contents(content)?;
        Ok(())
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;
        Ok(content)
    }
}
