// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          time::Instant};

use crossterm::{cursor::{Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture, EventStream},
                execute,
                terminal::{self, EnterAlternateScreen, LeaveAlternateScreen}};
use futures_util::StreamExt;
use tokio::sync::mpsc;

use super::{AppEffect, AppMain, AppSignal, TerminalPainter};
use crate::{ClipboardService, CommonResult, DEBUG_GRID_MOD, GridConfig, GridError,
            ListFetcher, ListStore, SystemClipboard, size};

/// Room for fetch results that arrive while the event loop is busy painting.
const SIGNAL_CHANNEL_SIZE: usize = 16;

/// Takes over the terminal, runs the grid until the user quits, and then gives the
/// terminal back, even if the event loop failed.
pub async fn run_app(config: GridConfig) -> CommonResult<()> {
    let fetcher = config.try_create_fetcher()?;
    let state = config.try_create_list_state()?;
    let (cols, rows) = terminal::size().map_err(GridError::from)?;

    let mut app = AppMain::new(
        ListStore::new(state, fetcher),
        config.columns.clone(),
        SystemClipboard,
        size(cols, rows),
    );

    let mut stdout = io::stdout();
    enter_grid_screen(&mut stdout).map_err(GridError::from)?;

    let result = main_event_loop(&mut app, &mut stdout).await;
    let restored = leave_grid_screen(&mut stdout).map_err(GridError::from);

    result?;
    restored?;
    Ok(())
}

/// Fetch results and terminal input are both awaited here, on one task, so the list
/// state is only ever touched from this loop.
pub async fn main_event_loop<F, C, W>(app: &mut AppMain<F, C>, write: W) -> CommonResult<()>
where
    F: ListFetcher,
    C: ClipboardService,
    W: Write,
{
    let (sender, mut receiver) = mpsc::channel::<AppSignal>(SIGNAL_CHANNEL_SIZE);
    let mut event_stream = EventStream::new();
    let mut painter = TerminalPainter::new(write);

    DEBUG_GRID_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🏁 main_event_loop -> Startup", viewport = ?app.viewport());
    });

    app.spawn_fetch(sender.clone());
    painter.paint_app(app).map_err(GridError::from)?;

    loop {
        let effect = tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(event)) => app.on_event(&event, Instant::now()),
                Some(Err(error)) => return Err(GridError::from(error).into()),
                None => AppEffect::Exit,
            },
            Some(signal) = receiver.recv() => app.on_signal(signal),
        };

        match effect {
            AppEffect::Exit => break,
            AppEffect::Refetch => {
                app.spawn_fetch(sender.clone());
            }
            AppEffect::Nothing => {}
        }

        painter.paint_app(app).map_err(GridError::from)?;
    }

    DEBUG_GRID_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "🏁 main_event_loop -> Shutdown");
    });

    Ok(())
}

fn enter_grid_screen(write: &mut impl Write) -> io::Result<()> {
    enter_screen_with(write, terminal::enable_raw_mode, terminal::disable_raw_mode)
}

fn leave_grid_screen(write: &mut impl Write) -> io::Result<()> {
    leave_screen_with(write, terminal::disable_raw_mode)
}

/// If raw mode is on but the rest of the setup fails, the terminal is restored before
/// the error is returned.
fn enter_screen_with(
    write: &mut impl Write,
    enable_raw_mode: impl FnOnce() -> io::Result<()>,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(error) = execute!(write, EnterAlternateScreen, EnableMouseCapture, Hide) {
        leave_screen_with(write, disable_raw_mode).ok();
        return Err(error);
    }
    Ok(())
}

/// Raw mode is turned off even if the escape sequences can't be written.
fn leave_screen_with(
    write: &mut impl Write,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let restored = execute!(write, Show, DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    restored
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::test_string_writer::TestStringWriter;

    #[derive(Debug)]
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("terminal went away"))
        }

        fn flush(&mut self) -> io::Result<()> { Err(io::Error::other("terminal went away")) }
    }

    #[test]
    fn test_failed_setup_turns_raw_mode_back_off() {
        let raw_mode_on = Cell::new(false);
        let result = enter_screen_with(
            &mut BrokenWriter,
            || {
                raw_mode_on.set(true);
                Ok(())
            },
            || {
                raw_mode_on.set(false);
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!raw_mode_on.get());
    }

    #[test]
    fn test_failed_raw_mode_writes_nothing() {
        let mut write = TestStringWriter::new();
        let result = enter_screen_with(
            &mut write,
            || Err(io::Error::other("not a tty")),
            || Ok(()),
        );
        assert!(result.is_err());
        assert_eq!(write.get_buffer(), "");
    }

    #[test]
    fn test_enter_then_leave() {
        let raw_mode_on = Cell::new(false);
        let mut write = TestStringWriter::new();
        let enable = || {
            raw_mode_on.set(true);
            Ok(())
        };
        enter_screen_with(&mut write, enable, || Ok(())).unwrap();
        assert!(raw_mode_on.get());
        assert!(!write.get_buffer().is_empty());

        let disable = || {
            raw_mode_on.set(false);
            Ok(())
        };
        assert!(leave_screen_with(&mut BrokenWriter, disable).is_err());
        assert!(!raw_mode_on.get());
    }
}
