// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

/// Captures everything the painter writes, escape sequences included.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self { Self::default() }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
