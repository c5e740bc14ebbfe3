// console.rs — Buffered console output with ANSI colors
//
// All output accumulates in a pre-allocated String buffer.  Color changes
// are ANSI SGR sequences inline in the buffer, elided when the color is
// unchanged from the previous write.  The buffer is flushed to stdout in
// one write call per directory listing.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use crate::ansi_codes;
use crate::color::ColorSpec;
use crate::config::{Attribute, Config};
use crate::ehm::AppError;

/// Initial buffer capacity
const INITIAL_BUFFER_SIZE: usize = 64 * 1024;

/// Assumed width when the terminal cannot be queried
const DEFAULT_WIDTH: usize = 80;

pub struct Console {
    buffer:        String,
    is_terminal:   bool,
    console_width: usize,
    color_enabled: bool,
    config:        Arc<Config>,
    prev_spec:     Option<ColorSpec>,
}

impl Console {
    /// Initialize the console: detect redirection, query the terminal
    /// width, pre-allocate the buffer.
    pub fn initialize(config: Arc<Config>, color_enabled: bool) -> Self {
        let is_terminal = io::stdout().is_terminal();
        let console_width = if is_terminal {
            query_terminal_width()
        } else {
            DEFAULT_WIDTH
        };

        Console {
            buffer: String::with_capacity(INITIAL_BUFFER_SIZE),
            is_terminal,
            console_width,
            color_enabled,
            config,
            prev_spec: None,
        }
    }

    /// Get the console width in columns.
    pub fn width(&self) -> usize {
        self.console_width
    }

    /// Whether stdout is an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Emit an ANSI SGR color sequence if the color has changed from the
    /// previous call.  Color elision: skip if unchanged.  No-op entirely
    /// when color output is disabled.
    pub fn set_color(&mut self, spec: ColorSpec) {
        if !self.color_enabled {
            return;
        }
        if self.prev_spec == Some(spec) {
            return;
        }
        self.prev_spec = Some(spec);
        ansi_codes::write_sgr(&mut self.buffer, spec);
    }

    /// Write text with a named display attribute (no trailing newline).
    pub fn printf(&mut self, attr: Attribute, text: &str) {
        let spec = self.config.attribute(attr);
        self.printf_spec(spec, text);
    }

    /// Write text with an explicit color spec (no trailing newline).
    pub fn printf_spec(&mut self, spec: ColorSpec, text: &str) {
        self.set_color(spec);
        self.buffer.push_str(text);
    }

    /// Write text with a named attribute, followed by a newline.
    /// Resets to Default color before the newline to prevent color bleeding.
    pub fn puts(&mut self, attr: Attribute, text: &str) {
        self.printf(attr, text);
        self.newline();
    }

    /// End the current line, resetting to the Default color first.
    pub fn newline(&mut self) {
        let default_spec = self.config.attribute(Attribute::Default);
        self.set_color(default_spec);
        self.buffer.push('\n');
    }

    /// Write `count` spaces in the Default color.
    pub fn pad(&mut self, count: usize) {
        let default_spec = self.config.attribute(Attribute::Default);
        self.set_color(default_spec);
        for _ in 0..count {
            self.buffer.push(' ');
        }
    }

    /// Flush the buffer to stdout in a single write.
    pub fn flush(&mut self) -> Result<(), AppError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(self.buffer.as_bytes())?;
        stdout.flush()?;

        self.buffer.clear();
        self.prev_spec = None;
        Ok(())
    }

    /// Detached console for unit tests: fixed width, terminal assumed,
    /// nothing touched until an explicit flush.
    #[cfg(test)]
    pub(crate) fn test_fixture(config: Arc<Config>, color_enabled: bool, width: usize) -> Self {
        Console {
            buffer: String::new(),
            is_terminal: true,
            console_width: width,
            color_enabled,
            config,
            prev_spec: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn buffer_contents(&self) -> &str {
        &self.buffer
    }
}

impl Drop for Console {
    fn drop(&mut self) {
        // Append reset sequence and flush on drop
        if self.color_enabled {
            self.buffer.push_str(ansi_codes::RESET_ALL);
        }
        let _ = self.flush();
    }
}

/// Query the terminal width via TIOCGWINSZ, falling back to the default
/// width when the ioctl fails or reports zero columns.
fn query_terminal_width() -> usize {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if rc == 0 && ws.ws_col > 0 {
        ws.ws_col as usize
    } else {
        DEFAULT_WIDTH
    }
}
