// ansi_codes.rs — ANSI escape sequence emission
//
// Color changes are SGR sequences in the form ESC[<weight>;<color>m where
// weight selects the rendition (0 = plain, 1 = bold, 2 = faint) and color
// is a foreground code 30-37.

use crate::color::ColorSpec;

/// Reset all attributes sequence: ESC[0m
pub const RESET_ALL: &str = "\x1b[0m";

/// Write the SGR sequence for a ColorSpec into the provided buffer string.
///
/// Format: ESC[{weight};{color}m
/// Example: light cyan → "\x1b[0;36m", normal red → "\x1b[1;31m"
pub fn write_sgr(buf: &mut String, spec: ColorSpec) {
    use std::fmt::Write;

    let _ = write!(buf, "\x1b[{};{}m", spec.style as u8, spec.color as u8);
}
