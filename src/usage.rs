// usage.rs — Help and version text
//
// Colorized usage screen in the classic layout: blue short switch, green
// long switch, white description, one row per option.

use crate::color::{Color, ColorSpec, ColorStyle};
use crate::console::Console;

const WHITE: ColorSpec = ColorSpec::new(Color::White, ColorStyle::Light);
const RED:   ColorSpec = ColorSpec::new(Color::Red, ColorStyle::Light);
const GREEN: ColorSpec = ColorSpec::new(Color::Green, ColorStyle::Light);
const BLUE:  ColorSpec = ColorSpec::new(Color::Blue, ColorStyle::Light);

/// Column where long-switch descriptions start, measured from the end of
/// the "--" prefix.
const LONG_SWITCH_FIELD: usize = 16;





////////////////////////////////////////////////////////////////////////////////
//
//  display_usage
//
//  Emit the full help screen.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_usage(console: &mut Console) {
    console.printf_spec(WHITE, "Usage: xls [");
    console.printf_spec(RED, "OPTIONS");
    console.printf_spec(GREEN, "]... [");
    console.printf_spec(RED, "FILE");
    console.printf_spec(GREEN, "]...");
    console.newline();

    console.printf_spec(WHITE, "Prints the files in the current or specified directory");
    console.newline();
    console.newline();

    console.printf_spec(WHITE, "Options");
    console.newline();

    usage_row(console, Some('a'), Some("all"),             "do not ignore entries starting with '.'");
    usage_row(console, Some('A'), Some("almost-all"),      "like -a, but skip '.' and '..'");
    usage_row(console, Some('d'), Some("directory"),       "list directories only");
    usage_row(console, Some('D'), Some("no-directories"),  "list everything except directories");
    usage_row(console, Some('F'), Some("no-classify"),     "do not append type indicator characters");
    usage_row(console, Some('l'), None,                    "use a long listing format");
    usage_row(console, Some('C'), Some("no-color"),        "output without color");
    usage_row(console, Some('N'), Some("num-perms"),       "with -l, print permissions as octal digits");
    usage_row(console, Some('n'), Some("numeric-uid-gid"), "with -l, numeric user and group IDs");
    usage_row(console, Some('h'), Some("human-readable"),  "with -l, print sizes in human readable format");
    usage_row(console, Some('r'), Some("reverse"),         "reverse order while sorting");
    usage_row(console, Some('R'), Some("recursive"),       "list subdirectories recursively");
    usage_row(console, Some('1'), Some("one-per-line"),    "list one file per line");
    usage_row(console, None,      Some("help"),            "display this help and exit");
    usage_row(console, None,      Some("version"),         "output version information and exit");
    console.newline();

    console.printf_spec(WHITE, "Exit status:");
    console.newline();
    console.printf_spec(WHITE, "  0  OK,");
    console.newline();
    console.printf_spec(WHITE, "  1  minor problems (e.g., cannot access subdirectory),");
    console.newline();
    console.printf_spec(WHITE, "  2  serious trouble (e.g., cannot access command-line argument).");
    console.newline();
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_version
//
//  Emit the version line.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_version(console: &mut Console) {
    console.printf_spec(WHITE, &format!("xls {}", env!("CARGO_PKG_VERSION")));
    console.newline();
}





////////////////////////////////////////////////////////////////////////////////
//
//  usage_row
//
//  One option row: short switch, long switch, aligned description.
//
////////////////////////////////////////////////////////////////////////////////

fn usage_row(console: &mut Console, short: Option<char>, long: Option<&str>, desc: &str) {
    match short {
        Some(ch) => {
            console.printf_spec(BLUE, &format!("    -{}", ch));
            console.printf_spec(WHITE, ", ");
        }
        None => console.pad(8),
    }

    let spaces = match long {
        Some(name) => {
            console.printf_spec(GREEN, &format!("--{}", name));
            LONG_SWITCH_FIELD.saturating_sub(name.len())
        }
        None => LONG_SWITCH_FIELD + 2,
    };
    console.pad(spaces);

    console.printf_spec(WHITE, desc);
    console.newline();
}
