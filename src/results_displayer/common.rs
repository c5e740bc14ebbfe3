// common.rs — Shared display routines
//
// Field rendering used by more than one displayer: path headers, aligned
// fields, permission strings, names with classification suffixes, and
// human-readable sizes.

use crate::classifier;
use crate::command_line::CommandLine;
use crate::config::{Attribute, Config};
use crate::console::Console;
use crate::directory_info::DirectoryListing;
use crate::file_info::FileEntry;





/// Size units for human-readable display; the leading space on " B" keeps
/// the unit column two characters wide throughout.
const SIZE_UNITS: [&str; 9] = [" B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];





////////////////////////////////////////////////////////////////////////////////
//
//  display_path_header
//
//  Emit the "path:" line that precedes a listing when more than one
//  directory is in scope.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_path_header(console: &mut Console, listing: &DirectoryListing) {
    console.puts(Attribute::Header, &format!("{}:", listing.path.display()));
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_aligned_field
//
//  Right-align a field to the given width: pad first, then the value.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_aligned_field(console: &mut Console, attr: Attribute, text: &str, width: usize) {
    if width > text.len() {
        console.pad(width - text.len());
    }
    console.printf(attr, text);
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_permissions
//
//  Emit the four mode fields: type glyph then one triad per permission
//  class, each in its fixed color.  With numeric permissions each triad
//  collapses to its octal digit.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_permissions(console: &mut Console, cmd: &CommandLine, entry: &FileEntry) {
    let glyph = entry.mode.type_glyph;
    console.printf_spec(Config::type_glyph_color(glyph), &glyph.to_string());

    for triad in [&entry.mode.user, &entry.mode.group, &entry.mode.other] {
        if cmd.numeric_permissions {
            let value = classifier::numeric_triad(triad);
            console.printf_spec(
                Config::numeric_permission_color(value),
                &value.to_string(),
            );
        } else {
            console.printf_spec(Config::permission_color(triad), triad);
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_entry_name
//
//  Emit the entry name in its file-type color, followed by the
//  classification suffix unless classification is disabled.
//
////////////////////////////////////////////////////////////////////////////////

pub fn display_entry_name(console: &mut Console, cmd: &CommandLine, entry: &FileEntry) {
    console.printf_spec(Config::file_type_color(entry.file_type), &entry.name);

    if !cmd.no_classify {
        if let Some(indicator) = entry.indicator {
            console.printf(Attribute::Indicator, &indicator.to_string());
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  human_readable_size
//
//  Scale a byte count into the largest unit below ~1K of it.  The fraction
//  precision grows with the unit index, so plain byte counts print with no
//  fraction at all.
//
////////////////////////////////////////////////////////////////////////////////

pub fn human_readable_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;

    while value > 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.*} {}", unit, value, SIZE_UNITS[unit])
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_size
//
//  Size column value: plain decimal or human-readable.
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_size(size: u64, human_readable: bool) -> String {
    if human_readable {
        human_readable_size(size)
    } else {
        size.to_string()
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  human_readable_bytes
    //
    //  Byte counts below 1K print whole, with the padded unit.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn human_readable_bytes() {
        assert_eq!(human_readable_size(0), "0  B");
        assert_eq!(human_readable_size(120), "120  B");
        assert_eq!(human_readable_size(1024), "1024  B");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  human_readable_scales_units
    //
    //  Larger counts scale into kB/MB with growing precision.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn human_readable_scales_units() {
        assert_eq!(human_readable_size(2048), "2.0 kB");
        assert_eq!(human_readable_size(1536), "1.5 kB");
        assert_eq!(human_readable_size(3 * 1024 * 1024), "3.00 MB");
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  format_size_modes
    //
    //  Plain mode is the bare decimal; human mode delegates.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn format_size_modes() {
        assert_eq!(format_size(123456, false), "123456");
        assert_eq!(format_size(2048, true), "2.0 kB");
    }
}
