// long.rs — Long format displayer: one detailed row per entry
//
// Row layout: the four permission fields concatenated, then right-aligned
// link count, user, group, and size, the fixed-width modification time,
// and finally the indicator-suffixed name.  Alignment widths come from the
// listing's finalized ColumnWidths.

use std::sync::Arc;

use crate::command_line::CommandLine;
use crate::config::Attribute;
use crate::console::Console;
use crate::directory_info::DirectoryListing;

use super::common::{
    display_aligned_field,
    display_entry_name,
    display_path_header,
    display_permissions,
    format_size,
};
use super::{DirectoryLevel, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////

/// Long format displayer — permissions, ownership, size, and time per row.
pub struct LongDisplayer {
    console:      Console,
    cmd:          Arc<CommandLine>,
    show_headers: bool,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl LongDisplayer
//
//  Long displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl LongDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create a new LongDisplayer.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(console: Console, cmd: Arc<CommandLine>, show_headers: bool) -> Self {
        LongDisplayer { console, cmd, show_headers }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  into_console
    //
    //  Consume the displayer and return the Console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn into_console(self) -> Console {
        self.console
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  console_mut
    //
    //  Get a mutable reference to the console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for LongDisplayer
//
//  Long-format directory listing.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for LongDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Display one aligned row per entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, listing: &DirectoryListing, level: DirectoryLevel) {
        // Skip empty subdirectories reached through recursion
        if level == DirectoryLevel::Subdirectory && listing.entries.is_empty() {
            return;
        }

        if self.show_headers {
            display_path_header(&mut self.console, listing);
        }

        display_long_rows(&mut self.console, &self.cmd, listing);

        if self.show_headers {
            self.console.newline();
        }

        let _ = self.console.flush();
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_long_rows
//
//  Emit one detailed row per entry against the listing's finalized widths.
//
////////////////////////////////////////////////////////////////////////////////

fn display_long_rows(console: &mut Console, cmd: &CommandLine, listing: &DirectoryListing) {
    let widths = &listing.widths;

    for entry in &listing.entries {
        display_permissions(console, cmd, entry);

        console.pad(1);
        display_aligned_field(
            console,
            Attribute::LinkCount,
            &entry.link_count.to_string(),
            widths.link_count,
        );

        console.pad(1);
        display_aligned_field(console, Attribute::User, &entry.user, widths.user);

        console.pad(1);
        display_aligned_field(console, Attribute::Group, &entry.group, widths.group);

        console.pad(1);
        display_aligned_field(
            console,
            Attribute::Size,
            &format_size(entry.size, cmd.human_readable),
            widths.size,
        );

        console.pad(1);
        console.printf(Attribute::ModTime, &entry.mod_time);

        console.pad(1);
        display_entry_name(console, cmd, entry);
        console.newline();
    }
}





#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use super::*;
    use crate::config::Config;
    use crate::file_info::{FileEntry, FileType, ModeStrings};

    fn entry(name: &str, file_type: FileType, size: u64) -> FileEntry {
        let indicator = crate::classifier::indicator_for(file_type);
        FileEntry {
            name:        name.to_string(),
            display_len: name.len() + usize::from(file_type.is_directory()),
            file_type,
            indicator,
            mode: ModeStrings {
                type_glyph: if file_type.is_directory() { 'd' } else { '-' },
                user:       String::from(if file_type == FileType::Executable { "rwx" } else { "rw-" }),
                group:      "r--".into(),
                other:      "r--".into(),
            },
            user:       "root".into(),
            group:      "wheel".into(),
            link_count: 1,
            size,
            mod_time:   "Jun  2 08:15:32 2026".into(),
        }
    }

    fn listing_for(entries: Vec<FileEntry>) -> DirectoryListing {
        let mut listing = DirectoryListing::new(PathBuf::from("."));
        listing.entries = entries;
        listing.accumulate_widths(false);
        listing
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  rows_align_against_tracked_widths
    //
    //  Permission fields, right-aligned numerics, timestamp, and the
    //  indicator-suffixed name, one row per entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn rows_align_against_tracked_widths() {
        let mut console =
            Console::test_fixture(Arc::new(Config::with_default_colors()), false, 80);
        let cmd = CommandLine::default();
        let listing = listing_for(vec![
            entry("a.txt", FileType::Regular, 120),
            entry("sub", FileType::Directory, 40),
        ]);

        display_long_rows(&mut console, &cmd, &listing);

        assert_eq!(
            console.buffer_contents(),
            "-rw-r--r-- 1 root wheel 120 Jun  2 08:15:32 2026 a.txt\n\
             drw-r--r-- 1 root wheel  40 Jun  2 08:15:32 2026 sub/\n"
        );
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  no_classify_drops_the_indicator
    //
    //  With classification off the directory name appears bare.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn no_classify_drops_the_indicator() {
        let mut console =
            Console::test_fixture(Arc::new(Config::with_default_colors()), false, 80);
        let mut cmd = CommandLine::default();
        cmd.no_classify = true;
        let listing = listing_for(vec![entry("sub", FileType::Directory, 40)]);

        display_long_rows(&mut console, &cmd, &listing);

        assert!(console.buffer_contents().ends_with(" sub\n"));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  numeric_permissions_collapse_triads
    //
    //  With -N each triad renders as its octal digit.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn numeric_permissions_collapse_triads() {
        let mut console =
            Console::test_fixture(Arc::new(Config::with_default_colors()), false, 80);
        let mut cmd = CommandLine::default();
        cmd.numeric_permissions = true;
        let listing = listing_for(vec![entry("run.sh", FileType::Executable, 30)]);

        display_long_rows(&mut console, &cmd, &listing);

        assert!(console.buffer_contents().starts_with("-744 "));
        assert!(console.buffer_contents().ends_with(" run.sh*\n"));
    }
}
