// file_comparator.rs — Entry sort order
//
// Entries sort by raw name using byte-wise comparison, deliberately
// locale-agnostic so a directory lists identically in every locale.  The
// reverse flag flips the whole result.  Sorting happens once per directory,
// after collection and before width accumulation.

use std::cmp::Ordering;

use crate::command_line::CommandLine;
use crate::file_info::FileEntry;

/// Stable-sort entries according to the command-line sort preferences.
pub fn sort_entries(entries: &mut [FileEntry], cmd: &CommandLine) {
    if cmd.reverse_sort {
        entries.sort_by(|a, b| compare_names(a, b).reverse());
    } else {
        entries.sort_by(compare_names);
    }
}

/// Byte-wise ascending name comparison.
fn compare_names(lhs: &FileEntry, rhs: &FileEntry) -> Ordering {
    lhs.name.as_bytes().cmp(rhs.name.as_bytes())
}
