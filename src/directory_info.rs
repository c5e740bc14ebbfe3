// directory_info.rs — Directory listing container and column width tracker
//
// One DirectoryListing per directory visited: the surviving entries, the
// alignment maxima accumulated over them, and (in grid mode) the computed
// column arrangement.

use std::path::PathBuf;

use crate::column_layout::ColumnGrid;
use crate::file_info::FileEntry;





/// Number of decimal digits needed to render a value.
pub fn decimal_width(value: u64) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        rest /= 10;
        digits += 1;
    }
    digits
}





/// Alignment maxima over one directory's entries, grown monotonically while
/// entries are absorbed and frozen once layout begins.
///
/// Both the long-format table and the multi-column grid consume these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub name:       usize,
    pub link_count: usize,
    pub user:       usize,
    pub group:      usize,
    pub size:       usize,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ColumnWidths
//
//  Streaming accumulation of per-column display widths.
//
////////////////////////////////////////////////////////////////////////////////

impl ColumnWidths {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  absorb
    //
    //  Grow each tracked maximum to cover the given entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn absorb(&mut self, entry: &FileEntry) {
        self.name       = self.name.max(entry.display_len);
        self.link_count = self.link_count.max(decimal_width(entry.link_count));
        self.user       = self.user.max(entry.user.len());
        self.group      = self.group.max(entry.group.len());
        self.size       = self.size.max(decimal_width(entry.size));
    }
}





/// Fixed size-column width when human-readable sizing is active:
/// room for "999.9 XB".
pub const HUMAN_READABLE_SIZE_WIDTH: usize = 7;





/// One directory's listing: path, entries, alignment widths, and the grid
/// arrangement when multi-column display is active.
pub struct DirectoryListing {
    pub path:    PathBuf,
    pub entries: Vec<FileEntry>,
    pub widths:  ColumnWidths,
    pub grid:    Option<ColumnGrid>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl DirectoryListing
//
//  Construction and width finalization.
//
////////////////////////////////////////////////////////////////////////////////

impl DirectoryListing {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create an empty listing for the given directory path.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(path: PathBuf) -> Self {
        DirectoryListing {
            path,
            entries: Vec::new(),
            widths:  ColumnWidths::default(),
            grid:    None,
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  accumulate_widths
    //
    //  Second pass over the (sorted) entries: compute the alignment maxima.
    //  With human-readable sizing the size column is a fixed width instead
    //  of a digit count.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn accumulate_widths(&mut self, human_readable: bool) {
        let mut widths = ColumnWidths::default();
        for entry in &self.entries {
            widths.absorb(entry);
        }
        if human_readable {
            widths.size = HUMAN_READABLE_SIZE_WIDTH;
        }
        self.widths = widths;
    }
}
