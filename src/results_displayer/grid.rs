// grid.rs — Multi-column grid displayer
//
// Emits the column-major grid row by row: the first entry of every column,
// then the second, and so on.  Each cell is padded to its own column's
// tracked width plus one separating space.

use std::sync::Arc;

use crate::column_layout::ColumnGrid;
use crate::command_line::CommandLine;
use crate::console::Console;
use crate::directory_info::DirectoryListing;

use super::common::{display_entry_name, display_path_header};
use super::{DirectoryLevel, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////

/// Grid format displayer — compact multi-column names for terminals.
pub struct GridDisplayer {
    console:      Console,
    cmd:          Arc<CommandLine>,
    show_headers: bool,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl GridDisplayer
//
//  Grid displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl GridDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create a new GridDisplayer.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(console: Console, cmd: Arc<CommandLine>, show_headers: bool) -> Self {
        GridDisplayer { console, cmd, show_headers }
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
//  impl ResultsDisplayer for GridDisplayer
//
//  Grid-format directory listing.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for GridDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Display results for a single directory using the computed grid.
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

        if let Some(grid) = &listing.grid {
            display_grid_rows(&mut self.console, &self.cmd, listing, grid);
        }

        if self.show_headers {
            self.console.newline();
        }

        let _ = self.console.flush();
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  display_grid_rows
//
//  Traverse the column-major grid one display row at a time.  Only the
//  trailing column can run short; once a row is exhausted the line ends.
//
////////////////////////////////////////////////////////////////////////////////

fn display_grid_rows(
    console: &mut Console,
    cmd: &CommandLine,
    listing: &DirectoryListing,
    grid: &ColumnGrid,
) {
    for row in 0..grid.row_count() {
        for (col, column) in grid.columns.iter().enumerate() {
            let Some(&entry_index) = column.get(row) else {
                break;
            };

            let entry = &listing.entries[entry_index];
            display_entry_name(console, cmd, entry);

            // Pad to this column's width plus one separating space
            let column_width = grid.column_widths[col];
            console.pad((column_width + 1).saturating_sub(entry.display_len));
        }

        console.newline();
    }
}
