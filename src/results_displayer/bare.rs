// bare.rs — Bare format displayer: one name per line, no alignment
//
// Selected explicitly with -1, and automatically whenever stdout is not an
// interactive terminal so piped output stays machine-friendly.

use std::sync::Arc;

use crate::command_line::CommandLine;
use crate::console::Console;
use crate::directory_info::DirectoryListing;

use super::common::{display_entry_name, display_path_header};
use super::{DirectoryLevel, ResultsDisplayer};





////////////////////////////////////////////////////////////////////////////////

/// Bare format displayer — indicator-suffixed names only, no decoration.
pub struct BareDisplayer {
    console:      Console,
    cmd:          Arc<CommandLine>,
    show_headers: bool,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl BareDisplayer
//
//  Bare displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl BareDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create a new BareDisplayer.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(console: Console, cmd: Arc<CommandLine>, show_headers: bool) -> Self {
        BareDisplayer { console, cmd, show_headers }
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
//  impl ResultsDisplayer for BareDisplayer
//
//  Bare-format directory listing.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for BareDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Display one bare name per line.
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

        for entry in &listing.entries {
            display_entry_name(&mut self.console, &self.cmd, entry);
            self.console.newline();
        }

        if self.show_headers {
            self.console.newline();
        }

        let _ = self.console.flush();
    }
}
