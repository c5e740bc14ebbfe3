// results_displayer — Display formatting for directory listings
//
// Provides the ResultsDisplayer trait with Long, Grid, and Bare
// implementations, plus a Displayer enum wrapper.
//
// Module structure:
//   mod.rs    — shared types (DirectoryLevel, ResultsDisplayer trait, Displayer enum)
//   common.rs — shared helpers (headers, field alignment, size formatting)
//   long.rs   — LongDisplayer: one detailed row per entry
//   grid.rs   — GridDisplayer: column-major multi-column names
//   bare.rs   — BareDisplayer: one bare name per line

mod bare;
mod common;
mod grid;
mod long;

use std::sync::Arc;

use crate::command_line::CommandLine;
use crate::console::Console;
use crate::directory_info::DirectoryListing;

pub use self::bare::BareDisplayer;
pub use self::common::human_readable_size;
pub use self::grid::GridDisplayer;
pub use self::long::LongDisplayer;





/// Directory level for display formatting.  Subdirectory listings reached
/// through recursion are skipped entirely when empty; explicitly named
/// targets always render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryLevel {
    Initial,
    Subdirectory,
}





/// Trait for displaying directory listing results.
pub trait ResultsDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Display the rows for a single directory.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, listing: &DirectoryListing, level: DirectoryLevel);
}





////////////////////////////////////////////////////////////////////////////////

/// Polymorphic displayer wrapping Long, Grid, or Bare variants.
///
/// Provides `into_console()` and `console_mut()` without trait object issues.
pub enum Displayer {
    Long(LongDisplayer),
    Grid(GridDisplayer),
    Bare(BareDisplayer),
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Displayer
//
//  Polymorphic displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl Displayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create the appropriate displayer for the resolved flags.  Long format
    //  wins over one-per-line; the bare form is also selected automatically
    //  when stdout is not an interactive terminal.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(console: Console, cmd: Arc<CommandLine>, show_headers: bool) -> Self {
        if cmd.long_format {
            Displayer::Long(LongDisplayer::new(console, cmd, show_headers))
        } else if cmd.one_per_line || !console.is_terminal() {
            Displayer::Bare(BareDisplayer::new(console, cmd, show_headers))
        } else {
            Displayer::Grid(GridDisplayer::new(console, cmd, show_headers))
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  needs_grid
    //
    //  Whether listings must carry a computed column grid for this mode.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn needs_grid(&self) -> bool {
        matches!(self, Displayer::Grid(_))
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  into_console
    //
    //  Consume the displayer and return the Console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn into_console(self) -> Console {
        match self {
            Displayer::Long(d) => d.into_console(),
            Displayer::Grid(d) => d.into_console(),
            Displayer::Bare(d) => d.into_console(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  console_mut
    //
    //  Get a mutable reference to the console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn console_mut(&mut self) -> &mut Console {
        match self {
            Displayer::Long(d) => d.console_mut(),
            Displayer::Grid(d) => d.console_mut(),
            Displayer::Bare(d) => d.console_mut(),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for Displayer
//
//  Dispatch to the underlying Long, Grid, or Bare displayer variant.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for Displayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Dispatch display_results to the underlying displayer variant.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, listing: &DirectoryListing, level: DirectoryLevel) {
        match self {
            Displayer::Long(d) => d.display_results(listing, level),
            Displayer::Grid(d) => d.display_results(listing, level),
            Displayer::Bare(d) => d.display_results(listing, level),
        }
    }
}
