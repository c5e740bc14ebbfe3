// xls - A fast, colorized directory listing tool for POSIX systems

pub mod ehm;
pub mod ansi_codes;
pub mod color;
pub mod environment_provider;
pub mod console;
pub mod command_line;
pub mod config;
pub mod classifier;
pub mod file_info;
pub mod directory_info;
pub mod column_layout;
pub mod file_comparator;
pub mod directory_lister;
pub mod owner;
pub mod results_displayer;
pub mod usage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use command_line::CommandLine;
use config::Config;
use console::Console;
use ehm::report;
use environment_provider::DefaultEnvironmentProvider;
use results_displayer::{DirectoryLevel, Displayer, ResultsDisplayer};

// ── Exit codes ────────────────────────────────────────────────────────────────

/// Everything listed cleanly.
pub const EXIT_SUCCESS: i32 = 0;

/// Minor problems, e.g. a subdirectory could not be read.
pub const EXIT_MINOR: i32 = 1;

/// Serious trouble, e.g. a command-line target could not be accessed.
pub const EXIT_SERIOUS: i32 = 2;

/// Main entry point for the library.
/// Called by main.rs with argv[1..]; returns the process exit code.
///
/// Every failure is reported on stderr and folded into the exit status; a
/// failing directory never aborts the rest of the run.
pub fn run<I, S>(args: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let provider = DefaultEnvironmentProvider;
    let config = Arc::new(Config::initialize(&provider));

    let mut cmd = CommandLine::default();
    cmd.apply_config_defaults(&config);
    if let Err(err) = cmd.parse(args) {
        report(&err);
        eprintln!("Try 'xls --help' for more information.");
        return EXIT_SERIOUS;
    }

    let mut console = Console::initialize(Arc::clone(&config), !cmd.no_color);

    if cmd.show_help {
        usage::display_usage(&mut console);
        let _ = console.flush();
        return EXIT_SUCCESS;
    }
    if cmd.show_version {
        usage::display_version(&mut console);
        let _ = console.flush();
        return EXIT_SUCCESS;
    }

    let targets: Vec<PathBuf> = if cmd.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cmd.paths.clone()
    };

    // Header lines appear whenever more than one directory is in scope
    let show_headers = targets.len() > 1 || cmd.recursive;

    let cmd = Arc::new(cmd);
    let mut displayer = Displayer::new(console, Arc::clone(&cmd), show_headers);

    let mut status = EXIT_SUCCESS;
    for target in &targets {
        let code = list_directory(target, DirectoryLevel::Initial, &cmd, &mut displayer);
        status = status.max(code);
    }

    let mut console = displayer.into_console();
    if console.flush().is_err() {
        status = status.max(EXIT_MINOR);
    }

    status
}

/// List one directory and, with recursion enabled, each of its
/// subdirectories depth-first.  The parent's rows are fully rendered
/// before any child listing begins.
fn list_directory(
    path: &Path,
    level: DirectoryLevel,
    cmd: &Arc<CommandLine>,
    displayer: &mut Displayer,
) -> i32 {
    let mut listing = match directory_lister::collect(path, cmd) {
        Ok(listing) => listing,
        Err(err) => {
            // Partial results are dropped; siblings and other targets
            // continue unaffected
            report(&err);
            return match level {
                DirectoryLevel::Initial => EXIT_SERIOUS,
                DirectoryLevel::Subdirectory => EXIT_MINOR,
            };
        }
    };

    file_comparator::sort_entries(&mut listing.entries, cmd);
    listing.accumulate_widths(cmd.human_readable);

    if displayer.needs_grid() {
        let terminal_width = displayer.console_mut().width();
        listing.grid = Some(column_layout::ColumnGrid::build(
            &listing.entries,
            listing.widths.name,
            terminal_width,
        ));
    }

    displayer.display_results(&listing, level);

    let mut status = EXIT_SUCCESS;
    if cmd.recursive {
        for entry in listing.entries.iter().filter(|e| e.is_directory()) {
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            let child = path.join(&entry.name);
            let code = list_directory(&child, DirectoryLevel::Subdirectory, cmd, displayer);
            status = status.max(code);
        }
    }

    status
}
