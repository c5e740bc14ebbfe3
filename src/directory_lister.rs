// directory_lister.rs — Single-directory enumeration
//
// Core collection loop: read the directory, filter each raw entry through
// the ignore policy, stat the survivors, classify them, and produce the
// ordered (unsorted) FileEntry sequence.  A stat failure for any child
// aborts collection for this directory; the caller decides what that means
// for the overall run.

use std::ffi::CString;
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::classifier;
use crate::command_line::CommandLine;
use crate::directory_info::DirectoryListing;
use crate::ehm::AppError;
use crate::file_info::{FileEntry, FileType};
use crate::owner;

// ── Ignore policy bit flags ───────────────────────────────────────────────────

/// Hide entries starting with '.' (set by default).
pub const IGNORE_HIDDEN: u8 = 0x01;

/// Hide directories.
pub const IGNORE_DIRS: u8 = 0x02;

/// Hide '.' and '..'.
pub const IGNORE_DOTS: u8 = 0x04;

/// Hide everything that is not a directory.
pub const IGNORE_FILES: u8 = 0x08;





////////////////////////////////////////////////////////////////////////////////
//
//  ignore_mask
//
//  Resolve the command-line flags into the ignore policy bit mask.
//
////////////////////////////////////////////////////////////////////////////////

pub fn ignore_mask(cmd: &CommandLine) -> u8 {
    let mut mask = IGNORE_HIDDEN;

    if cmd.show_hidden {
        mask &= !IGNORE_HIDDEN;
    }
    if cmd.almost_all {
        // Show hidden entries but never '.' or '..'
        mask &= !IGNORE_HIDDEN;
        mask |= IGNORE_DOTS;
    }
    if cmd.files_only {
        mask |= IGNORE_DIRS;
    }
    if cmd.directories_only {
        mask |= IGNORE_FILES;
    }

    mask
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_ignored
//
//  Test a raw entry name plus its directory probe against the policy mask.
//
////////////////////////////////////////////////////////////////////////////////

fn is_ignored(name: &str, is_dir: bool, mask: u8) -> bool {
    (mask & IGNORE_HIDDEN != 0 && name.starts_with('.'))
        || (mask & IGNORE_DOTS != 0 && (name == "." || name == ".."))
        || (mask & IGNORE_DIRS != 0 && is_dir)
        || (mask & IGNORE_FILES != 0 && !is_dir)
}





////////////////////////////////////////////////////////////////////////////////
//
//  collect
//
//  Collect the surviving entries of a single directory, unsorted.
//
//  Each raw entry gets a fresh is-directory probe for the ignore test
//  because directory-entry type tags are unreliable on some filesystems.
//  Metadata comes from a following stat on the full child path, so symlink
//  entries carry their target's size and permissions while keeping the
//  Link type tag from the dirent level.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect(dir_path: &Path, cmd: &CommandLine) -> Result<DirectoryListing, AppError> {
    let reader = fs::read_dir(dir_path).map_err(|e| AppError::OpenDir {
        path:   dir_path.to_path_buf(),
        source: e,
    })?;

    let mask = ignore_mask(cmd);
    let mut listing = DirectoryListing::new(dir_path.to_path_buf());

    // read_dir never yields '.' or '..'; synthesize them when the policy
    // admits dot entries
    if mask & IGNORE_HIDDEN == 0 && mask & IGNORE_DOTS == 0 {
        for dots in [".", ".."] {
            if !is_ignored(dots, true, mask) {
                let entry = make_entry(dots, &dir_path.join(dots), false, cmd)?;
                listing.entries.push(entry);
            }
        }
    }

    for dirent in reader {
        let dirent = dirent.map_err(|e| AppError::ChildStat {
            path:   dir_path.to_path_buf(),
            source: e,
        })?;

        let name = dirent.file_name().to_string_lossy().into_owned();
        let child_path = dir_path.join(dirent.file_name());

        let is_dir_probe = fs::metadata(&child_path)
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if is_ignored(&name, is_dir_probe, mask) {
            continue;
        }

        let symlink_hint = dirent
            .file_type()
            .map(|t| t.is_symlink())
            .unwrap_or(false);

        let entry = make_entry(&name, &child_path, symlink_hint, cmd)?;
        listing.entries.push(entry);
    }

    Ok(listing)
}





////////////////////////////////////////////////////////////////////////////////
//
//  make_entry
//
//  Build one FileEntry from a stat of the full child path.  Everything the
//  displayers need is precomputed here: type tag, indicator, permission
//  strings, owner names, and the fixed-width timestamp.
//
////////////////////////////////////////////////////////////////////////////////

fn make_entry(
    name: &str,
    child_path: &Path,
    symlink_hint: bool,
    cmd: &CommandLine,
) -> Result<FileEntry, AppError> {
    let md = fs::metadata(child_path).map_err(|e| AppError::ChildStat {
        path:   PathBuf::from(name),
        source: e,
    })?;

    let mode = md.mode();

    let raw_type = if symlink_hint {
        FileType::Link
    } else {
        classifier::file_type_from_mode(mode)
    };
    let file_type = classifier::apply_executable_override(raw_type, is_executable(child_path));

    // A directory's trailing indicator occupies a display cell
    let display_len = if file_type.is_directory() && !cmd.no_classify {
        name.len() + 1
    } else {
        name.len()
    };

    let modified = md.modified().map_err(|e| AppError::ChildStat {
        path:   PathBuf::from(name),
        source: e,
    })?;
    let mod_time: DateTime<Local> = modified.into();

    Ok(FileEntry {
        name: name.to_string(),
        display_len,
        file_type,
        indicator: classifier::indicator_for(file_type),
        mode: classifier::mode_strings(mode),
        user: owner::user_display_name(md.uid(), cmd.numeric_ids),
        group: owner::group_display_name(md.gid(), cmd.numeric_ids),
        link_count: md.nlink(),
        size: md.size(),
        mod_time: mod_time.format("%b %e %H:%M:%S %Y").to_string(),
    })
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_executable
//
//  Probe a path for execute permission with access(2).  The probe follows
//  symlinks, so an executable target re-tags its link.
//
////////////////////////////////////////////////////////////////////////////////

fn is_executable(path: &Path) -> bool {
    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(cpath.as_ptr(), libc::X_OK) == 0 }
}





#[cfg(test)]
mod tests {
    use super::*;

    fn cmd() -> CommandLine {
        CommandLine::default()
    }

    ////////////////////////////////////////////////////////////////////////////
    //
    //  default_mask_hides_hidden
    //
    //  Verifies the default policy hides dotfiles and nothing else.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn default_mask_hides_hidden() {
        let mask = ignore_mask(&cmd());
        assert_eq!(mask, IGNORE_HIDDEN);
        assert!(is_ignored(".bashrc", false, mask));
        assert!(is_ignored(".", true, mask));
        assert!(!is_ignored("notes.txt", false, mask));
        assert!(!is_ignored("sub", true, mask));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  show_hidden_clears_hidden_bit
    //
    //  Verifies -a admits dotfiles and the dot entries.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn show_hidden_clears_hidden_bit() {
        let mut c = cmd();
        c.show_hidden = true;
        let mask = ignore_mask(&c);
        assert!(!is_ignored(".bashrc", false, mask));
        assert!(!is_ignored(".", true, mask));
        assert!(!is_ignored("..", true, mask));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  almost_all_excludes_dot_entries
    //
    //  Verifies -A admits dotfiles but not '.' or '..'.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn almost_all_excludes_dot_entries() {
        let mut c = cmd();
        c.almost_all = true;
        let mask = ignore_mask(&c);
        assert!(!is_ignored(".bashrc", false, mask));
        assert!(is_ignored(".", true, mask));
        assert!(is_ignored("..", true, mask));
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  directory_filters
    //
    //  Verifies -d keeps only directories and -D keeps only files.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn directory_filters() {
        let mut dirs_only = cmd();
        dirs_only.directories_only = true;
        let mask = ignore_mask(&dirs_only);
        assert!(!is_ignored("sub", true, mask));
        assert!(is_ignored("notes.txt", false, mask));

        let mut files_only = cmd();
        files_only.files_only = true;
        let mask = ignore_mask(&files_only);
        assert!(is_ignored("sub", true, mask));
        assert!(!is_ignored("notes.txt", false, mask));
    }
}
