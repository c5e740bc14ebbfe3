// classifier.rs — Derive display attributes from raw stat data
//
// Pure functions from mode bits to file type tag, indicator character, and
// permission strings.  No filesystem access happens here; the collector
// feeds in raw data and an executable probe result.

use crate::file_info::{FileType, ModeStrings};

// ── Mode bit masks (POSIX st_mode layout) ─────────────────────────────────────

const S_IFMT:   u32 = 0o170000;
const S_IFIFO:  u32 = 0o010000;
const S_IFCHR:  u32 = 0o020000;
const S_IFDIR:  u32 = 0o040000;
const S_IFBLK:  u32 = 0o060000;
const S_IFREG:  u32 = 0o100000;
const S_IFLNK:  u32 = 0o120000;
const S_IFSOCK: u32 = 0o140000;
const S_IFWHT:  u32 = 0o160000;

/// Map the st_mode type bits to a FileType tag.
pub fn file_type_from_mode(mode: u32) -> FileType {
    match mode & S_IFMT {
        S_IFBLK  => FileType::Block,
        S_IFCHR  => FileType::Char,
        S_IFDIR  => FileType::Directory,
        S_IFIFO  => FileType::Fifo,
        S_IFLNK  => FileType::Link,
        S_IFREG  => FileType::Regular,
        S_IFSOCK => FileType::Socket,
        S_IFWHT  => FileType::Whiteout,
        _        => FileType::Unknown,
    }
}

/// Re-tag an entry as Executable when the access(X_OK) probe passed.
/// The override never applies to directories.
pub fn apply_executable_override(file_type: FileType, executable: bool) -> FileType {
    if executable && file_type != FileType::Directory {
        FileType::Executable
    } else {
        file_type
    }
}

/// Classification suffix for a file type:
///   '/' directory, '|' fifo, '@' symlink, '=' socket, '>' whiteout,
///   '*' executable, none for everything else.
pub fn indicator_for(file_type: FileType) -> Option<char> {
    match file_type {
        FileType::Directory  => Some('/'),
        FileType::Fifo       => Some('|'),
        FileType::Link       => Some('@'),
        FileType::Socket     => Some('='),
        FileType::Whiteout   => Some('>'),
        FileType::Executable => Some('*'),
        _                    => None,
    }
}

/// Render st_mode into display strings: the type glyph plus one rwx triad
/// per permission class.
///
/// Only 'd', 'c', and 'b' get a distinguishing glyph; every other type
/// renders as '-'.
pub fn mode_strings(mode: u32) -> ModeStrings {
    let type_glyph = match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        _       => '-',
    };

    ModeStrings {
        type_glyph,
        user:  triad(mode >> 6),
        group: triad(mode >> 3),
        other: triad(mode),
    }
}

/// One permission class rendered as a 3-char string from its low 3 bits.
fn triad(bits: u32) -> String {
    let mut s = String::with_capacity(3);
    s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    s
}

/// Octal value (0-7) of a rendered rwx triad, for numeric permission display.
pub fn numeric_triad(triad: &str) -> u8 {
    let mut value = 0;
    let mut chars = triad.chars();
    if chars.next() == Some('r') {
        value |= 4;
    }
    if chars.next() == Some('w') {
        value |= 2;
    }
    if chars.next() == Some('x') {
        value |= 1;
    }
    value
}
