// file_info.rs — File entry data model
//
// One FileEntry per directory child surviving the ignore filter.  Entries
// are immutable after collection and owned exclusively by their
// DirectoryListing.

// ── File type ─────────────────────────────────────────────────────────────────

/// Closed set of file type tags.  Exactly one per entry.
///
/// Executable is a re-tag applied to non-directory entries that pass an
/// access(X_OK) probe; it never applies to directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Block,
    Char,
    Directory,
    Fifo,
    Link,
    Regular,
    Socket,
    Whiteout,
    Executable,
    Unknown,
}

impl FileType {
    pub fn is_directory(self) -> bool {
        self == FileType::Directory
    }
}

// ── Permission strings ────────────────────────────────────────────────────────

/// File mode rendered as display strings: one type glyph plus one
/// three-character triad per permission class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStrings {
    pub type_glyph: char,   // 'd', 'c', 'b', or '-'
    pub user:       String, // e.g. "rwx"
    pub group:      String, // e.g. "r-x"
    pub other:      String, // e.g. "r--"
}

// ── File entry ────────────────────────────────────────────────────────────────

/// Holds all information about a single directory entry, precomputed so the
/// displayers need no further filesystem access or formatting.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name:        String,
    /// Name length plus 1 if this is a directory and indicators are enabled
    /// (the trailing '/' occupies a column cell character).
    pub display_len: usize,
    pub file_type:   FileType,
    /// Classification suffix derived from the file type, or None.
    pub indicator:   Option<char>,
    pub mode:        ModeStrings,
    pub user:        String,
    pub group:       String,
    pub link_count:  u64,
    pub size:        u64,
    /// Fixed-width (20 char) modification timestamp, e.g. "Jun  2 08:15:32 2026".
    pub mod_time:    String,
}

impl FileEntry {
    pub fn is_directory(&self) -> bool {
        self.file_type.is_directory()
    }
}
