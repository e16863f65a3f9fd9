//! Storage-side abstraction for the file browser.
//! The media layer exposes one current directory at a time, like the
//! card reader firmware underneath it.

use alloc::format;
use alloc::string::String;

/// One child of the current directory.
///
/// The panel shows `display_name`; `short_name` is the 8.3 form the storage
/// layer accepts back when a file is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub display_name: String,
    pub short_name: String,
    pub is_directory: bool,
}

/// Stack-style cursor over the media's directory tree.
///
/// Implementations:
/// - the SD media layer on the mainboard (real card)
/// - `MockMedia` for host-side tests and simulators
///
/// The cursor owns exactly one "current directory". Listing order is stable
/// between refreshes of the same directory. All operations are total:
/// out-of-range ordinals answer `None`, `ascend` at root is a no-op, and
/// `descend` requires a name taken from a prior listing of the current
/// directory.
pub trait DirectoryCursor {
    /// True when the current directory is the media root.
    fn is_at_root(&self) -> bool;

    /// Move to the parent directory. No-op at root.
    fn ascend(&mut self);

    /// Enter the named child of the current directory.
    fn descend(&mut self, name: &str);

    /// Re-read the current directory's children.
    fn refresh(&mut self);

    /// The child at a zero-based position in the current listing.
    fn entry_at(&self, ordinal: usize) -> Option<FileEntry>;

    /// Number of children in the current listing.
    fn child_count(&self) -> usize;
}

/// Build the logical path the storage layer expects for a picked entry.
///
/// Files get an absolute short-name path under the breadcrumb folder;
/// directories are re-entered by name, so they keep their bare short name.
pub fn selection_path(folder: &str, entry: &FileEntry) -> String {
    if entry.is_directory {
        entry.short_name.clone()
    } else {
        format!("/{}{}", folder, entry.short_name)
    }
}
