//! Paged navigator between the media's directory stack and the panel's
//! flat list view.
//!
//! The panel can only ask "fill the page near index N"; the media layer
//! only knows one current directory with positional children. This module
//! reconciles the two: it infers scroll direction from successive raw
//! indexes, keeps a bounded breadcrumb of entered folders, and fills
//! fixed-size pages slot by slot.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::media::{selection_path, DirectoryCursor, FileEntry};
use crate::panel::SlotDisplay;
use crate::{MAX_FOLDER_DEPTH, SLOTS_PER_PAGE};

/// Browser state machine for one mounted media.
///
/// Owns the media's directory cursor; the panel sink is borrowed per page
/// request. The cursor's current directory and the breadcrumb move together
/// in every operation, so they never diverge.
pub struct FileNavigator<C> {
    media: C,
    path_segments: Vec<String>,
    window_start: usize,
    last_requested_index: usize,
}

impl<C: DirectoryCursor> FileNavigator<C> {
    /// Create a navigator over freshly mounted media, rewound to root.
    pub fn new(media: C) -> Self {
        let mut nav = Self {
            media,
            path_segments: Vec::new(),
            window_start: 0,
            last_requested_index: 0,
        };
        nav.reset();
        nav
    }

    /// Rewind to the media root and clear all browsing state.
    pub fn reset(&mut self) {
        self.path_segments.clear();
        self.window_start = 0;
        self.last_requested_index = 0;
        while !self.media.is_at_root() {
            self.media.ascend();
        }
        self.media.refresh();
        log::info!("NAV: reset to root, {} entries", self.media.child_count());
    }

    /// Re-read the current directory without moving the window.
    pub fn refresh(&mut self) {
        self.media.refresh();
    }

    /// Fill one page of slots for a raw panel index.
    ///
    /// The panel sends no scroll direction, only a position counter, so the
    /// direction is inferred from the previous request: index 0 jumps to the
    /// first page, an index above the last one pages forward, any other index
    /// pages backward (clamped at the start). Two identical nonzero requests
    /// in a row page backward; that is part of the panel contract, not an
    /// accident of the comparison.
    ///
    /// Ordinals past the end of the listing clear their slot.
    pub fn request_page<D: SlotDisplay>(&mut self, index: usize, panel: &mut D) {
        if index == 0 {
            self.window_start = 0;
        } else if index > self.last_requested_index {
            self.window_start += SLOTS_PER_PAGE;
        } else {
            self.window_start = self.window_start.saturating_sub(SLOTS_PER_PAGE);
        }
        self.last_requested_index = index;

        log::debug!(
            "NAV: page index={} window_start={} entries={}",
            index,
            self.window_start,
            self.media.child_count()
        );

        for slot in 0..SLOTS_PER_PAGE {
            match self.media.entry_at(self.window_start + slot) {
                Some(entry) => panel.set_slot_text(slot, &entry.display_name),
                None => panel.set_slot_text(slot, ""),
            }
        }
    }

    /// Enter a child folder of the current directory.
    ///
    /// Dropped silently once the breadcrumb is at its depth limit; the panel
    /// keeps showing the current listing.
    pub fn enter_folder(&mut self, name: &str) {
        if self.path_segments.len() >= MAX_FOLDER_DEPTH {
            log::warn!("NAV: depth limit reached, ignoring enter '{}'", name);
            return;
        }
        self.path_segments.push(name.to_string());
        self.media.descend(name);
        self.media.refresh();
        self.window_start = 0;
        self.last_requested_index = 0;
        log::info!("NAV: entered '{}'", self.current_path());
    }

    /// Go up one level. Leaving the last folder, or calling this at root,
    /// rewinds everything exactly like [`reset`](Self::reset).
    pub fn leave_folder(&mut self) {
        self.media.ascend();
        self.media.refresh();
        self.window_start = 0;
        self.last_requested_index = 0;
        self.path_segments.pop();
        if self.path_segments.is_empty() {
            self.reset();
        } else {
            log::info!("NAV: left folder, now '{}'", self.current_path());
        }
    }

    /// Breadcrumb from root to the current folder, one trailing `/` per
    /// segment; empty at root.
    pub fn current_path(&self) -> String {
        let mut path = String::new();
        for segment in &self.path_segments {
            path.push_str(segment);
            path.push('/');
        }
        path
    }

    /// Current folder nesting depth.
    pub fn depth(&self) -> usize {
        self.path_segments.len()
    }

    /// Number of entries in the current directory.
    pub fn entry_count(&self) -> usize {
        self.media.child_count()
    }

    /// Ordinal of the first entry on the current page.
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// The entry at a zero-based position of the current listing.
    pub fn entry_at(&self, ordinal: usize) -> Option<FileEntry> {
        self.media.entry_at(ordinal)
    }

    /// Logical path for the entry at `ordinal`, in the form the storage
    /// layer expects when the panel picks that slot.
    pub fn selection_path(&self, ordinal: usize) -> Option<String> {
        self.media
            .entry_at(ordinal)
            .map(|entry| selection_path(&self.current_path(), &entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestPanel;
    use alloc::format;

    /// Flat single-directory cursor, enough to exercise the windowing math.
    struct FlatListing {
        names: Vec<String>,
    }

    impl FlatListing {
        fn with_entries(count: usize) -> Self {
            Self {
                names: (0..count).map(|i| format!("file{}.gco", i)).collect(),
            }
        }
    }

    impl DirectoryCursor for FlatListing {
        fn is_at_root(&self) -> bool {
            true
        }

        fn ascend(&mut self) {}

        fn descend(&mut self, _name: &str) {}

        fn refresh(&mut self) {}

        fn entry_at(&self, ordinal: usize) -> Option<FileEntry> {
            self.names.get(ordinal).map(|name| FileEntry {
                display_name: name.clone(),
                short_name: name.to_uppercase(),
                is_directory: false,
            })
        }

        fn child_count(&self) -> usize {
            self.names.len()
        }
    }

    fn paged(count: usize) -> (FileNavigator<FlatListing>, TestPanel) {
        (
            FileNavigator::new(FlatListing::with_entries(count)),
            TestPanel::default_size(),
        )
    }

    #[test]
    fn rising_indexes_advance_one_page_each() {
        let (mut nav, mut panel) = paged(12);
        nav.request_page(0, &mut panel);
        assert_eq!(nav.window_start(), 0);
        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 5);
        nav.request_page(2, &mut panel);
        assert_eq!(nav.window_start(), 10);
    }

    #[test]
    fn index_zero_always_jumps_to_first_page() {
        let (mut nav, mut panel) = paged(12);
        nav.request_page(0, &mut panel);
        nav.request_page(1, &mut panel);
        nav.request_page(2, &mut panel);
        assert_eq!(nav.window_start(), 10);

        nav.request_page(0, &mut panel);
        assert_eq!(nav.window_start(), 0);
        assert_eq!(panel.slot(0), "file0.gco");
    }

    #[test]
    fn lower_index_pages_backward() {
        let (mut nav, mut panel) = paged(20);
        nav.request_page(0, &mut panel);
        nav.request_page(1, &mut panel);
        nav.request_page(2, &mut panel);
        assert_eq!(nav.window_start(), 10);

        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 5);
    }

    #[test]
    fn repeated_request_pages_backward() {
        let (mut nav, mut panel) = paged(20);
        nav.request_page(0, &mut panel);
        nav.request_page(3, &mut panel);
        nav.request_page(4, &mut panel);
        assert_eq!(nav.window_start(), 10);

        // Same counter twice in a row reads as "backward".
        nav.request_page(4, &mut panel);
        assert_eq!(nav.window_start(), 5);
        nav.request_page(4, &mut panel);
        assert_eq!(nav.window_start(), 0);
    }

    #[test]
    fn backward_from_first_page_clamps_at_zero() {
        let (mut nav, mut panel) = paged(20);
        nav.request_page(0, &mut panel);
        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 5);

        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 0);
        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 0);
    }

    #[test]
    fn short_listing_pads_remaining_slots_with_blanks() {
        let (mut nav, mut panel) = paged(3);
        nav.request_page(0, &mut panel);
        assert_eq!(
            panel.slots(),
            &[
                "file0.gco".to_string(),
                "file1.gco".to_string(),
                "file2.gco".to_string(),
                String::new(),
                String::new(),
            ]
        );
    }

    #[test]
    fn page_past_end_is_all_blanks() {
        let (mut nav, mut panel) = paged(3);
        nav.request_page(0, &mut panel);
        nav.request_page(1, &mut panel);
        assert_eq!(nav.window_start(), 5);
        assert_eq!(panel.blank_slot_count(), 5);
    }

    #[test]
    fn window_start_stays_page_aligned() {
        let (mut nav, mut panel) = paged(40);
        let indexes = [0usize, 1, 2, 2, 5, 4, 0, 7, 7, 1];
        for &index in &indexes {
            nav.request_page(index, &mut panel);
            assert_eq!(nav.window_start() % SLOTS_PER_PAGE, 0);
        }
    }

    #[test]
    fn selection_path_uses_short_name() {
        let (nav, _) = paged(1);
        assert_eq!(nav.selection_path(0).as_deref(), Some("/FILE0.GCO"));
        assert_eq!(nav.selection_path(9), None);
    }
}
