//! Navigation logic for the SD-panel file browser.
//! Works on the printer mainboard and in host-side simulators.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

extern crate alloc;

pub mod media;
pub mod navigator;
pub mod panel;
pub mod test_panel;

#[cfg(feature = "std")]
pub mod mock_media;

pub use media::{selection_path, DirectoryCursor, FileEntry};
pub use navigator::FileNavigator;
pub use panel::SlotDisplay;
pub use test_panel::TestPanel;

#[cfg(feature = "std")]
pub use mock_media::MockMedia;

/// File-list slots the panel shows per page.
pub const SLOTS_PER_PAGE: usize = 5;

/// Deepest folder nesting the breadcrumb tracks.
pub const MAX_FOLDER_DEPTH: usize = 4;
