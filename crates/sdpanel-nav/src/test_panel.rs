//! Recording panel double.
//!
//! Captures the text pushed into each slot so tests can assert on whole
//! pages without a panel attached.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::panel::SlotDisplay;

/// Slot sink that records the last text written to each slot.
pub struct TestPanel {
    slots: Vec<String>,
}

impl TestPanel {
    /// Create a panel double with the given number of slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![String::new(); slot_count],
        }
    }

    /// Create a panel double matching the TFT file page (5 slots).
    pub fn default_size() -> Self {
        Self::new(crate::SLOTS_PER_PAGE)
    }

    /// Text currently in a slot; out-of-range slots read as empty.
    pub fn slot(&self, slot: usize) -> &str {
        self.slots.get(slot).map(String::as_str).unwrap_or("")
    }

    /// All slots in order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// How many slots are currently cleared.
    pub fn blank_slot_count(&self) -> usize {
        self.slots.iter().filter(|text| text.is_empty()).count()
    }
}

impl SlotDisplay for TestPanel {
    fn set_slot_text(&mut self, slot: usize, text: &str) {
        if let Some(current) = self.slots.get_mut(slot) {
            *current = text.to_string();
        }
    }
}
