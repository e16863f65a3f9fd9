//! Display-side boundary: the panel's flat list of text slots.

/// Receiver for the text pushed into the panel's file-list widgets.
///
/// The panel shows a fixed number of slots per page. A page request fills
/// every slot in increasing order; the empty string clears a slot. How the
/// text reaches the glass (wire protocol, widget addressing) is the
/// implementor's concern.
pub trait SlotDisplay {
    fn set_slot_text(&mut self, slot: usize, text: &str);
}
