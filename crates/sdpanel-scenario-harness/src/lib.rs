//! Host-side scenario harness for scripted browsing flows.

use sdpanel_nav::{FileNavigator, MockMedia, TestPanel};

/// Small helper that couples navigator and panel double for scenario tests.
pub struct ScenarioHarness {
    nav: FileNavigator<MockMedia>,
    panel: TestPanel,
}

impl ScenarioHarness {
    /// Construct a harness over caller-provided media state.
    pub fn new(media: MockMedia) -> Self {
        Self {
            nav: FileNavigator::new(media),
            panel: TestPanel::default_size(),
        }
    }

    /// Simulate one raw page request from the panel.
    pub fn request_page(&mut self, index: usize) {
        self.nav.request_page(index, &mut self.panel);
    }

    /// Simulate the panel confirming a folder entry.
    pub fn enter_folder(&mut self, name: &str) {
        self.nav.enter_folder(name);
    }

    /// Simulate the panel's back action.
    pub fn leave_folder(&mut self) {
        self.nav.leave_folder();
    }

    /// Text currently shown in a slot.
    pub fn slot(&self, slot: usize) -> &str {
        self.panel.slot(slot)
    }

    /// Access the navigator for assertions.
    pub fn nav(&self) -> &FileNavigator<MockMedia> {
        &self.nav
    }

    /// Access the navigator mutably for reset/refresh steps.
    pub fn nav_mut(&mut self) -> &mut FileNavigator<MockMedia> {
        &mut self.nav
    }

    /// Access the panel double for whole-page assertions.
    pub fn panel(&self) -> &TestPanel {
        &self.panel
    }
}
