use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::analytics::AnalyticsSink;

/// Open/closed flags for every modal surface, plus the sidebar and the map
/// filter panel. Plain key-value UI state: no legality rules, no transitions.
///
/// Auto-dismiss of the success modals is the shell's job (it owns timers);
/// the core only flips flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModalState {
    pub update_factory_success_open: bool,
    pub update_factory_images_success_open: bool,
    pub create_factory_success_open: bool,

    pub about_open: bool,
    pub contact_open: bool,
    pub safety_open: bool,
    pub getting_started_open: bool,
    pub tutorial_open: bool,
    pub distinction_open: bool,
    pub support_ios_open: bool,

    pub sidebar_open: bool,
    pub filter_open: bool,
}

impl ModalState {
    /// `first_run` decides whether the getting-started modal greets the user;
    /// `unsupported_ios` whether the iOS-version warning shows. The shell
    /// derives both (preference storage, browser check) before construction.
    #[must_use]
    pub fn new(first_run: bool, unsupported_ios: bool) -> Self {
        Self {
            getting_started_open: first_run,
            support_ios_open: unsupported_ios,
            ..Self::default()
        }
    }

    pub fn open_update_factory_success(&mut self) {
        self.update_factory_success_open = true;
    }

    pub fn close_update_factory_success(&mut self) {
        self.update_factory_success_open = false;
    }

    pub fn open_update_factory_images_success(&mut self) {
        self.update_factory_images_success_open = true;
    }

    pub fn close_update_factory_images_success(&mut self) {
        self.update_factory_images_success_open = false;
    }

    pub fn open_create_factory_success(&mut self) {
        self.create_factory_success_open = true;
    }

    pub fn close_create_factory_success(&mut self) {
        self.create_factory_success_open = false;
    }

    pub fn open_about(&mut self) {
        self.about_open = true;
    }

    pub fn close_about(&mut self) {
        self.about_open = false;
    }

    pub fn open_contact(&mut self) {
        self.contact_open = true;
    }

    pub fn close_contact(&mut self) {
        self.contact_open = false;
    }

    pub fn open_safety(&mut self) {
        self.safety_open = true;
    }

    pub fn close_safety(&mut self) {
        self.safety_open = false;
    }

    pub fn open_getting_started(&mut self) {
        self.getting_started_open = true;
    }

    pub fn close_getting_started(&mut self) {
        self.getting_started_open = false;
    }

    pub fn open_tutorial(&mut self) {
        self.tutorial_open = true;
    }

    pub fn close_tutorial(&mut self) {
        self.tutorial_open = false;
    }

    pub fn open_distinction(&mut self) {
        self.distinction_open = true;
    }

    pub fn close_distinction(&mut self) {
        self.distinction_open = false;
    }

    pub fn close_support_ios(&mut self) {
        self.support_ios_open = false;
    }

    pub fn toggle_sidebar(&mut self, analytics: &impl AnalyticsSink) {
        let open = !self.sidebar_open;
        analytics.event("toggleSidebar", Some(json!({ "target": open })));
        self.sidebar_open = open;
    }

    pub fn open_filter(&mut self, analytics: &impl AnalyticsSink) {
        analytics.event("openFilterModal", None);
        self.filter_open = true;
    }

    pub fn close_filter(&mut self, analytics: &impl AnalyticsSink) {
        analytics.event("closeFilterModal", None);
        self.filter_open = false;
    }
}
