use serde::{Deserialize, Serialize};

use crate::page::PageState;
use crate::types::FactoryData;

/// A longitude/latitude pair in map order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Shared navigation state, one instance per application session.
///
/// Constructed once at startup and threaded by reference to whichever UI
/// components need it. `page_state` is private: the transition module is the
/// sole writer, everything else reads. The auxiliary session fields carry no
/// legality rules and are freely mutable by any caller.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    // Serialized for shell rendering, but never deserialized: a restored or
    // forged payload must not move the page state without a transition.
    #[serde(skip_deserializing)]
    page_state: PageState,

    /// Report record selected for viewing or editing.
    pub factory_data: Option<FactoryData>,
    /// Location picked on the map for a new report.
    pub factory_location: Option<LngLat>,
    /// Whether the details panel is expanded.
    pub factory_details_expanded: bool,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page_state(&self) -> PageState {
        self.page_state
    }

    pub(crate) fn set_page_state(&mut self, next: PageState) {
        self.page_state = next;
    }

    // Derived flags, recomputed on read from the current page state. They can
    // never drift from it because they are never stored.

    #[must_use]
    pub const fn is_create_mode(&self) -> bool {
        self.page_state.is_create_mode()
    }

    /// 1-based create wizard step, or 0 outside the wizard.
    #[must_use]
    pub const fn create_step_index(&self) -> usize {
        self.page_state.create_step_index()
    }

    #[must_use]
    pub const fn is_edit_images_mode(&self) -> bool {
        self.page_state.is_edit_images_mode()
    }

    #[must_use]
    pub const fn is_edit_comment_mode(&self) -> bool {
        self.page_state.is_edit_comment_mode()
    }

    #[must_use]
    pub const fn is_edit_mode(&self) -> bool {
        self.page_state.is_edit_mode()
    }

    #[must_use]
    pub const fn select_factory_mode(&self) -> bool {
        self.page_state.select_factory_mode()
    }

    #[must_use]
    pub const fn form_page_open(&self) -> bool {
        self.page_state.form_page_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_with_empty_session() {
        let state = AppState::new();
        assert_eq!(state.page_state(), PageState::Initial);
        assert!(state.factory_data.is_none());
        assert!(state.factory_location.is_none());
        assert!(!state.factory_details_expanded);
    }

    #[test]
    fn derived_flags_track_page_state() {
        let mut state = AppState::new();
        state.set_page_state(PageState::EditImages);
        assert!(state.is_edit_mode());
        assert!(state.is_edit_images_mode());
        assert!(state.form_page_open());
        assert!(!state.select_factory_mode());
        assert!(!state.is_create_mode());
        assert_eq!(state.create_step_index(), 0);

        state.set_page_state(PageState::Create2);
        assert!(state.is_create_mode());
        assert_eq!(state.create_step_index(), 2);
        assert!(!state.is_edit_mode());
    }

    #[test]
    fn page_state_serializes_but_never_deserializes() {
        let mut state = AppState::new();
        state.set_page_state(PageState::Create2);
        state.factory_details_expanded = true;

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["page_state"], serde_json::json!("create_2"));

        // Round-tripping keeps the auxiliary fields but lands at Initial:
        // the page state only moves through transition operations.
        let restored: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(restored.page_state(), PageState::Initial);
        assert!(restored.factory_details_expanded);
    }

    #[test]
    fn auxiliary_fields_are_freely_mutable() {
        let mut state = AppState::new();
        state.factory_location = Some(LngLat::new(120.9, 23.9));
        state.factory_details_expanded = true;
        assert_eq!(state.factory_location, Some(LngLat::new(120.9, 23.9)));
        assert_eq!(state.page_state(), PageState::Initial);
    }
}
