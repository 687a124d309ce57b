use thiserror::Error;

use crate::analytics::AnalyticsSink;
use crate::page::{PageState, CREATE_SEQUENCE, CREATE_STEP_COUNT};
use crate::state::{AppState, LngLat};
use crate::types::FactoryData;

/// A transition operation was invoked from a state it is not legal in.
///
/// This is a programmer-contract violation, not a user-facing condition: the
/// UI is expected to gate its affordances on the derived flags so that only
/// currently-legal operations are reachable. Nothing inside the crate catches
/// or translates it; a failed transition leaves the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid page transition: {operation} from {from}")]
pub struct InvalidTransition {
    pub operation: &'static str,
    pub from: PageState,
}

impl InvalidTransition {
    const fn new(operation: &'static str, from: PageState) -> Self {
        Self { operation, from }
    }
}

/// Owns the [`AppState`] and the analytics sink; the sole writer of the page
/// state. Constructed once at application start and handed to the UI layer.
///
/// Every operation validates its precondition against the current state, then
/// either performs the prescribed mutation plus its single emission, or fails
/// with [`InvalidTransition`] having changed nothing. Analytics emission
/// happens after the mutation commits and cannot affect its success.
#[derive(Debug, Default)]
pub struct AppContext<A: AnalyticsSink> {
    state: AppState,
    analytics: A,
}

impl<A: AnalyticsSink> AppContext<A> {
    #[must_use]
    pub fn new(analytics: A) -> Self {
        Self {
            state: AppState::new(),
            analytics,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access to the auxiliary session fields. The page state itself
    /// stays private; it only moves through the named operations below.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    #[must_use]
    pub const fn analytics(&self) -> &A {
        &self.analytics
    }

    fn set_page(&mut self, next: PageState) {
        let from = self.state.page_state();
        tracing::debug!(from = %from, to = %next, "page transition");
        self.state.set_page_state(next);
    }

    // --- Create wizard ---

    /// Enter the create wizard from the browse screen; the map switches to
    /// "click to place" mode.
    pub fn start_create_factory(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if from != PageState::Initial {
            return Err(InvalidTransition::new("start_create_factory", from));
        }
        self.set_page(PageState::Create1);
        self.analytics.event("enterSelectFactoryMode", None);
        Ok(())
    }

    /// Primary "Next" handler of the wizard. Strict: rejects when outside the
    /// wizard or already on the last step.
    pub fn goto_next_create(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        let index = from
            .create_index()
            .filter(|i| i + 1 < CREATE_STEP_COUNT)
            .ok_or(InvalidTransition::new("goto_next_create", from))?;
        self.set_page(CREATE_SEQUENCE[index + 1]);
        if index == 0 {
            self.analytics.pageview("/create");
        }
        Ok(())
    }

    /// Lenient step-forward for auxiliary navigation (progress-indicator
    /// clicks); silently ignores calls with no next step.
    pub fn next_create_step(&mut self) {
        if let Some(index) = self.state.page_state().create_index() {
            if index + 1 < CREATE_STEP_COUNT {
                self.set_page(CREATE_SEQUENCE[index + 1]);
            }
        }
    }

    /// Lenient counterpart of [`Self::next_create_step`]; silently ignores
    /// calls with no previous step.
    pub fn previous_create_step(&mut self) {
        if let Some(index) = self.state.page_state().create_index() {
            if index > 0 {
                self.set_page(CREATE_SEQUENCE[index - 1]);
            }
        }
    }

    /// Jump to a wizard step by 0-based index.
    pub fn goto_create_step(&mut self, step: usize) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        let target = CREATE_SEQUENCE
            .get(step)
            .ok_or(InvalidTransition::new("goto_create_step", from))?;
        self.set_page(*target);
        Ok(())
    }

    /// Abandon the create wizard from any of its steps.
    pub fn cancel_create_factory(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if !from.is_create_mode() {
            return Err(InvalidTransition::new("cancel_create_factory", from));
        }
        self.set_page(PageState::Initial);
        self.analytics.event("exitSelectFactoryMode", None);
        Ok(())
    }

    // --- Edit modes ---

    pub fn start_update_factory_images(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if from != PageState::Initial {
            return Err(InvalidTransition::new("start_update_factory_images", from));
        }
        self.set_page(PageState::EditImages);
        self.analytics.pageview("/edit");
        Ok(())
    }

    pub fn cancel_update_factory_images(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if from != PageState::EditImages {
            return Err(InvalidTransition::new("cancel_update_factory_images", from));
        }
        self.set_page(PageState::Initial);
        self.analytics.event("exitUpdateFactoryImagesMode", None);
        Ok(())
    }

    pub fn start_update_factory_comment(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if from != PageState::Initial {
            return Err(InvalidTransition::new("start_update_factory_comment", from));
        }
        self.set_page(PageState::EditComment);
        self.analytics.pageview("/editComment");
        Ok(())
    }

    /// Close whichever full-page flow is open (create wizard or either edit
    /// mode) and return to browsing.
    pub fn close_factory_page(&mut self) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if !from.is_create_mode() && !from.is_edit_mode() {
            return Err(InvalidTransition::new("close_factory_page", from));
        }
        self.set_page(PageState::Initial);
        self.analytics.event("closeFactoryPage", None);
        Ok(())
    }

    /// Select `factory` and open the image editor for it, in one step.
    ///
    /// Emits a single `/edit` pageview. On a failed precondition the selected
    /// record is left untouched as well.
    pub fn open_edit_factory_form(&mut self, factory: FactoryData) -> Result<(), InvalidTransition> {
        let from = self.state.page_state();
        if from != PageState::Initial {
            return Err(InvalidTransition::new("open_edit_factory_form", from));
        }
        self.state.factory_data = Some(factory);
        self.set_page(PageState::EditImages);
        self.analytics.pageview("/edit");
        Ok(())
    }

    // --- Auxiliary session mutations (no legality checks) ---

    pub fn update_factory_data(&mut self, factory: FactoryData) {
        self.state.factory_data = Some(factory);
    }

    pub fn set_factory_location(&mut self, location: LngLat) {
        self.state.factory_location = Some(location);
        self.analytics.event("setFactoryLocation", None);
    }

    pub fn expand_factory_detail(&mut self) {
        self.state.factory_details_expanded = true;
    }

    /// Collapsing the panel releases ownership of the selected record.
    pub fn collapse_factory_detail(&mut self) {
        self.state.factory_details_expanded = false;
        self.state.factory_data = None;
    }

    pub fn toggle_factory_detail(&mut self) {
        self.state.factory_details_expanded = !self.state.factory_details_expanded;
    }
}
