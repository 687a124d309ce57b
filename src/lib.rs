//! Shared navigation core for the factory-report map UI.
//!
//! One finite-state model ([`PageState`]) decides whether the user is
//! browsing, inside the three-step create wizard, or in one of the two edit
//! modes, and gates which surfaces render. [`AppContext`] is the sole writer
//! of that state; everything else reads it (and the flags derived from it)
//! through [`AppState`]. Analytics leave the core through the
//! [`AnalyticsSink`] trait, fire-and-forget.
//!
//! The core is synchronous and single-threaded: the shell owns the one
//! control thread, transitions run to completion, and no locking is needed.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod modal;
pub mod page;
pub mod state;
pub mod transition;
pub mod types;

pub use analytics::{AnalyticsSink, BufferingAnalytics, Emission, NoopAnalytics, TracingAnalytics};
pub use modal::ModalState;
pub use page::{PageState, CREATE_SEQUENCE, CREATE_STEP_COUNT};
pub use state::{AppState, LngLat};
pub use transition::{AppContext, InvalidTransition};
pub use types::{DisplayStatus, FactoryData, FactoryImage, FactoryType};
