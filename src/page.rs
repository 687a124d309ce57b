use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of steps in the create-report wizard.
pub const CREATE_STEP_COUNT: usize = 3;

/// Navigation state of the map UI. Exactly one value is active at any time;
/// it is the sole source of truth for which surfaces render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PageState {
    /// Browsing the map; no form open.
    #[default]
    Initial,
    /// Create wizard step 1: picking a location on the map.
    #[serde(rename = "create_1")]
    Create1,
    /// Create wizard step 2: filling in report details.
    #[serde(rename = "create_2")]
    Create2,
    /// Create wizard step 3: confirmation.
    #[serde(rename = "create_3")]
    Create3,
    /// Editing the images of an existing report.
    EditImages,
    /// Editing the comment of an existing report.
    EditComment,
}

/// The only legal forward/backward path through the create wizard.
pub const CREATE_SEQUENCE: [PageState; CREATE_STEP_COUNT] =
    [PageState::Create1, PageState::Create2, PageState::Create3];

impl PageState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Create1 => "create_1",
            Self::Create2 => "create_2",
            Self::Create3 => "create_3",
            Self::EditImages => "edit_images",
            Self::EditComment => "edit_comment",
        }
    }

    /// 0-based position in [`CREATE_SEQUENCE`], or `None` outside the wizard.
    #[must_use]
    pub const fn create_index(self) -> Option<usize> {
        match self {
            Self::Create1 => Some(0),
            Self::Create2 => Some(1),
            Self::Create3 => Some(2),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_create_mode(self) -> bool {
        self.create_index().is_some()
    }

    /// 1-based wizard step for display, or 0 outside the wizard.
    #[must_use]
    pub const fn create_step_index(self) -> usize {
        match self.create_index() {
            Some(i) => i + 1,
            None => 0,
        }
    }

    #[must_use]
    pub const fn is_edit_images_mode(self) -> bool {
        matches!(self, Self::EditImages)
    }

    #[must_use]
    pub const fn is_edit_comment_mode(self) -> bool {
        matches!(self, Self::EditComment)
    }

    #[must_use]
    pub const fn is_edit_mode(self) -> bool {
        matches!(self, Self::EditImages | Self::EditComment)
    }

    /// Map is in "click to place the report" mode.
    #[must_use]
    pub const fn select_factory_mode(self) -> bool {
        matches!(self, Self::Create1)
    }

    /// A full-page form is open (any create step, or the image editor).
    #[must_use]
    pub const fn form_page_open(self) -> bool {
        self.is_create_mode() || self.is_edit_images_mode()
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
