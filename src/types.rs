use serde::{Deserialize, Serialize};
use std::fmt;

/// Report category, as submitted by the reporter.
///
/// Codes are wire-stable; labels are the display vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FactoryType {
    TraceClaw,
    TraceScat,
    TraceBrokenPlants,
    ConflictCoop,
    ConflictOrchard,
    ConflictOther,
    Death,
    SightingUnsure,
    SightingConfirmed,
    Other,
}

impl FactoryType {
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "2-1" => Some(Self::TraceClaw),
            "2-2" => Some(Self::TraceScat),
            "2-3" => Some(Self::TraceBrokenPlants),
            "3" => Some(Self::ConflictCoop),
            "4" => Some(Self::ConflictOrchard),
            "5" => Some(Self::ConflictOther),
            "6" => Some(Self::Death),
            "7" => Some(Self::SightingUnsure),
            "8" => Some(Self::SightingConfirmed),
            "9" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::TraceClaw => "2-1",
            Self::TraceScat => "2-2",
            Self::TraceBrokenPlants => "2-3",
            Self::ConflictCoop => "3",
            Self::ConflictOrchard => "4",
            Self::ConflictOther => "5",
            Self::Death => "6",
            Self::SightingUnsure => "7",
            Self::SightingConfirmed => "8",
            Self::Other => "9",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TraceClaw => "痕跡: 爪痕",
            Self::TraceScat => "痕跡: 排遺",
            Self::TraceBrokenPlants => "痕跡: 植物折痕",
            Self::ConflictCoop => "人熊衝突現場痕跡 - 雞舍",
            Self::ConflictOrchard => "人熊衝突現場痕跡 - 果園",
            Self::ConflictOther => "人熊衝突現場痕跡 - 其他",
            Self::Death => "死亡",
            Self::SightingUnsure => "現場目擊 - 不確定",
            Self::SightingConfirmed => "現場目擊 - 確定",
            Self::Other => "其他",
        }
    }
}

impl fmt::Display for FactoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Processing-status bucket a report is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    #[default]
    Unhandled,
    InProgress,
    Identified,
    Investigated,
    Unresolvable,
}

pub const ALL_DISPLAY_STATUSES: [DisplayStatus; 5] = [
    DisplayStatus::Unhandled,
    DisplayStatus::InProgress,
    DisplayStatus::Identified,
    DisplayStatus::Investigated,
    DisplayStatus::Unresolvable,
];

impl DisplayStatus {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unhandled => "未處理",
            Self::InProgress => "處理中",
            Self::Identified => "已鑑定",
            Self::Investigated => "已調查",
            Self::Unresolvable => "無法處理",
        }
    }

    /// Marker color on the map.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Unhandled => "#A22A29",
            Self::InProgress => "#457287",
            Self::Identified => "#364516",
            Self::Investigated => "#A1A1A1",
            Self::Unresolvable => "#E0E0E0",
        }
    }

    /// Document statuses that roll up into this bucket.
    #[must_use]
    pub const fn document_display_statuses(self) -> &'static [&'static str] {
        match self {
            Self::Unhandled => &["疑似黑熊出沒痕跡"],
            Self::InProgress => &["已通報", "已排程調查", "與通報者溝通期", "已開始進行鑑定"],
            Self::Identified => &["鑑定完畢已開始進行調查", "已至現場調查"],
            Self::Investigated => &["已調查完畢"],
            Self::Unresolvable => &["不再追蹤"],
        }
    }

    #[must_use]
    pub fn from_document_status(document_status: &str) -> Option<Self> {
        ALL_DISPLAY_STATUSES
            .into_iter()
            .find(|s| s.document_display_statuses().iter().any(|d| *d == document_status))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryImage {
    pub id: String,
    pub image_path: String,
    pub url: String,
}

/// An existing report record, as served by the backend.
///
/// Opaque to the navigation core: it is stored and cleared but never
/// interpreted beyond its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactoryData {
    pub id: String,
    pub display_number: String,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub factory_type: Option<FactoryType>,
    #[serde(default)]
    pub images: Vec<FactoryImage>,
    #[serde(default)]
    pub reported_at: Option<String>,
    #[serde(default)]
    pub document_display_status: Option<String>,
}

impl FactoryData {
    #[must_use]
    pub fn display_status(&self) -> DisplayStatus {
        self.document_display_status
            .as_deref()
            .and_then(DisplayStatus::from_document_status)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_type_codes_round_trip() {
        for code in ["2-1", "2-2", "2-3", "3", "4", "5", "6", "7", "8", "9"] {
            let t = FactoryType::from_code(code).unwrap();
            assert_eq!(t.code(), code);
        }
        assert_eq!(FactoryType::from_code("1"), None);
        assert_eq!(FactoryType::from_code(""), None);
    }

    #[test]
    fn document_status_maps_to_bucket() {
        assert_eq!(
            DisplayStatus::from_document_status("已通報"),
            Some(DisplayStatus::InProgress)
        );
        assert_eq!(
            DisplayStatus::from_document_status("已調查完畢"),
            Some(DisplayStatus::Investigated)
        );
        assert_eq!(DisplayStatus::from_document_status("nonsense"), None);
    }

    #[test]
    fn record_without_document_status_is_unhandled() {
        let record = FactoryData {
            id: "f-1".into(),
            display_number: "00001".into(),
            lat: 23.9,
            lng: 120.9,
            name: "test".into(),
            factory_type: None,
            images: Vec::new(),
            reported_at: None,
            document_display_status: None,
        };
        assert_eq!(record.display_status(), DisplayStatus::Unhandled);
        assert_eq!(record.display_status().name(), "未處理");
    }
}
