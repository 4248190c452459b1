use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated life event pinned onto the grid.
///
/// Milestones are immutable: editing one means removing it and adding a
/// replacement. Cells reference them, they never own them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    /// Display color as "#RRGGBB".
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<MilestoneCategory>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneCategory {
    Career,
    Education,
    Relationship,
    Health,
    Travel,
    Personal,
    Other,
}

impl MilestoneCategory {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "career" => Some(Self::Career),
            "education" => Some(Self::Education),
            "relationship" => Some(Self::Relationship),
            "health" => Some(Self::Health),
            "travel" => Some(Self::Travel),
            "personal" => Some(Self::Personal),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Education => "education",
            Self::Relationship => "relationship",
            Self::Health => "health",
            Self::Travel => "travel",
            Self::Personal => "personal",
            Self::Other => "other",
        }
    }

    /// Fallback color used when `milestone add` is called without `--color`.
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Career => "#4A90D9",
            Self::Education => "#9B59B6",
            Self::Relationship => "#E05A8A",
            Self::Health => "#2ECC71",
            Self::Travel => "#E67E22",
            Self::Personal => "#F1C40F",
            Self::Other => "#95A5A6",
        }
    }
}

impl Milestone {
    pub fn new(
        id: String,
        date: NaiveDate,
        name: String,
        color: String,
        category: Option<MilestoneCategory>,
    ) -> Self {
        Self {
            id,
            date,
            name,
            color,
            category,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn category_str(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }
}
