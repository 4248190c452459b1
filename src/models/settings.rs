use crate::models::milestone::{Milestone, MilestoneCategory};
use crate::utils::date::parse_iso_date;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_LIFE_EXPECTANCY: u32 = 90;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The whole persisted state of the tool: one snapshot, replaced wholesale
/// on every mutation and written back to disk by the settings store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeSettings {
    /// Absent until the user sets it; the grid is never built without one.
    pub birthdate: Option<NaiveDate>,
    pub life_expectancy: u32,
    pub milestones: Vec<Milestone>,
    pub theme: Theme,
}

impl Default for LifeSettings {
    fn default() -> Self {
        Self {
            birthdate: None,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            milestones: Vec::new(),
            theme: Theme::Light,
        }
    }
}

impl LifeSettings {
    /// Serialize to the snapshot/backup document (pretty JSON, ISO dates).
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SnapshotDoc::from(self))
    }

    /// Lenient snapshot parsing.
    ///
    /// Field-level damage is dropped, never fatal: an unparseable
    /// birthdate becomes `None`, milestones with bad dates (or a
    /// non-array milestones field) are discarded, a non-positive
    /// expectancy falls back to the default. Only a document that is not
    /// JSON at all is reported to the caller.
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        Self::from_json_str_with_default(raw, DEFAULT_LIFE_EXPECTANCY)
    }

    /// Same lenient parsing, with a caller-supplied expectancy fallback
    /// (the `default_life_expectancy` configuration value).
    pub fn from_json_str_with_default(
        raw: &str,
        default_expectancy: u32,
    ) -> serde_json::Result<Self> {
        let doc: Value = serde_json::from_str(raw)?;

        let birthdate = doc
            .get("birthdate")
            .and_then(Value::as_str)
            .and_then(parse_iso_date);

        let life_expectancy = match doc.get("lifeExpectancy").and_then(Value::as_u64) {
            Some(n) if n >= 1 => n as u32,
            _ => default_expectancy.max(1),
        };

        let milestones = doc
            .get("milestones")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(parse_milestone).collect())
            .unwrap_or_default();

        let theme = doc
            .get("theme")
            .and_then(Value::as_str)
            .and_then(Theme::from_code)
            .unwrap_or(Theme::Light);

        Ok(Self {
            birthdate,
            life_expectancy,
            milestones,
            theme,
        })
    }
}

/// One milestone entry, or None when its date is missing or unreadable.
fn parse_milestone(entry: &Value) -> Option<Milestone> {
    let date = entry.get("date").and_then(Value::as_str).and_then(parse_iso_date)?;

    let text = |field: &str| {
        entry
            .get(field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    Some(Milestone {
        id: text("id"),
        date,
        name: text("name"),
        color: text("color"),
        category: entry
            .get("category")
            .and_then(Value::as_str)
            .and_then(MilestoneCategory::from_code),
    })
}

/// On-disk shape of the snapshot and of backup files. Dates are written
/// as plain "YYYY-MM-DD" strings.
#[derive(Debug, Serialize)]
struct SnapshotDoc {
    birthdate: Option<String>,
    #[serde(rename = "lifeExpectancy")]
    life_expectancy: u32,
    milestones: Vec<MilestoneDoc>,
    theme: String,
}

#[derive(Debug, Serialize)]
struct MilestoneDoc {
    id: String,
    date: String,
    name: String,
    color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
}

impl From<&LifeSettings> for SnapshotDoc {
    fn from(s: &LifeSettings) -> Self {
        Self {
            birthdate: s.birthdate.map(|d| d.format("%Y-%m-%d").to_string()),
            life_expectancy: s.life_expectancy,
            milestones: s
                .milestones
                .iter()
                .map(|m| MilestoneDoc {
                    id: m.id.clone(),
                    date: m.date_str(),
                    name: m.name.clone(),
                    color: m.color.clone(),
                    category: m.category.map(|c| c.as_str().to_string()),
                })
                .collect(),
            theme: s.theme.as_str().to_string(),
        }
    }
}
