//! Announcement and crowd status entities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    Closure,
    Holiday,
    Maintenance,
    General,
}

impl AnnouncementKind {
    pub const ALL: [AnnouncementKind; 4] = [
        AnnouncementKind::Closure,
        AnnouncementKind::Holiday,
        AnnouncementKind::Maintenance,
        AnnouncementKind::General,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AnnouncementKind::Closure => "closure",
            AnnouncementKind::Holiday => "holiday",
            AnnouncementKind::Maintenance => "maintenance",
            AnnouncementKind::General => "general",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AnnouncementKind::Closure => "Closed",
            AnnouncementKind::Holiday => "Holiday",
            AnnouncementKind::Maintenance => "Maintenance",
            AnnouncementKind::General => "General",
        }
    }
}

impl fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AnnouncementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        AnnouncementKind::ALL
            .into_iter()
            .find(|k| k.key() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown announcement kind: '{}'. Valid kinds are: closure, holiday, maintenance, general",
                    s
                )
            })
    }
}

/// A cafeteria notice shown while today falls inside its validity window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: AnnouncementKind,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    #[serde(default)]
    pub important: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Announcement {
    /// Visible to students: active and within the validity window
    pub fn is_visible_on(&self, today: NaiveDate) -> bool {
        self.active && self.starts_on <= today && today <= self.ends_on
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrowdLevel {
    Empty,
    Normal,
    Crowded,
    VeryCrowded,
}

impl CrowdLevel {
    pub const ALL: [CrowdLevel; 4] = [
        CrowdLevel::Empty,
        CrowdLevel::Normal,
        CrowdLevel::Crowded,
        CrowdLevel::VeryCrowded,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CrowdLevel::Empty => "empty",
            CrowdLevel::Normal => "normal",
            CrowdLevel::Crowded => "crowded",
            CrowdLevel::VeryCrowded => "very-crowded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CrowdLevel::Empty => "Empty",
            CrowdLevel::Normal => "Normal",
            CrowdLevel::Crowded => "Crowded",
            CrowdLevel::VeryCrowded => "Very crowded",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for CrowdLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        CrowdLevel::ALL
            .into_iter()
            .find(|l| l.key() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown crowd level: '{}'. Valid levels are: empty, normal, crowded, very-crowded",
                    s
                )
            })
    }
}

/// How busy the cafeteria currently is, set by admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrowdStatus {
    pub level: CrowdLevel,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

impl CrowdStatus {
    pub fn normal() -> Self {
        CrowdStatus {
            level: CrowdLevel::Normal,
            message: "Cafeteria is at normal capacity".to_string(),
            updated_at: Utc::now(),
        }
    }
}
