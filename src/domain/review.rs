//! Review entities

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Predefined short tags a reviewer may attach next to the star rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFeedback {
    Cold,
    Salty,
    SmallPortion,
    Bland,
    Delicious,
    Fresh,
}

impl QuickFeedback {
    pub const ALL: [QuickFeedback; 6] = [
        QuickFeedback::Cold,
        QuickFeedback::Salty,
        QuickFeedback::SmallPortion,
        QuickFeedback::Bland,
        QuickFeedback::Delicious,
        QuickFeedback::Fresh,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuickFeedback::Cold => "cold",
            QuickFeedback::Salty => "salty",
            QuickFeedback::SmallPortion => "small-portion",
            QuickFeedback::Bland => "bland",
            QuickFeedback::Delicious => "delicious",
            QuickFeedback::Fresh => "fresh",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            QuickFeedback::Cold => "Was cold",
            QuickFeedback::Salty => "Too salty",
            QuickFeedback::SmallPortion => "Small portion",
            QuickFeedback::Bland => "Needed seasoning",
            QuickFeedback::Delicious => "Delicious",
            QuickFeedback::Fresh => "Fresh",
        }
    }
}

impl fmt::Display for QuickFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for QuickFeedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        QuickFeedback::ALL
            .into_iter()
            .find(|q| q.key() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown quick feedback: '{}'. Valid tags are: cold, salty, small-portion, bland, delicious, fresh",
                    s
                )
            })
    }
}

/// A student's review of one menu item on one date. The item name is a
/// denormalized copy; reviews may outlive the menu entry they rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuReview {
    pub id: Uuid,
    pub menu_item_id: u32,
    pub menu_item_name: String,
    pub date: NaiveDate,
    pub student_id: Uuid,
    pub student_name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub quick_feedback: Vec<QuickFeedback>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub admin_response: Option<String>,
    #[serde(default)]
    pub admin_response_at: Option<DateTime<Utc>>,
}

/// Aggregate rating for one menu item, derived from stored reviews
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewSummary {
    pub menu_item_id: u32,
    pub average_rating: f32,
    pub review_count: usize,
}
