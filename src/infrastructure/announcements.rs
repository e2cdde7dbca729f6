//! Announcement repository and crowd status record

use crate::domain::announcement::{Announcement, AnnouncementKind, CrowdLevel, CrowdStatus};
use crate::error::{MensaError, Result};
use crate::infrastructure::store::DataStore;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

const ANNOUNCEMENTS_FILE: &str = "announcements.json";
const CROWD_FILE: &str = "crowd_status.json";

/// Input for a new announcement
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub kind: AnnouncementKind,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub important: bool,
}

pub struct AnnouncementRepository {
    store: DataStore,
    announcements: Vec<Announcement>,
}

impl AnnouncementRepository {
    pub fn load(store: &DataStore) -> Result<Self> {
        let announcements = store.load_list(ANNOUNCEMENTS_FILE)?;
        Ok(AnnouncementRepository {
            store: store.clone(),
            announcements,
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.save_list(ANNOUNCEMENTS_FILE, &self.announcements)
    }

    /// Post an announcement; newest entries go first
    pub fn post(&mut self, new: NewAnnouncement) -> Result<Announcement> {
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: new.title,
            message: new.message,
            kind: new.kind,
            starts_on: new.starts_on,
            ends_on: new.ends_on,
            important: new.important,
            active: true,
            created_at: Utc::now(),
        };

        self.announcements.insert(0, announcement.clone());
        self.flush()?;
        Ok(announcement)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<()> {
        let before = self.announcements.len();
        self.announcements.retain(|a| a.id != id);

        if self.announcements.len() == before {
            return Err(MensaError::AnnouncementNotFound(id));
        }
        self.flush()
    }

    pub fn all(&self) -> &[Announcement] {
        &self.announcements
    }

    /// Announcements visible on the given date. An empty table is seeded
    /// with the stock notices first, as the original app does on first
    /// read.
    pub fn visible_on(&mut self, today: NaiveDate) -> Result<Vec<Announcement>> {
        if self.announcements.is_empty() {
            self.seed_samples(today)?;
        }

        Ok(self
            .announcements
            .iter()
            .filter(|a| a.is_visible_on(today))
            .cloned()
            .collect())
    }

    fn seed_samples(&mut self, today: NaiveDate) -> Result<()> {
        let samples = [
            NewAnnouncement {
                title: "Weekend Closure".to_string(),
                message: "The cafeteria will be closed this weekend for maintenance work. \
                          We reopen on Monday at the usual service hours."
                    .to_string(),
                kind: AnnouncementKind::Closure,
                starts_on: today,
                ends_on: today + Duration::days(2),
                important: true,
            },
            NewAnnouncement {
                title: "New Menu Items".to_string(),
                message: "We have expanded our vegan and vegetarian options this week. \
                          Try the new dishes in the main course section!"
                    .to_string(),
                kind: AnnouncementKind::General,
                starts_on: today,
                ends_on: today + Duration::days(7),
                important: false,
            },
            NewAnnouncement {
                title: "Holiday Break".to_string(),
                message: format!(
                    "The cafeteria will be closed for the holiday from {} to {}.",
                    (today + Duration::days(10)).format("%d %B"),
                    (today + Duration::days(13)).format("%d %B")
                ),
                kind: AnnouncementKind::Holiday,
                starts_on: today + Duration::days(10),
                ends_on: today + Duration::days(13),
                important: true,
            },
            NewAnnouncement {
                title: "Busy Lunch Hours".to_string(),
                message: "The cafeteria is busiest between 12:00 and 13:00. \
                          Come at 11:30 or 13:30 to avoid the queues."
                    .to_string(),
                kind: AnnouncementKind::General,
                starts_on: today,
                ends_on: today + Duration::days(30),
                important: false,
            },
        ];

        for sample in samples {
            let announcement = Announcement {
                id: Uuid::new_v4(),
                title: sample.title,
                message: sample.message,
                kind: sample.kind,
                starts_on: sample.starts_on,
                ends_on: sample.ends_on,
                important: sample.important,
                active: true,
                created_at: Utc::now(),
            };
            self.announcements.push(announcement);
        }
        self.flush()
    }

    /// Current crowd status; defaults to normal capacity
    pub fn crowd_status(&self) -> Result<CrowdStatus> {
        Ok(self
            .store
            .load_record(CROWD_FILE)?
            .unwrap_or_else(CrowdStatus::normal))
    }

    pub fn set_crowd_status(&self, level: CrowdLevel, message: &str) -> Result<CrowdStatus> {
        let status = CrowdStatus {
            level,
            message: message.to_string(),
            updated_at: Utc::now(),
        };
        self.store.save_record(CROWD_FILE, &status)?;
        Ok(status)
    }
}
