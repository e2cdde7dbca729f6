//! Announcement and crowd status use cases

use crate::application::auth;
use crate::domain::announcement::{Announcement, CrowdLevel, CrowdStatus};
use crate::error::{MensaError, Result};
use crate::infrastructure::{AnnouncementRepository, DataStore, NewAnnouncement};
use chrono::Local;
use uuid::Uuid;

pub struct AnnouncementService {
    store: DataStore,
}

impl AnnouncementService {
    pub fn new(store: DataStore) -> Self {
        AnnouncementService { store }
    }

    /// Post an announcement; admin only
    pub fn post(&self, new: NewAnnouncement) -> Result<Announcement> {
        auth::require_admin(&self.store)?;

        if new.ends_on < new.starts_on {
            return Err(MensaError::Config(format!(
                "Announcement ends before it starts ({} > {})",
                new.starts_on.format("%d-%m-%Y"),
                new.ends_on.format("%d-%m-%Y")
            )));
        }
        if new.title.trim().is_empty() {
            return Err(MensaError::Config(
                "Announcement title must not be empty".to_string(),
            ));
        }

        let mut announcements = AnnouncementRepository::load(&self.store)?;
        announcements.post(new)
    }

    /// Remove an announcement; admin only
    pub fn remove(&self, id: Uuid) -> Result<()> {
        auth::require_admin(&self.store)?;
        let mut announcements = AnnouncementRepository::load(&self.store)?;
        announcements.remove(id)
    }

    /// List announcements: the currently visible ones, or everything
    pub fn list(&self, all: bool) -> Result<Vec<Announcement>> {
        let mut announcements = AnnouncementRepository::load(&self.store)?;

        if all {
            return Ok(announcements.all().to_vec());
        }
        announcements.visible_on(Local::now().date_naive())
    }

    pub fn crowd_status(&self) -> Result<CrowdStatus> {
        let announcements = AnnouncementRepository::load(&self.store)?;
        announcements.crowd_status()
    }

    /// Update the crowd status; admin only
    pub fn set_crowd_status(&self, level: CrowdLevel, message: &str) -> Result<CrowdStatus> {
        auth::require_admin(&self.store)?;
        let announcements = AnnouncementRepository::load(&self.store)?;
        announcements.set_crowd_status(level, message)
    }
}
