//! Review use cases

use crate::application::auth;
use crate::domain::review::{MenuReview, QuickFeedback};
use crate::error::{MensaError, Result};
use crate::infrastructure::{DataStore, MenuCalendar, NewReview, ReviewRepository};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub struct ReviewService {
    store: DataStore,
}

impl ReviewService {
    pub fn new(store: DataStore) -> Self {
        ReviewService { store }
    }

    /// Record a review of one item on one date. The item must exist on
    /// that date's menu; its name is copied onto the review.
    pub fn add(
        &self,
        date: NaiveDate,
        menu_item_id: u32,
        rating: u8,
        comment: String,
        quick_feedback: Vec<QuickFeedback>,
    ) -> Result<MenuReview> {
        let user = auth::require_user(&self.store)?;

        let calendar = MenuCalendar::load(&self.store)?;
        let today = Local::now().date_naive();
        let items = calendar.require_menu_for(today, date)?;
        let item = items
            .iter()
            .find(|i| i.id == menu_item_id)
            .ok_or(MensaError::UnknownMenuItem {
                date,
                item_id: menu_item_id,
            })?;

        let mut reviews = ReviewRepository::load(&self.store)?;
        reviews.add(
            &user,
            NewReview {
                menu_item_id,
                menu_item_name: item.name.clone(),
                date,
                rating,
                comment,
                quick_feedback,
            },
        )
    }

    /// List reviews, optionally narrowed to an item and/or a date
    pub fn list(&self, item: Option<u32>, date: Option<NaiveDate>) -> Result<Vec<MenuReview>> {
        let reviews = ReviewRepository::load(&self.store)?;

        Ok(reviews
            .all()
            .iter()
            .filter(|r| item.is_none_or(|id| r.menu_item_id == id))
            .filter(|r| date.is_none_or(|d| r.date == d))
            .cloned()
            .collect())
    }

    /// Attach an admin response; admin only
    pub fn respond(&self, review_id: Uuid, response: &str) -> Result<MenuReview> {
        auth::require_admin(&self.store)?;
        let mut reviews = ReviewRepository::load(&self.store)?;
        reviews.respond(review_id, response)
    }

    /// Delete a review; admin only
    pub fn delete(&self, review_id: Uuid) -> Result<()> {
        auth::require_admin(&self.store)?;
        let mut reviews = ReviewRepository::load(&self.store)?;
        reviews.delete(review_id)
    }
}
