//! Review repository

use crate::domain::account::Account;
use crate::domain::review::{MenuReview, QuickFeedback, ReviewSummary};
use crate::error::{MensaError, Result};
use crate::infrastructure::store::DataStore;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

const REVIEWS_FILE: &str = "reviews.json";

/// Input for a new review
#[derive(Debug, Clone)]
pub struct NewReview {
    pub menu_item_id: u32,
    pub menu_item_name: String,
    pub date: NaiveDate,
    pub rating: u8,
    pub comment: String,
    pub quick_feedback: Vec<QuickFeedback>,
}

pub struct ReviewRepository {
    store: DataStore,
    reviews: Vec<MenuReview>,
}

impl ReviewRepository {
    pub fn load(store: &DataStore) -> Result<Self> {
        let reviews = store.load_list(REVIEWS_FILE)?;
        Ok(ReviewRepository {
            store: store.clone(),
            reviews,
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.save_list(REVIEWS_FILE, &self.reviews)
    }

    /// Record a review; the rating must be 1 to 5
    pub fn add(&mut self, reviewer: &Account, new: NewReview) -> Result<MenuReview> {
        if !(1..=5).contains(&new.rating) {
            return Err(MensaError::InvalidRating(new.rating));
        }

        let review = MenuReview {
            id: Uuid::new_v4(),
            menu_item_id: new.menu_item_id,
            menu_item_name: new.menu_item_name,
            date: new.date,
            student_id: reviewer.id,
            student_name: reviewer.name.clone(),
            rating: new.rating,
            comment: new.comment,
            quick_feedback: new.quick_feedback,
            created_at: Utc::now(),
            admin_response: None,
            admin_response_at: None,
        };

        self.reviews.push(review.clone());
        self.flush()?;
        Ok(review)
    }

    pub fn all(&self) -> &[MenuReview] {
        &self.reviews
    }

    pub fn for_item(&self, menu_item_id: u32) -> Vec<&MenuReview> {
        self.reviews
            .iter()
            .filter(|r| r.menu_item_id == menu_item_id)
            .collect()
    }

    pub fn for_date(&self, date: NaiveDate) -> Vec<&MenuReview> {
        self.reviews.iter().filter(|r| r.date == date).collect()
    }

    pub fn for_item_on(&self, menu_item_id: u32, date: NaiveDate) -> Vec<&MenuReview> {
        self.reviews
            .iter()
            .filter(|r| r.menu_item_id == menu_item_id && r.date == date)
            .collect()
    }

    /// Average rating and count for one item on one date
    pub fn summary_for(&self, menu_item_id: u32, date: NaiveDate) -> ReviewSummary {
        let ratings: Vec<u8> = self
            .for_item_on(menu_item_id, date)
            .iter()
            .map(|r| r.rating)
            .collect();

        let average_rating = if ratings.is_empty() {
            0.0
        } else {
            ratings.iter().map(|&r| f32::from(r)).sum::<f32>() / ratings.len() as f32
        };

        ReviewSummary {
            menu_item_id,
            average_rating,
            review_count: ratings.len(),
        }
    }

    /// Attach an admin response to a review
    pub fn respond(&mut self, review_id: Uuid, response: &str) -> Result<MenuReview> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or(MensaError::ReviewNotFound(review_id))?;

        review.admin_response = Some(response.to_string());
        review.admin_response_at = Some(Utc::now());
        let updated = review.clone();
        self.flush()?;
        Ok(updated)
    }

    pub fn delete(&mut self, review_id: Uuid) -> Result<()> {
        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != review_id);

        if self.reviews.len() == before {
            return Err(MensaError::ReviewNotFound(review_id));
        }
        self.flush()
    }
}
