//! Favorites use cases

use crate::application::auth;
use crate::error::{MensaError, Result};
use crate::infrastructure::{DataStore, FavoriteItem, FavoritesRepository, MenuCalendar};
use chrono::{Local, NaiveDate};

pub struct FavoritesService {
    store: DataStore,
}

impl FavoritesService {
    pub fn new(store: DataStore) -> Self {
        FavoritesService { store }
    }

    /// Flip the favorite state of an item on a date's menu; returns the
    /// item name and whether it is now a favorite.
    pub fn toggle(&self, date: NaiveDate, menu_item_id: u32) -> Result<(String, bool)> {
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

        let mut favorites = FavoritesRepository::load(&self.store)?;
        let now_favorite = favorites.toggle(user.id, menu_item_id, &item.name)?;
        Ok((item.name.clone(), now_favorite))
    }

    /// Remove a favorite by item id; returns whether anything was removed
    pub fn remove(&self, menu_item_id: u32) -> Result<bool> {
        let user = auth::require_user(&self.store)?;
        let mut favorites = FavoritesRepository::load(&self.store)?;
        favorites.remove(user.id, menu_item_id)
    }

    /// The logged-in user's favorites
    pub fn list(&self) -> Result<Vec<FavoriteItem>> {
        let user = auth::require_user(&self.store)?;
        let favorites = FavoritesRepository::load(&self.store)?;
        Ok(favorites.for_user(user.id).into_iter().cloned().collect())
    }
}
