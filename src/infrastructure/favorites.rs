//! Favorites repository
//!
//! Favorites store a denormalized copy of the item name; menu edits do
//! not update it.

use crate::error::Result;
use crate::infrastructure::store::DataStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const FAVORITES_FILE: &str = "favorites.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub user_id: Uuid,
    pub menu_item_id: u32,
    pub menu_item_name: String,
    pub saved_at: DateTime<Utc>,
}

pub struct FavoritesRepository {
    store: DataStore,
    favorites: Vec<FavoriteItem>,
}

impl FavoritesRepository {
    pub fn load(store: &DataStore) -> Result<Self> {
        let favorites = store.load_list(FAVORITES_FILE)?;
        Ok(FavoritesRepository {
            store: store.clone(),
            favorites,
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.save_list(FAVORITES_FILE, &self.favorites)
    }

    pub fn is_favorite(&self, user_id: Uuid, menu_item_id: u32) -> bool {
        self.favorites
            .iter()
            .any(|f| f.user_id == user_id && f.menu_item_id == menu_item_id)
    }

    /// Add a favorite; adding an existing favorite is a no-op
    pub fn add(&mut self, user_id: Uuid, menu_item_id: u32, menu_item_name: &str) -> Result<()> {
        if self.is_favorite(user_id, menu_item_id) {
            return Ok(());
        }

        self.favorites.push(FavoriteItem {
            user_id,
            menu_item_id,
            menu_item_name: menu_item_name.to_string(),
            saved_at: Utc::now(),
        });
        self.flush()
    }

    /// Remove a favorite; returns whether anything was removed
    pub fn remove(&mut self, user_id: Uuid, menu_item_id: u32) -> Result<bool> {
        let before = self.favorites.len();
        self.favorites
            .retain(|f| !(f.user_id == user_id && f.menu_item_id == menu_item_id));

        if self.favorites.len() == before {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Flip the favorite state; returns true when the item is now a favorite
    pub fn toggle(&mut self, user_id: Uuid, menu_item_id: u32, menu_item_name: &str) -> Result<bool> {
        if self.is_favorite(user_id, menu_item_id) {
            self.remove(user_id, menu_item_id)?;
            Ok(false)
        } else {
            self.add(user_id, menu_item_id, menu_item_name)?;
            Ok(true)
        }
    }

    pub fn for_user(&self, user_id: Uuid) -> Vec<&FavoriteItem> {
        self.favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .collect()
    }
}
