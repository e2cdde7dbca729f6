//! Menu browsing and admin menu editing use cases

use crate::application::auth;
use crate::domain::menu::{MenuCategory, MenuItem};
use crate::domain::review::ReviewSummary;
use crate::error::Result;
use crate::infrastructure::{
    DataStore, FavoritesRepository, MenuCalendar, MenuItemPatch, ReviewRepository,
};
use chrono::{Local, NaiveDate};

/// One menu item enriched with everything the listing shows
#[derive(Debug, Clone)]
pub struct ItemView {
    pub item: MenuItem,
    /// Favorite of the logged-in user
    pub favorite: bool,
    /// Contains an allergen from the logged-in user's profile
    pub conflicting: bool,
    pub summary: ReviewSummary,
}

/// The menu of one date, ready for display
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub items: Vec<ItemView>,
}

pub struct MenuService {
    store: DataStore,
}

impl MenuService {
    pub fn new(store: DataStore) -> Self {
        MenuService { store }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Build the menu view for a date, optionally restricted to one
    /// category and/or to items safe for the user's allergen profile.
    pub fn day_view(
        &self,
        date: NaiveDate,
        category: Option<MenuCategory>,
        safe_only: bool,
    ) -> Result<DayView> {
        let calendar = MenuCalendar::load(&self.store)?;
        let mut items = calendar.require_menu_for(Self::today(), date)?;

        if let Some(category) = category {
            items.retain(|i| i.category == category);
        }

        let user = auth::current_user(&self.store)?;
        let profile = user.as_ref().map(|u| u.allergens.as_slice()).unwrap_or(&[]);

        let favorites = FavoritesRepository::load(&self.store)?;
        let reviews = ReviewRepository::load(&self.store)?;

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            let conflicting = item.conflicts_with(profile);
            if safe_only && conflicting {
                continue;
            }
            let favorite = user
                .as_ref()
                .is_some_and(|u| favorites.is_favorite(u.id, item.id));
            let summary = reviews.summary_for(item.id, date);

            views.push(ItemView {
                item,
                favorite,
                conflicting,
                summary,
            });
        }

        Ok(DayView { date, items: views })
    }

    /// Dates that have a menu, newest first
    pub fn dates(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<NaiveDate>> {
        let calendar = MenuCalendar::load(&self.store)?;
        let mut dates = calendar.dates(Self::today());

        if let Some(from) = from {
            dates.retain(|d| *d >= from);
        }
        if let Some(to) = to {
            dates.retain(|d| *d <= to);
        }
        if let Some(limit) = limit {
            dates.truncate(limit);
        }

        Ok(dates)
    }

    /// Edit one item on one date; admin only
    pub fn edit_item(
        &self,
        date: NaiveDate,
        item_id: u32,
        patch: MenuItemPatch,
    ) -> Result<MenuItem> {
        auth::require_admin(&self.store)?;

        let mut calendar = MenuCalendar::load(&self.store)?;
        calendar.edit_item(Self::today(), date, item_id, patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::auth::AuthService;
    use crate::application::init;
    use crate::domain::menu::Allergen;
    use crate::error::MensaError;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, DataStore) {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let store = DataStore::new(temp.path().to_path_buf());
        (temp, store)
    }

    #[test]
    fn test_day_view_has_all_categories() {
        let (_temp, store) = fixture();
        let service = MenuService::new(store);

        let view = service
            .day_view(Local::now().date_naive(), None, false)
            .unwrap();
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.items[0].item.category, MenuCategory::Soup);
        assert!(!view.items[0].favorite);
        assert_eq!(view.items[0].summary.review_count, 0);
    }

    #[test]
    fn test_day_view_category_filter() {
        let (_temp, store) = fixture();
        let service = MenuService::new(store);

        let view = service
            .day_view(
                Local::now().date_naive(),
                Some(MenuCategory::Dessert),
                false,
            )
            .unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].item.category, MenuCategory::Dessert);
    }

    #[test]
    fn test_day_view_marks_conflicts_for_profile() {
        let (temp, store) = fixture();
        let auth = AuthService::new(DataStore::new(temp.path().to_path_buf()));
        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();
        auth.set_allergens(Allergen::ALL.to_vec()).unwrap();

        let service = MenuService::new(store);
        let today = Local::now().date_naive();

        let view = service.day_view(today, None, false).unwrap();
        let conflicting = view.items.iter().filter(|i| i.conflicting).count();

        // Every item that lists any allergen must be marked
        let listed = view
            .items
            .iter()
            .filter(|i| !i.item.allergens.is_empty())
            .count();
        assert_eq!(conflicting, listed);

        // And safe-only must hide exactly those
        let safe = service.day_view(today, None, true).unwrap();
        assert_eq!(safe.items.len(), 6 - conflicting);
        assert!(safe.items.iter().all(|i| !i.conflicting));
    }

    #[test]
    fn test_dates_limit_and_range() {
        let (_temp, store) = fixture();
        let service = MenuService::new(store);

        let dates = service.dates(None, None, Some(5)).unwrap();
        assert_eq!(dates.len(), 5);

        let today = Local::now().date_naive();
        let dates = service.dates(Some(today), Some(today), None).unwrap();
        assert_eq!(dates, vec![today]);
    }

    #[test]
    fn test_edit_item_requires_admin() {
        let (temp, store) = fixture();
        let service = MenuService::new(store);
        let today = Local::now().date_naive();

        let result = service.edit_item(today, 1, MenuItemPatch::default());
        assert!(matches!(result, Err(MensaError::NotLoggedIn)));

        let auth = AuthService::new(DataStore::new(temp.path().to_path_buf()));
        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();
        let result = service.edit_item(today, 1, MenuItemPatch::default());
        assert!(matches!(result, Err(MensaError::AdminOnly)));
    }

    #[test]
    fn test_edit_item_as_admin() {
        let (temp, store) = fixture();
        let auth = AuthService::new(DataStore::new(temp.path().to_path_buf()));
        auth.login(init::DEMO_ADMIN_EMAIL, "admin123").unwrap();

        let service = MenuService::new(store);
        let today = Local::now().date_naive();
        let patch = MenuItemPatch {
            available: Some(false),
            ..Default::default()
        };

        let updated = service.edit_item(today, 1, patch).unwrap();
        assert!(!updated.available);

        let view = service.day_view(today, None, false).unwrap();
        assert!(!view.items[0].item.available);
    }
}
