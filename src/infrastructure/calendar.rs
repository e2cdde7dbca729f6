//! Menu calendar
//!
//! Menus exist for a rolling window around today. Lookups consult
//! persisted admin overrides first and fall back to the deterministic
//! generator, so untouched days need no storage at all.

use crate::domain::catalog::generate_day_menu;
use crate::domain::menu::{Allergen, MenuItem};
use crate::error::{MensaError, Result};
use crate::infrastructure::store::DataStore;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

const OVERRIDES_FILE: &str = "menu_overrides.json";

/// Days of history kept before today
pub const PAST_DAYS: i64 = 129;
/// Days of future menus after today
pub const FUTURE_DAYS: i64 = 130;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DayOverride {
    date: NaiveDate,
    items: Vec<MenuItem>,
}

/// Field edits for one menu item; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub calories: Option<u32>,
    pub available: Option<bool>,
    pub allergens: Option<Vec<Allergen>>,
}

pub struct MenuCalendar {
    store: DataStore,
    overrides: Vec<DayOverride>,
}

impl MenuCalendar {
    pub fn load(store: &DataStore) -> Result<Self> {
        let overrides = store.load_list(OVERRIDES_FILE)?;
        Ok(MenuCalendar {
            store: store.clone(),
            overrides,
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.save_list(OVERRIDES_FILE, &self.overrides)
    }

    /// Is the date inside the generated window around `today`?
    pub fn window_contains(today: NaiveDate, date: NaiveDate) -> bool {
        date >= today - Duration::days(PAST_DAYS) && date <= today + Duration::days(FUTURE_DAYS)
    }

    fn override_for(&self, date: NaiveDate) -> Option<&DayOverride> {
        self.overrides.iter().find(|o| o.date == date)
    }

    /// The menu served on a date, if one exists
    pub fn menu_for(&self, today: NaiveDate, date: NaiveDate) -> Option<Vec<MenuItem>> {
        if let Some(day) = self.override_for(date) {
            return Some(day.items.clone());
        }
        if Self::window_contains(today, date) {
            return Some(generate_day_menu(date));
        }
        None
    }

    /// Like `menu_for`, but a missing menu is an error
    pub fn require_menu_for(&self, today: NaiveDate, date: NaiveDate) -> Result<Vec<MenuItem>> {
        self.menu_for(today, date).ok_or(MensaError::NoMenu(date))
    }

    /// All dates that have a menu, newest first
    pub fn dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = (-PAST_DAYS..=FUTURE_DAYS)
            .map(|offset| today + Duration::days(offset))
            .collect();

        for day in &self.overrides {
            if !Self::window_contains(today, day.date) {
                dates.push(day.date);
            }
        }

        dates.sort_unstable_by(|a, b| b.cmp(a));
        dates
    }

    /// Replace the whole menu for one date
    pub fn set_day(&mut self, date: NaiveDate, items: Vec<MenuItem>) -> Result<()> {
        match self.overrides.iter_mut().find(|o| o.date == date) {
            Some(day) => day.items = items,
            None => self.overrides.push(DayOverride { date, items }),
        }
        self.flush()
    }

    /// Apply a field patch to one item on one date. The whole day is
    /// persisted as an override afterwards.
    pub fn edit_item(
        &mut self,
        today: NaiveDate,
        date: NaiveDate,
        item_id: u32,
        patch: MenuItemPatch,
    ) -> Result<MenuItem> {
        let mut items = self.require_menu_for(today, date)?;

        let item = items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(MensaError::UnknownMenuItem { date, item_id })?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = description;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(calories) = patch.calories {
            item.calories = calories;
        }
        if let Some(available) = patch.available {
            item.available = available;
        }
        if let Some(allergens) = patch.allergens {
            item.allergens = allergens;
        }

        let updated = item.clone();
        self.set_day(date, items)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn calendar() -> (TempDir, MenuCalendar) {
        let temp = TempDir::new().unwrap();
        let store = DataStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        let calendar = MenuCalendar::load(&store).unwrap();
        (temp, calendar)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()
    }

    #[test]
    fn test_window_bounds() {
        let t = today();
        assert!(MenuCalendar::window_contains(t, t));
        assert!(MenuCalendar::window_contains(t, t - Duration::days(PAST_DAYS)));
        assert!(MenuCalendar::window_contains(t, t + Duration::days(FUTURE_DAYS)));
        assert!(!MenuCalendar::window_contains(t, t - Duration::days(PAST_DAYS + 1)));
        assert!(!MenuCalendar::window_contains(t, t + Duration::days(FUTURE_DAYS + 1)));
    }

    #[test]
    fn test_menu_inside_window_is_generated() {
        let (_temp, calendar) = calendar();
        let menu = calendar.menu_for(today(), today()).unwrap();
        assert_eq!(menu.len(), 6);
        assert_eq!(menu, generate_day_menu(today()));
    }

    #[test]
    fn test_menu_outside_window_is_none() {
        let (_temp, calendar) = calendar();
        let far = today() + Duration::days(FUTURE_DAYS + 1);
        assert!(calendar.menu_for(today(), far).is_none());
        assert!(matches!(
            calendar.require_menu_for(today(), far),
            Err(MensaError::NoMenu(_))
        ));
    }

    #[test]
    fn test_dates_cover_window_newest_first() {
        let (_temp, calendar) = calendar();
        let dates = calendar.dates(today());

        assert_eq!(dates.len(), (PAST_DAYS + FUTURE_DAYS + 1) as usize);
        assert_eq!(dates[0], today() + Duration::days(FUTURE_DAYS));
        assert_eq!(*dates.last().unwrap(), today() - Duration::days(PAST_DAYS));
    }

    #[test]
    fn test_edit_item_overrides_day() {
        let (_temp, mut calendar) = calendar();

        let patch = MenuItemPatch {
            name: Some("Celebration Pilaf".to_string()),
            available: Some(false),
            ..Default::default()
        };
        let updated = calendar.edit_item(today(), today(), 3, patch).unwrap();
        assert_eq!(updated.name, "Celebration Pilaf");
        assert!(!updated.available);

        let menu = calendar.menu_for(today(), today()).unwrap();
        assert_eq!(menu[2].name, "Celebration Pilaf");
        // Untouched fields keep their generated values
        assert_eq!(menu[2].category, generate_day_menu(today())[2].category);
    }

    #[test]
    fn test_edit_item_unknown_id() {
        let (_temp, mut calendar) = calendar();
        let result = calendar.edit_item(today(), today(), 9, MenuItemPatch::default());
        assert!(matches!(
            result,
            Err(MensaError::UnknownMenuItem { item_id: 9, .. })
        ));
    }

    #[test]
    fn test_edit_allergens() {
        let (_temp, mut calendar) = calendar();
        let patch = MenuItemPatch {
            allergens: Some(vec![Allergen::Soy, Allergen::Sesame]),
            ..Default::default()
        };
        let updated = calendar.edit_item(today(), today(), 1, patch).unwrap();
        assert_eq!(updated.allergens, vec![Allergen::Soy, Allergen::Sesame]);
    }

    #[test]
    fn test_overrides_persist_across_loads() {
        let (temp, mut calendar) = calendar();
        let patch = MenuItemPatch {
            price: Some(99.5),
            ..Default::default()
        };
        calendar.edit_item(today(), today(), 2, patch).unwrap();

        let store = DataStore::new(temp.path().to_path_buf());
        let reloaded = MenuCalendar::load(&store).unwrap();
        let menu = reloaded.menu_for(today(), today()).unwrap();
        assert_eq!(menu[1].price, 99.5);
    }

    #[test]
    fn test_override_outside_window_still_served() {
        let (_temp, mut calendar) = calendar();
        let far = today() + Duration::days(FUTURE_DAYS + 30);

        calendar.set_day(far, generate_day_menu(far)).unwrap();

        assert!(calendar.menu_for(today(), far).is_some());
        let dates = calendar.dates(today());
        assert_eq!(dates[0], far);
        assert_eq!(dates.len(), (PAST_DAYS + FUTURE_DAYS + 2) as usize);
    }

    #[test]
    fn test_set_day_replaces_existing_override() {
        let (_temp, mut calendar) = calendar();
        let mut items = generate_day_menu(today());

        items[0].name = "First".to_string();
        calendar.set_day(today(), items.clone()).unwrap();

        items[0].name = "Second".to_string();
        calendar.set_day(today(), items).unwrap();

        let menu = calendar.menu_for(today(), today()).unwrap();
        assert_eq!(menu[0].name, "Second");
    }
}
