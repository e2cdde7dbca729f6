//! Dish catalog and deterministic day-menu generation
//!
//! Each calendar day serves one dish per category, picked from a fixed
//! rotation pool by `(day_of_month + category_index) % pool_len`. Calories,
//! price, rating and availability are derived from a keyed hash of the date,
//! so the same date always produces the same menu across runs.

use crate::domain::menu::{Allergen, MenuCategory, MenuItem};
use chrono::{Datelike, NaiveDate};

struct Dish {
    name: &'static str,
    allergens: &'static [Allergen],
}

const NONE: &[Allergen] = &[];

const SOUPS: &[Dish] = &[
    Dish { name: "Lentil Soup", allergens: NONE },
    Dish { name: "Chicken Broth", allergens: NONE },
    Dish { name: "Ezogelin Soup", allergens: &[Allergen::Gluten] },
    Dish { name: "Highland Yogurt Soup", allergens: &[Allergen::Eggs] },
    Dish { name: "Tomato Soup", allergens: NONE },
    Dish { name: "Tarhana Soup", allergens: &[Allergen::Gluten] },
    Dish { name: "Trotter Soup", allergens: NONE },
    Dish { name: "Tripe Soup", allergens: NONE },
    Dish { name: "Mushroom Soup", allergens: NONE },
    Dish { name: "Vegetable Soup", allergens: NONE },
];

const MAIN_COURSES: &[Dish] = &[
    Dish { name: "Chicken Schnitzel", allergens: &[Allergen::Gluten, Allergen::Eggs] },
    Dish { name: "Grilled Meatballs", allergens: &[Allergen::Gluten, Allergen::Eggs] },
    Dish { name: "Pasta Bolognese", allergens: &[Allergen::Gluten, Allergen::Eggs] },
    Dish { name: "Chicken Doner", allergens: &[Allergen::Gluten] },
    Dish { name: "Grilled Chicken", allergens: NONE },
    Dish { name: "Manti Dumplings", allergens: &[Allergen::Gluten, Allergen::Eggs, Allergen::Dairy] },
    Dish { name: "Stuffed Eggplant", allergens: NONE },
    Dish { name: "Imam Bayildi", allergens: NONE },
    Dish { name: "White Bean Stew", allergens: NONE },
    Dish { name: "Chickpea Stew", allergens: NONE },
    Dish { name: "Eggplant Moussaka", allergens: NONE },
    Dish { name: "Chicken with Vegetables", allergens: NONE },
    Dish { name: "Baked Fish", allergens: &[Allergen::Seafood] },
    Dish { name: "Curry Chicken", allergens: NONE },
    Dish { name: "Clay-Pot Stew", allergens: NONE },
];

const SIDE_DISHES: &[Dish] = &[
    Dish { name: "Rice Pilaf", allergens: NONE },
    Dish { name: "French Fries", allergens: NONE },
    Dish { name: "Bulgur Pilaf", allergens: &[Allergen::Gluten] },
    Dish { name: "Buttered Pasta", allergens: &[Allergen::Gluten, Allergen::Eggs] },
    Dish { name: "Oven Potatoes", allergens: NONE },
    Dish { name: "Mashed Potatoes", allergens: &[Allergen::Dairy] },
    Dish { name: "Steamed Vegetables", allergens: NONE },
    Dish { name: "Pasta with Tomato Sauce", allergens: &[Allergen::Gluten] },
];

const SALADS: &[Dish] = &[
    Dish { name: "Seasonal Salad", allergens: NONE },
    Dish { name: "Shepherd's Salad", allergens: NONE },
    Dish { name: "Green Salad", allergens: NONE },
    Dish { name: "Russian Salad", allergens: &[Allergen::Eggs] },
    Dish { name: "Mediterranean Salad", allergens: NONE },
    Dish { name: "Tuna Salad", allergens: &[Allergen::Seafood] },
    Dish { name: "Red Cabbage Salad", allergens: NONE },
];

const DESSERTS: &[Dish] = &[
    Dish { name: "Rice Pudding", allergens: &[Allergen::Dairy] },
    Dish { name: "Kazandibi", allergens: &[Allergen::Dairy, Allergen::Eggs] },
    Dish { name: "Ashure", allergens: &[Allergen::Nuts] },
    Dish { name: "Milk Pudding", allergens: &[Allergen::Dairy] },
    Dish { name: "Revani", allergens: &[Allergen::Gluten, Allergen::Eggs, Allergen::Dairy] },
    Dish { name: "Sekerpare", allergens: &[Allergen::Gluten, Allergen::Eggs] },
    Dish { name: "Tulumba", allergens: &[Allergen::Gluten] },
    Dish { name: "Baklava", allergens: &[Allergen::Gluten, Allergen::Nuts] },
    Dish { name: "Kunefe", allergens: &[Allergen::Gluten, Allergen::Dairy] },
    Dish { name: "Keskul", allergens: &[Allergen::Dairy, Allergen::Nuts] },
    Dish { name: "Fresh Fruit", allergens: NONE },
];

const BEVERAGES: &[Dish] = &[
    Dish { name: "Ayran", allergens: &[Allergen::Dairy] },
    Dish { name: "Cola", allergens: NONE },
    Dish { name: "Mineral Water", allergens: NONE },
    Dish { name: "Fruit Juice", allergens: NONE },
    Dish { name: "Tea", allergens: NONE },
    Dish { name: "Coffee", allergens: NONE },
    Dish { name: "Lemonade", allergens: NONE },
];

fn dish_pool(category: MenuCategory) -> &'static [Dish] {
    match category {
        MenuCategory::Soup => SOUPS,
        MenuCategory::MainCourse => MAIN_COURSES,
        MenuCategory::SideDish => SIDE_DISHES,
        MenuCategory::Salad => SALADS,
        MenuCategory::Dessert => DESSERTS,
        MenuCategory::Beverage => BEVERAGES,
    }
}

/// Keyed hash of (date, category, field), the seed for all cosmetic fields.
fn field_seed(date: NaiveDate, category: MenuCategory, field: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(date.format("%Y-%m-%d").to_string().as_bytes());
    hasher.update(category.key().as_bytes());
    hasher.update(field.as_bytes());
    let digest = hasher.finalize();
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(buf)
}

/// Map a seed into an inclusive integer range
fn in_range(seed: u64, lo: u32, hi: u32) -> u32 {
    lo + (seed % (hi - lo + 1) as u64) as u32
}

/// Map a seed into an inclusive price range, two decimal places
fn price_in_range(seed: u64, lo: u32, hi: u32) -> f64 {
    let cents = in_range(seed, lo * 100, hi * 100);
    f64::from(cents) / 100.0
}

fn calories_for(date: NaiveDate, category: MenuCategory) -> u32 {
    let seed = field_seed(date, category, "calories");
    match category {
        MenuCategory::Soup => in_range(seed, 150, 200),
        MenuCategory::MainCourse => in_range(seed, 400, 600),
        MenuCategory::SideDish => in_range(seed, 200, 350),
        MenuCategory::Salad => in_range(seed, 50, 120),
        MenuCategory::Dessert => in_range(seed, 180, 280),
        MenuCategory::Beverage => in_range(seed, 50, 150),
    }
}

fn price_for(date: NaiveDate, category: MenuCategory) -> f64 {
    let seed = field_seed(date, category, "price");
    match category {
        MenuCategory::Soup => 15.0,
        MenuCategory::MainCourse => price_in_range(seed, 55, 75),
        MenuCategory::SideDish => price_in_range(seed, 20, 30),
        MenuCategory::Salad => 30.0,
        MenuCategory::Dessert => 35.0,
        MenuCategory::Beverage => price_in_range(seed, 10, 20),
    }
}

fn rating_for(date: NaiveDate, category: MenuCategory) -> f32 {
    let seed = field_seed(date, category, "rating");
    // 3.5 to 5.0 in tenths
    3.5 + (seed % 16) as f32 / 10.0
}

fn available_for(date: NaiveDate, category: MenuCategory) -> bool {
    field_seed(date, category, "available") % 100 > 20
}

/// Generate the menu served on the given date: one item per category,
/// ids assigned 1.. in serving order.
pub fn generate_day_menu(date: NaiveDate) -> Vec<MenuItem> {
    let day_of_month = date.day() as usize;

    MenuCategory::ALL
        .iter()
        .enumerate()
        .map(|(category_index, &category)| {
            let pool = dish_pool(category);
            let dish = &pool[(day_of_month + category_index) % pool.len()];

            MenuItem {
                id: (category_index + 1) as u32,
                name: dish.name.to_string(),
                category,
                calories: calories_for(date, category),
                price: price_for(date, category),
                description: format!("Daily special: {}", dish.name),
                available: available_for(date, category),
                rating: rating_for(date, category),
                allergens: dish.allergens.to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_item_per_category() {
        let menu = generate_day_menu(date(2026, 3, 3));
        assert_eq!(menu.len(), 6);
        for (i, item) in menu.iter().enumerate() {
            assert_eq!(item.id, (i + 1) as u32);
            assert_eq!(item.category, MenuCategory::ALL[i]);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_day_menu(date(2026, 3, 3));
        let b = generate_day_menu(date(2026, 3, 3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_follows_day_of_month() {
        // day 3: soup index (3 + 0) % 10 = 3, dessert index (3 + 4) % 11 = 7
        let menu = generate_day_menu(date(2026, 3, 3));
        assert_eq!(menu[0].name, "Highland Yogurt Soup");
        assert_eq!(menu[4].name, "Baklava");
        assert_eq!(
            menu[4].allergens,
            vec![Allergen::Gluten, Allergen::Nuts]
        );
    }

    #[test]
    fn test_same_day_of_month_serves_same_dishes() {
        let march = generate_day_menu(date(2026, 3, 15));
        let april = generate_day_menu(date(2026, 4, 15));
        for (a, b) in march.iter().zip(april.iter()) {
            assert_eq!(a.name, b.name);
        }
    }

    #[test]
    fn test_different_dates_vary_cosmetics() {
        // Same dishes on the 15th of two months, but date-keyed fields differ
        let march = generate_day_menu(date(2026, 3, 15));
        let april = generate_day_menu(date(2026, 4, 15));
        assert_ne!(march, april);
    }

    #[test]
    fn test_calorie_ranges() {
        for day in 1..=28 {
            let menu = generate_day_menu(date(2026, 2, day));
            assert!((150..=200).contains(&menu[0].calories), "soup calories");
            assert!((400..=600).contains(&menu[1].calories), "main calories");
            assert!((200..=350).contains(&menu[2].calories), "side calories");
            assert!((50..=120).contains(&menu[3].calories), "salad calories");
            assert!((180..=280).contains(&menu[4].calories), "dessert calories");
            assert!((50..=150).contains(&menu[5].calories), "beverage calories");
        }
    }

    #[test]
    fn test_price_ranges() {
        for day in 1..=28 {
            let menu = generate_day_menu(date(2026, 2, day));
            assert_eq!(menu[0].price, 15.0);
            assert!((55.0..=75.0).contains(&menu[1].price));
            assert!((20.0..=30.0).contains(&menu[2].price));
            assert_eq!(menu[3].price, 30.0);
            assert_eq!(menu[4].price, 35.0);
            assert!((10.0..=20.0).contains(&menu[5].price));
        }
    }

    #[test]
    fn test_rating_range() {
        for day in 1..=28 {
            for item in generate_day_menu(date(2026, 2, day)) {
                assert!((3.5..=5.0).contains(&item.rating));
            }
        }
    }

    #[test]
    fn test_description_names_dish() {
        let menu = generate_day_menu(date(2026, 3, 3));
        assert_eq!(menu[4].description, "Daily special: Baklava");
    }
}
