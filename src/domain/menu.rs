//! Menu entities: categories, allergens, items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dietary-restriction tag attached to a menu item, used for
/// filtering the menu against a student's allergen profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Allergen {
    Gluten,
    Dairy,
    Eggs,
    Nuts,
    Seafood,
    Soy,
    Sesame,
}

impl Allergen {
    pub const ALL: [Allergen; 7] = [
        Allergen::Gluten,
        Allergen::Dairy,
        Allergen::Eggs,
        Allergen::Nuts,
        Allergen::Seafood,
        Allergen::Soy,
        Allergen::Sesame,
    ];

    /// Lowercase key used in serialized data and CLI arguments
    pub fn key(&self) -> &'static str {
        match self {
            Allergen::Gluten => "gluten",
            Allergen::Dairy => "dairy",
            Allergen::Eggs => "eggs",
            Allergen::Nuts => "nuts",
            Allergen::Seafood => "seafood",
            Allergen::Soy => "soy",
            Allergen::Sesame => "sesame",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Allergen::Gluten => "Gluten",
            Allergen::Dairy => "Dairy",
            Allergen::Eggs => "Eggs",
            Allergen::Nuts => "Nuts",
            Allergen::Seafood => "Seafood",
            Allergen::Soy => "Soy",
            Allergen::Sesame => "Sesame",
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Allergen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Allergen::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown allergen: '{}'. Valid allergens are: gluten, dairy, eggs, nuts, seafood, soy, sesame",
                    s
                )
            })
    }
}

/// Parse a comma-separated allergen list (e.g. "gluten,dairy")
pub fn parse_allergen_list(input: &str) -> Result<Vec<Allergen>, String> {
    let mut allergens = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let allergen = part.parse::<Allergen>()?;
        if !allergens.contains(&allergen) {
            allergens.push(allergen);
        }
    }
    Ok(allergens)
}

/// Menu sections, one item is served per category per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Soup,
    MainCourse,
    SideDish,
    Salad,
    Dessert,
    Beverage,
}

impl MenuCategory {
    /// Categories in serving order; generated day menus follow this order.
    pub const ALL: [MenuCategory; 6] = [
        MenuCategory::Soup,
        MenuCategory::MainCourse,
        MenuCategory::SideDish,
        MenuCategory::Salad,
        MenuCategory::Dessert,
        MenuCategory::Beverage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MenuCategory::Soup => "soup",
            MenuCategory::MainCourse => "main-course",
            MenuCategory::SideDish => "side-dish",
            MenuCategory::Salad => "salad",
            MenuCategory::Dessert => "dessert",
            MenuCategory::Beverage => "beverage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuCategory::Soup => "Soups",
            MenuCategory::MainCourse => "Main Courses",
            MenuCategory::SideDish => "Side Dishes",
            MenuCategory::Salad => "Salads",
            MenuCategory::Dessert => "Desserts",
            MenuCategory::Beverage => "Beverages",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for MenuCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        MenuCategory::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| {
                format!(
                    "Unknown category: '{}'. Valid categories are: soup, main-course, side-dish, salad, dessert, beverage",
                    s
                )
            })
    }
}

/// A single dish on a day's menu. Ids are 1-based and scoped to the day;
/// reviews and favorites reference items by this id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub category: MenuCategory,
    pub calories: u32,
    pub price: f64,
    pub description: String,
    pub available: bool,
    pub rating: f32,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
}

impl MenuItem {
    /// Does this item contain any allergen from the given profile set?
    pub fn conflicts_with(&self, profile: &[Allergen]) -> bool {
        self.allergens.iter().any(|a| profile.contains(a))
    }
}
