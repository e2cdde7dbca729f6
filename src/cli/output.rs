//! Output formatting utilities

use crate::application::menu::DayView;
use crate::domain::account::Account;
use crate::domain::announcement::{Announcement, CrowdStatus};
use crate::domain::menu::Allergen;
use crate::domain::review::MenuReview;
use crate::infrastructure::{Config, FavoriteItem};
use chrono::NaiveDate;

fn allergen_names(allergens: &[Allergen]) -> String {
    allergens
        .iter()
        .map(|a| a.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a day's menu for display
pub fn format_day_view(view: &DayView, config: &Config) -> String {
    let mut output = format!(
        "{}, {}\n",
        config.cafeteria,
        view.date.format("%d-%m-%Y")
    );

    if view.items.is_empty() {
        output.push_str("\nNo items to show\n");
        return output;
    }

    let mut current_category = None;
    for entry in &view.items {
        let item = &entry.item;

        if current_category != Some(item.category) {
            output.push_str(&format!("\n{}\n", item.category));
            current_category = Some(item.category);
        }

        output.push_str(&format!(
            "  {}. {}  {:.2}{}  {} kcal  rated {:.1}{}\n",
            item.id,
            item.name,
            item.price,
            config.currency,
            item.calories,
            item.rating,
            if item.available { "" } else { "  [unavailable]" }
        ));
        output.push_str(&format!("     {}\n", item.description));

        if !item.allergens.is_empty() {
            output.push_str(&format!("     allergens: {}\n", allergen_names(&item.allergens)));
        }
        if entry.conflicting {
            output.push_str("     warning: contains allergens from your profile\n");
        }
        if entry.favorite {
            output.push_str("     marked as favorite\n");
        }
        if entry.summary.review_count > 0 {
            output.push_str(&format!(
                "     student rating: {:.1}/5 ({} review{})\n",
                entry.summary.average_rating,
                entry.summary.review_count,
                if entry.summary.review_count == 1 { "" } else { "s" }
            ));
        }
    }

    output
}

/// Format the menu calendar dates for display
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "No menu dates in range".to_string();
    }

    let mut output = String::new();
    for date in dates {
        output.push_str(&format!("{}\n", date.format("%d-%m-%Y")));
    }
    output
}

/// Format a list of reviews for display
pub fn format_review_list(reviews: &[MenuReview]) -> String {
    if reviews.is_empty() {
        return "No reviews found".to_string();
    }

    let mut output = String::new();
    for review in reviews {
        output.push_str(&format!(
            "{}  {} (item {})  {}/5  by {}\n",
            review.date.format("%d-%m-%Y"),
            review.menu_item_name,
            review.menu_item_id,
            review.rating,
            review.student_name
        ));
        output.push_str(&format!("  id: {}\n", review.id));
        if !review.comment.is_empty() {
            output.push_str(&format!("  {}\n", review.comment));
        }
        if !review.quick_feedback.is_empty() {
            let tags = review
                .quick_feedback
                .iter()
                .map(|t| t.display_name())
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("  tags: {}\n", tags));
        }
        if let Some(response) = &review.admin_response {
            output.push_str(&format!("  response: {}\n", response));
        }
    }
    output
}

/// Format a user's favorites for display
pub fn format_favorite_list(favorites: &[FavoriteItem]) -> String {
    if favorites.is_empty() {
        return "No favorites yet".to_string();
    }

    let mut output = String::new();
    for favorite in favorites {
        output.push_str(&format!(
            "{}  {}  saved {}\n",
            favorite.menu_item_id,
            favorite.menu_item_name,
            favorite.saved_at.format("%d-%m-%Y")
        ));
    }
    output
}

/// Format announcements for display
pub fn format_announcement_list(announcements: &[Announcement]) -> String {
    if announcements.is_empty() {
        return "No announcements".to_string();
    }

    let mut output = String::new();
    for a in announcements {
        output.push_str(&format!(
            "{}{} [{}] {} to {}\n",
            if a.important { "! " } else { "" },
            a.title,
            a.kind,
            a.starts_on.format("%d-%m-%Y"),
            a.ends_on.format("%d-%m-%Y")
        ));
        output.push_str(&format!("  {}\n", a.message));
        output.push_str(&format!("  id: {}\n", a.id));
    }
    output
}

/// Format the crowd status for display
pub fn format_crowd_status(status: &CrowdStatus) -> String {
    format!(
        "Crowd level: {}\n{}\nUpdated: {}\n",
        status.level,
        status.message,
        status.updated_at.to_rfc3339()
    )
}

/// Format an account for display (whoami)
pub fn format_account(account: &Account) -> String {
    let mut output = format!("{} <{}>\n", account.name, account.email);
    output.push_str(&format!("Role: {}\n", account.role));

    if let Some(number) = &account.student_number {
        output.push_str(&format!("Student number: {}\n", number));
    }
    if let Some(department) = &account.department {
        output.push_str(&format!("Department: {}\n", department));
    }

    if account.allergens.is_empty() {
        output.push_str("Allergen profile: none\n");
    } else {
        output.push_str(&format!(
            "Allergen profile: {}\n",
            allergen_names(&account.allergens)
        ));
    }
    output
}
