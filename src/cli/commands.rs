//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "mensa")]
#[command(about = "Campus cafeteria menu application", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new cafeteria data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Create a student account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        student_number: String,

        #[arg(long)]
        department: String,
    },

    /// Log in with e-mail and password
    Login { email: String, password: String },

    /// Log out
    Logout,

    /// Show who is logged in
    Whoami,

    /// Show the menu for a date
    Menu {
        /// Date reference (e.g., today, yesterday, next monday, 17-01-2026)
        #[arg(default_value = "today")]
        date: String,

        /// Only show one category (soup, main-course, side-dish, salad, dessert, beverage)
        #[arg(short, long)]
        category: Option<String>,

        /// Hide items that conflict with your allergen profile
        #[arg(long)]
        safe_only: bool,
    },

    /// Edit a menu item on a date (admin)
    EditMenu {
        /// Date reference
        date: String,

        /// Item id as shown by 'mensa menu'
        item_id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        calories: Option<u32>,

        #[arg(long)]
        available: Option<bool>,

        /// Comma-separated allergens; pass an empty string to clear
        #[arg(long)]
        allergens: Option<String>,
    },

    /// List the dates that have a menu
    Calendar {
        /// Earliest date to include (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,

        /// Latest date to include (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,

        /// Show at most this many dates
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Add, list, answer or delete menu reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Manage your favorite dishes
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },

    /// Cafeteria announcements
    Announce {
        #[command(subcommand)]
        action: Option<AnnounceAction>,
    },

    /// Show or set how busy the cafeteria is
    Crowd {
        #[command(subcommand)]
        action: Option<CrowdAction>,
    },

    /// Show or change your allergen profile
    Allergens {
        /// Comma-separated allergens (e.g. gluten,nuts)
        #[arg(long, conflicts_with = "clear")]
        set: Option<String>,

        /// Clear the profile
        #[arg(long)]
        clear: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewAction {
    /// Review a menu item
    Add {
        /// Item id as shown by 'mensa menu'
        item_id: u32,

        /// Star rating, 1 to 5
        rating: u8,

        /// Date the item was served (default: today)
        #[arg(long, default_value = "today")]
        date: String,

        #[arg(long, default_value = "")]
        comment: String,

        /// Quick feedback tag (cold, salty, small-portion, bland, delicious, fresh); repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List reviews
    List {
        /// Only reviews of this item id
        #[arg(long)]
        item: Option<u32>,

        /// Only reviews for this date
        #[arg(long)]
        date: Option<String>,
    },

    /// Answer a review (admin)
    Respond { review_id: Uuid, response: String },

    /// Delete a review (admin)
    Delete { review_id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum FavAction {
    /// Toggle a favorite
    Toggle {
        /// Item id as shown by 'mensa menu'
        item_id: u32,

        /// Date the item appears on (default: today)
        #[arg(long, default_value = "today")]
        date: String,
    },

    /// Remove a favorite by item id
    Remove { item_id: u32 },

    /// List your favorites
    List,
}

#[derive(Subcommand, Debug)]
pub enum AnnounceAction {
    /// Post an announcement (admin)
    Add {
        title: String,
        message: String,

        /// closure, holiday, maintenance or general
        #[arg(long, default_value = "general")]
        kind: String,

        /// First day the notice is shown (DD-MM-YYYY, default: today)
        #[arg(long)]
        starts: Option<String>,

        /// Last day the notice is shown (DD-MM-YYYY, default: day after start)
        #[arg(long)]
        ends: Option<String>,

        #[arg(long)]
        important: bool,
    },

    /// Remove an announcement (admin)
    Remove { id: Uuid },

    /// List announcements
    List {
        /// Include expired and future notices
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CrowdAction {
    /// Update the crowd status (admin)
    Set {
        /// empty, normal, crowded or very-crowded
        level: String,
        message: String,
    },
}
