//! Error types for mensa

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Main error type for the mensa application
#[derive(Debug, Error)]
pub enum MensaError {
    #[error("Not a mensa directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Directory already initialized: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateRef(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("This e-mail address is already registered: {0}")]
    EmailTaken(String),

    #[error("This student number is already registered: {0}")]
    StudentNumberTaken(String),

    #[error("Not a valid e-mail address: {0}")]
    InvalidEmail(String),

    #[error("Not a valid student number: {0}")]
    InvalidStudentNumber(String),

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid e-mail or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Only cafeteria admins can do this")]
    AdminOnly,

    #[error("No menu available for {}", .0.format("%d-%m-%Y"))]
    NoMenu(NaiveDate),

    #[error("No menu item {item_id} on {}", .date.format("%d-%m-%Y"))]
    UnknownMenuItem { date: NaiveDate, item_id: u32 },

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Review not found: {0}")]
    ReviewNotFound(Uuid),

    #[error("Announcement not found: {0}")]
    AnnouncementNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MensaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MensaError::NotInitialized(_) => 2,
            MensaError::InvalidDateRef(_) => 3,
            MensaError::InvalidCredentials | MensaError::NotLoggedIn => 4,
            MensaError::AdminOnly => 5,
            MensaError::EmailTaken(_)
            | MensaError::StudentNumberTaken(_)
            | MensaError::InvalidEmail(_)
            | MensaError::InvalidStudentNumber(_)
            | MensaError::PasswordTooShort
            | MensaError::InvalidRating(_) => 6,
            MensaError::NoMenu(_)
            | MensaError::UnknownMenuItem { .. }
            | MensaError::ReviewNotFound(_)
            | MensaError::AnnouncementNotFound(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MensaError::NotInitialized(path) => {
                format!(
                    "Not a mensa directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mensa init' in this directory to set up a cafeteria\n\
                    • Navigate to an existing mensa directory\n\
                    • Set MENSA_ROOT environment variable to your cafeteria path",
                    path.display()
                )
            }
            MensaError::InvalidDateRef(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: DD-MM-YYYY (e.g., 17-01-2026)\n\n\
                    Examples:\n\
                    mensa menu today\n\
                    mensa menu next monday\n\
                    mensa menu 17-01-2026",
                    ref_str
                )
            }
            MensaError::NotLoggedIn => {
                "Not logged in\n\n\
                Suggestions:\n\
                • Log in first: mensa login <email> <password>\n\
                • Create an account: mensa register --name ... --email ... --password ..."
                    .to_string()
            }
            MensaError::AdminOnly => {
                "Only cafeteria admins can do this\n\n\
                Suggestions:\n\
                • Log in with an admin account: mensa login <admin-email> <password>\n\
                • Check who you are logged in as: mensa whoami"
                    .to_string()
            }
            MensaError::NoMenu(date) => {
                format!(
                    "No menu available for {}\n\n\
                    Suggestions:\n\
                    • The menu calendar covers roughly four months around today\n\
                    • Use 'mensa calendar' to see the dates that have a menu",
                    date.format("%d-%m-%Y")
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MensaError
pub type Result<T> = std::result::Result<T, MensaError>;
