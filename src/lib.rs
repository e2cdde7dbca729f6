//! mensa - Campus cafeteria menu application
//!
//! A command-line companion to the campus cafeteria: daily menus and a
//! rolling menu calendar, reviews with quick feedback, favorites,
//! announcements and crowd status, with student and admin accounts
//! backed by per-entity JSON files.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MensaError;
