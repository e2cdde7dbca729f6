//! Account repository
//!
//! Registration preconditions live here, not in the callers: uniqueness
//! and format checks all return typed errors.

use crate::domain::account::{Account, PasswordHash, Role};
use crate::domain::menu::Allergen;
use crate::error::{MensaError, Result};
use crate::infrastructure::store::DataStore;
use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;
use uuid::Uuid;

const ACCOUNTS_FILE: &str = "accounts.json";

const MIN_PASSWORD_LEN: usize = 6;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap())
}

fn student_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{4,}$").unwrap())
}

/// Registration input for a student account
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_number: String,
    pub department: String,
}

pub struct AccountRepository {
    store: DataStore,
    accounts: Vec<Account>,
}

impl AccountRepository {
    /// Load all accounts from accounts.json
    pub fn load(store: &DataStore) -> Result<Self> {
        let accounts = store.load_list(ACCOUNTS_FILE)?;
        Ok(AccountRepository {
            store: store.clone(),
            accounts,
        })
    }

    fn flush(&self) -> Result<()> {
        self.store.save_list(ACCOUNTS_FILE, &self.accounts)
    }

    fn check_credentials_shape(&self, email: &str, password: &str) -> Result<()> {
        if !email_regex().is_match(email) {
            return Err(MensaError::InvalidEmail(email.to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(MensaError::PasswordTooShort);
        }
        if self
            .accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(email))
        {
            return Err(MensaError::EmailTaken(email.to_string()));
        }
        Ok(())
    }

    /// Register a student account, enforcing all preconditions
    pub fn register_student(&mut self, new: NewStudent) -> Result<Account> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(MensaError::Config("Name must not be empty".to_string()));
        }

        self.check_credentials_shape(&new.email, &new.password)?;

        if !student_number_regex().is_match(&new.student_number) {
            return Err(MensaError::InvalidStudentNumber(new.student_number));
        }
        if self
            .accounts
            .iter()
            .any(|a| a.student_number.as_deref() == Some(new.student_number.as_str()))
        {
            return Err(MensaError::StudentNumberTaken(new.student_number));
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: new.email,
            role: Role::Student,
            student_number: Some(new.student_number),
            department: Some(new.department),
            allergens: vec![],
            password: PasswordHash::new(&new.password),
            created_at: Utc::now(),
        };

        self.accounts.push(account.clone());
        self.flush()?;
        Ok(account)
    }

    /// Register an admin account (used when seeding a new cafeteria)
    pub fn register_admin(&mut self, name: &str, email: &str, password: &str) -> Result<Account> {
        self.check_credentials_shape(email, password)?;

        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::Admin,
            student_number: None,
            department: None,
            allergens: vec![],
            password: PasswordHash::new(password),
            created_at: Utc::now(),
        };

        self.accounts.push(account.clone());
        self.flush()?;
        Ok(account)
    }

    /// Check email and password; does not reveal which of the two failed
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password.verify(password))
            .cloned()
            .ok_or(MensaError::InvalidCredentials)
    }

    pub fn find(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Replace an account's allergen profile
    pub fn set_allergens(&mut self, id: Uuid, allergens: Vec<Allergen>) -> Result<Account> {
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(MensaError::NotLoggedIn)?;

        account.allergens = allergens;
        let updated = account.clone();
        self.flush()?;
        Ok(updated)
    }

    pub fn all(&self) -> &[Account] {
        &self.accounts
    }
}
