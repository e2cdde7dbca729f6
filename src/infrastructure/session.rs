//! Persisted login session
//!
//! Each CLI invocation is a fresh process, so the logged-in user is
//! recorded in `.mensa/session.json` between commands.

use crate::domain::account::Account;
use crate::error::Result;
use crate::infrastructure::accounts::AccountRepository;
use crate::infrastructure::store::DataStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub logged_in_at: DateTime<Utc>,
}

pub struct SessionStore {
    store: DataStore,
}

impl SessionStore {
    pub fn new(store: &DataStore) -> Self {
        SessionStore {
            store: store.clone(),
        }
    }

    /// Record a login
    pub fn begin(&self, account: &Account) -> Result<()> {
        let session = Session {
            user_id: account.id,
            logged_in_at: Utc::now(),
        };
        self.store.save_record(SESSION_FILE, &session)
    }

    /// Clear the session; a no-op when not logged in
    pub fn end(&self) -> Result<()> {
        self.store.remove_record(SESSION_FILE)
    }

    /// Resolve the session to an account. A session pointing at a
    /// deleted account counts as logged out.
    pub fn current_user(&self, accounts: &AccountRepository) -> Result<Option<Account>> {
        let session: Option<Session> = self.store.load_record(SESSION_FILE)?;

        Ok(session.and_then(|s| accounts.find(s.user_id).cloned()))
    }
}
