//! Accounts and login use cases

use crate::domain::account::Account;
use crate::domain::menu::Allergen;
use crate::error::{MensaError, Result};
use crate::infrastructure::{AccountRepository, DataStore, NewStudent, SessionStore};

/// Resolve the logged-in user, if any
pub fn current_user(store: &DataStore) -> Result<Option<Account>> {
    let accounts = AccountRepository::load(store)?;
    SessionStore::new(store).current_user(&accounts)
}

/// Resolve the logged-in user or fail
pub fn require_user(store: &DataStore) -> Result<Account> {
    current_user(store)?.ok_or(MensaError::NotLoggedIn)
}

/// Resolve the logged-in user and check the admin role
pub fn require_admin(store: &DataStore) -> Result<Account> {
    let user = require_user(store)?;
    if !user.is_admin() {
        return Err(MensaError::AdminOnly);
    }
    Ok(user)
}

/// Service for registration, login and the allergen profile
pub struct AuthService {
    store: DataStore,
}

impl AuthService {
    pub fn new(store: DataStore) -> Self {
        AuthService { store }
    }

    /// Register a new student account
    pub fn register(&self, new: NewStudent) -> Result<Account> {
        let mut accounts = AccountRepository::load(&self.store)?;
        accounts.register_student(new)
    }

    /// Log in and persist the session
    pub fn login(&self, email: &str, password: &str) -> Result<Account> {
        let accounts = AccountRepository::load(&self.store)?;
        let account = accounts.authenticate(email, password)?;
        SessionStore::new(&self.store).begin(&account)?;
        Ok(account)
    }

    /// Clear the session; harmless when not logged in
    pub fn logout(&self) -> Result<()> {
        SessionStore::new(&self.store).end()
    }

    pub fn current_user(&self) -> Result<Option<Account>> {
        current_user(&self.store)
    }

    /// Replace the logged-in user's allergen profile
    pub fn set_allergens(&self, allergens: Vec<Allergen>) -> Result<Account> {
        let user = require_user(&self.store)?;
        let mut accounts = AccountRepository::load(&self.store)?;
        accounts.set_allergens(user.id, allergens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init;
    use tempfile::TempDir;

    fn service() -> (TempDir, AuthService) {
        let temp = TempDir::new().unwrap();
        init::init(temp.path()).unwrap();
        let store = DataStore::new(temp.path().to_path_buf());
        (temp, AuthService::new(store))
    }

    #[test]
    fn test_login_creates_session() {
        let (_temp, auth) = service();

        assert!(auth.current_user().unwrap().is_none());
        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();

        let user = auth.current_user().unwrap().unwrap();
        assert_eq!(user.email, init::DEMO_STUDENT_EMAIL);
    }

    #[test]
    fn test_login_replaces_previous_session() {
        let (_temp, auth) = service();

        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();
        auth.login(init::DEMO_ADMIN_EMAIL, "admin123").unwrap();

        let user = auth.current_user().unwrap().unwrap();
        assert!(user.is_admin());
    }

    #[test]
    fn test_logout() {
        let (_temp, auth) = service();
        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();
        auth.logout().unwrap();
        assert!(auth.current_user().unwrap().is_none());
    }

    #[test]
    fn test_bad_login_leaves_no_session() {
        let (_temp, auth) = service();
        assert!(auth.login(init::DEMO_STUDENT_EMAIL, "wrongpw").is_err());
        assert!(auth.current_user().unwrap().is_none());
    }

    #[test]
    fn test_require_admin() {
        let (temp, auth) = service();
        let store = DataStore::new(temp.path().to_path_buf());

        assert!(matches!(
            require_admin(&store),
            Err(MensaError::NotLoggedIn)
        ));

        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();
        assert!(matches!(require_admin(&store), Err(MensaError::AdminOnly)));

        auth.login(init::DEMO_ADMIN_EMAIL, "admin123").unwrap();
        assert!(require_admin(&store).is_ok());
    }

    #[test]
    fn test_set_allergens_requires_login() {
        let (_temp, auth) = service();
        assert!(matches!(
            auth.set_allergens(vec![Allergen::Gluten]),
            Err(MensaError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_set_allergens() {
        let (_temp, auth) = service();
        auth.login(init::DEMO_STUDENT_EMAIL, "123456").unwrap();

        let updated = auth.set_allergens(vec![Allergen::Dairy]).unwrap();
        assert_eq!(updated.allergens, vec![Allergen::Dairy]);

        // Cleared with an empty set
        let cleared = auth.set_allergens(vec![]).unwrap();
        assert!(cleared.allergens.is_empty());
    }
}
