//! Account entities and credential hashing

use crate::domain::menu::Allergen;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Gates which operations are available to a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("student"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// Salted password hash. The salt is stored next to the digest;
/// the plaintext password never reaches disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    salt: String,
    digest: String,
}

impl PasswordHash {
    /// Hash a password under a fresh random salt
    pub fn new(password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let digest = Self::digest(&salt, password);
        PasswordHash { salt, digest }
    }

    pub fn verify(&self, password: &str) -> bool {
        Self::digest(&self.salt, password) == self.digest
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hasher.finalize().to_hex().to_string()
    }
}

/// A registered cafeteria user. Students carry a student number and
/// department; the allergen set drives menu filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub student_number: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    pub password: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verifies_correct_password() {
        let hash = PasswordHash::new("s3cret!");
        assert!(hash.verify("s3cret!"));
        assert!(!hash.verify("s3cret"));
        assert!(!hash.verify(""));
    }

    #[test]
    fn test_hash_does_not_store_plaintext() {
        let hash = PasswordHash::new("hunter2");
        let json = serde_json::to_string(&hash).unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_salts_are_unique() {
        let a = PasswordHash::new("same");
        let b = PasswordHash::new("same");
        // Same password, different salt, different digest
        assert_ne!(a, b);
        assert!(a.verify("same"));
        assert!(b.verify("same"));
    }

    #[test]
    fn test_hash_roundtrips_through_json() {
        let hash = PasswordHash::new("roundtrip");
        let json = serde_json::to_string(&hash).unwrap();
        let back: PasswordHash = serde_json::from_str(&json).unwrap();
        assert!(back.verify("roundtrip"));
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_is_admin() {
        let account = Account {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@campus.example".to_string(),
            role: Role::Admin,
            student_number: None,
            department: None,
            allergens: vec![],
            password: PasswordHash::new("admin123"),
            created_at: Utc::now(),
        };
        assert!(account.is_admin());
    }
}
