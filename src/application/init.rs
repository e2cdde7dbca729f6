//! Initialize cafeteria use case

use crate::error::Result;
use crate::infrastructure::{AccountRepository, Config, DataStore, NewStudent};
use std::fs;
use std::path::Path;

/// Demo accounts seeded into every new cafeteria
pub const DEMO_ADMIN_EMAIL: &str = "admin@campus.example";
pub const DEMO_STUDENT_EMAIL: &str = "student@campus.example";

/// Initialize a new cafeteria data directory at the given path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = DataStore::new(path.to_path_buf());
    store.initialize()?;

    Config::new().save(&store)?;

    // Seed the demo accounts the app has always shipped with
    let mut accounts = AccountRepository::load(&store)?;
    accounts.register_admin("Cafeteria Admin", DEMO_ADMIN_EMAIL, "admin123")?;
    accounts.register_student(NewStudent {
        name: "Demo Student".to_string(),
        email: DEMO_STUDENT_EMAIL.to_string(),
        password: "123456".to_string(),
        student_number: "2021001".to_string(),
        department: "Computer Engineering".to_string(),
    })?;

    println!("Initialized mensa cafeteria at {}", path.display());
    println!(
        "Seeded demo accounts: {} and {}",
        DEMO_ADMIN_EMAIL, DEMO_STUDENT_EMAIL
    );

    Ok(())
}
