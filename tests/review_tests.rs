//! Integration tests for menu reviews

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::mensa_cmd;

fn init_cafeteria() -> TempDir {
    let temp = TempDir::new().unwrap();
    mensa_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn login_student(temp: &TempDir) {
    mensa_cmd()
        .current_dir(temp.path())
        .args(["login", "student@campus.example", "123456"])
        .assert()
        .success();
}

fn login_admin(temp: &TempDir) {
    mensa_cmd()
        .current_dir(temp.path())
        .args(["login", "admin@campus.example", "admin123"])
        .assert()
        .success();
}

/// Add a review and return its id, parsed from
/// "Recorded review <id> for <name> (<rating>/5)"
fn add_review(temp: &TempDir, item_id: &str, rating: &str) -> String {
    let output = mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "add", item_id, rating, "--comment", "as expected"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .split_whitespace()
        .nth(2)
        .expect("review id in output")
        .to_string()
}

#[test]
fn test_review_add_requires_login() {
    let temp = init_cafeteria();

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "add", "1", "5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_review_add_and_list() {
    let temp = init_cafeteria();
    login_student(&temp);

    mensa_cmd()
        .current_dir(temp.path())
        .args([
            "review", "add", "1", "4", "--comment", "Hearty!", "--tag", "fresh", "--tag",
            "delicious",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded review"));

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4/5  by Demo Student"))
        .stdout(predicate::str::contains("Hearty!"))
        .stdout(predicate::str::contains("tags: Fresh, Delicious"));
}

#[test]
fn test_review_rating_bounds() {
    let temp = init_cafeteria();
    login_student(&temp);

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "add", "1", "6"])
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn test_review_unknown_item() {
    let temp = init_cafeteria();
    login_student(&temp);

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "add", "42", "3"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("No menu item 42"));
}

#[test]
fn test_review_unknown_tag() {
    let temp = init_cafeteria();
    login_student(&temp);

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "add", "1", "3", "--tag", "spicy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown quick feedback"));
}

#[test]
fn test_review_list_filters_by_item() {
    let temp = init_cafeteria();
    login_student(&temp);

    add_review(&temp, "1", "4");
    add_review(&temp, "2", "2");

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "list", "--item", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(item 1)"))
        .stdout(predicate::str::contains("(item 2)").not());
}

#[test]
fn test_menu_shows_review_summary() {
    let temp = init_cafeteria();
    login_student(&temp);

    add_review(&temp, "1", "4");
    add_review(&temp, "1", "5");

    mensa_cmd()
        .current_dir(temp.path())
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("student rating: 4.5/5 (2 reviews)"));
}

#[test]
fn test_review_respond_requires_admin() {
    let temp = init_cafeteria();
    login_student(&temp);
    let id = add_review(&temp, "1", "2");

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "respond", &id, "We will do better"])
        .assert()
        .failure()
        .code(5);

    login_admin(&temp);
    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "respond", &id, "We will do better"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Response recorded"));

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("response: We will do better"));
}

#[test]
fn test_review_respond_unknown_id() {
    let temp = init_cafeteria();
    login_admin(&temp);

    mensa_cmd()
        .current_dir(temp.path())
        .args([
            "review",
            "respond",
            "7f2b6f1e-58a4-4a3b-9a93-1f2b3c4d5e6f",
            "hello",
        ])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Review not found"));
}

#[test]
fn test_review_delete_requires_admin() {
    let temp = init_cafeteria();
    login_student(&temp);
    let id = add_review(&temp, "1", "1");

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "delete", &id])
        .assert()
        .failure()
        .code(5);

    login_admin(&temp);
    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "delete", &id])
        .assert()
        .success();

    mensa_cmd()
        .current_dir(temp.path())
        .args(["review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews found"));
}
