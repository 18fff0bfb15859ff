// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database initialization and isolation tests.

use crate::Persistence;

#[test]
fn test_new_in_memory_initializes_schema() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");

    let users = persistence.list_users().expect("Failed to list users");
    let courses = persistence.list_courses().expect("Failed to list courses");

    assert!(users.is_empty());
    assert!(courses.is_empty());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");

    persistence
        .verify_foreign_key_enforcement()
        .expect("Foreign keys should be enforced");
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = Persistence::new_in_memory().expect("Failed to create first database");
    let mut second = Persistence::new_in_memory().expect("Failed to create second database");

    first
        .create_user("alice", "Instructor", "Alice", "Liddell")
        .expect("Failed to create user");

    let first_users = first.list_users().expect("Failed to list first users");
    let second_users = second.list_users().expect("Failed to list second users");

    assert_eq!(first_users.len(), 1);
    assert!(second_users.is_empty());
}

#[test]
fn test_created_user_round_trips() {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");

    let user_id = persistence
        .create_user("alice", "TA", "Alice", "Liddell")
        .expect("Failed to create user");

    let record = persistence
        .get_user_by_username("alice")
        .expect("Failed to fetch user");

    assert_eq!(record.user_id, user_id);
    assert_eq!(record.username, "alice");
    assert_eq!(record.role, "TA");
    assert_eq!(record.first_name, "Alice");
    assert_eq!(record.last_name, "Liddell");
    assert!(!record.created_at.is_empty());
}

#[test]
fn test_role_tag_is_stored_verbatim() {
    // The persistence layer stores the raw tag; casing is preserved
    // exactly so the case-sensitive check upstream sees what was given.
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");

    persistence
        .create_user("odd", "instructor", "Odd", "Casing")
        .expect("Failed to create user");

    let record = persistence
        .get_user_by_username("odd")
        .expect("Failed to fetch user");

    assert_eq!(record.role, "instructor");
}
