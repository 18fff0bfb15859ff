// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{User, Username};
use std::collections::HashSet;

/// Validates that a user's basic field constraints are met.
///
/// This function checks that required fields are not empty.
/// It does NOT check for uniqueness (that requires context).
///
/// # Arguments
///
/// * `user` - The user to validate
///
/// # Returns
///
/// * `Ok(())` if the user's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The username is empty or contains whitespace
/// - The first or last name is empty
pub fn validate_user_fields(user: &User) -> Result<(), DomainError> {
    // Rule: username must not be empty
    if user.username.value().is_empty() {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot be empty",
        )));
    }

    // Rule: username must not contain whitespace
    if user.username.value().chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidUsername(String::from(
            "Username cannot contain whitespace",
        )));
    }

    // Rule: name fields must not be empty
    if user.first_name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "First name cannot be empty",
        )));
    }
    if user.last_name.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Last name cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a course name is non-empty.
///
/// # Arguments
///
/// * `name` - The course name to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidCourseName` if the name is empty or blank.
pub fn validate_course_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidCourseName(String::from(
            "Course name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a lab name is non-empty.
///
/// # Arguments
///
/// * `name` - The lab name to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidLabName` if the name is empty or blank.
pub fn validate_lab_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidLabName(String::from(
            "Lab name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a username is unique among the existing users.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `new_username` - The username to validate
/// * `existing_users` - The collection of existing users
///
/// # Returns
///
/// * `Ok(())` if the username is unique
/// * `Err(DomainError::DuplicateUsername)` if the username already exists
///
/// # Errors
///
/// Returns an error if the username is already in use.
pub fn validate_username_unique(
    new_username: &Username,
    existing_users: &[User],
) -> Result<(), DomainError> {
    let existing_usernames: HashSet<&Username> =
        existing_users.iter().map(|user| &user.username).collect();

    // Rule: usernames must be unique
    if existing_usernames.contains(new_username) {
        return Err(DomainError::DuplicateUsername {
            username: new_username.value().to_string(),
        });
    }

    Ok(())
}
