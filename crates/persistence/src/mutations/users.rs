// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Creates a new user.
///
/// The `role` is stored as its raw, case-sensitive tag; callers are
/// expected to have validated it against the role enumeration.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username (unique)
/// * `role` - The role tag ("Admin", "Instructor", or "TA")
/// * `first_name` - The user's first name
/// * `last_name` - The user's last name
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the username already
/// exists, or another error if the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    role: &str,
    first_name: &str,
    last_name: &str,
) -> Result<i64, PersistenceError> {
    info!("Creating user with username: {}, role: {}", username, role);

    diesel::insert_into(users::table)
        .values((
            users::username.eq(username),
            users::role.eq(role),
            users::first_name.eq(first_name),
            users::last_name.eq(last_name),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;

    info!(user_id, "User created successfully");

    Ok(user_id)
}
