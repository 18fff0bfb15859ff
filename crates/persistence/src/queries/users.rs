// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::UserRecord;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user row by username.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username to look up
///
/// # Errors
///
/// Returns `PersistenceError::UserNotFound` if no such user exists.
pub fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<UserRecord, PersistenceError> {
    let result = users::table
        .select(UserRecord::as_select())
        .filter(users::username.eq(username))
        .first::<UserRecord>(conn);

    match result {
        Ok(record) => Ok(record),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::UserNotFound(username.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a user row by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The canonical user identifier
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no such user exists.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<UserRecord, PersistenceError> {
    Ok(users::table
        .select(UserRecord::as_select())
        .filter(users::user_id.eq(user_id))
        .first::<UserRecord>(conn)?)
}

/// Lists all users ordered by username.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_users(conn: &mut SqliteConnection) -> Result<Vec<UserRecord>, PersistenceError> {
    Ok(users::table
        .select(UserRecord::as_select())
        .order(users::username.asc())
        .load::<UserRecord>(conn)?)
}
