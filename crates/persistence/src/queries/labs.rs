// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lab queries.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::LabRecord;
use crate::diesel_schema::labs;
use crate::error::PersistenceError;

/// Retrieves a lab row by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `lab_id` - The canonical lab identifier
///
/// # Errors
///
/// Returns `PersistenceError::LabNotFound` if no such lab exists.
pub fn get_lab(conn: &mut SqliteConnection, lab_id: i64) -> Result<LabRecord, PersistenceError> {
    let result = labs::table
        .select(LabRecord::as_select())
        .filter(labs::lab_id.eq(lab_id))
        .first::<LabRecord>(conn);

    match result {
        Ok(record) => Ok(record),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::LabNotFound(lab_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists the labs of a course, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The canonical course identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn labs_for_course(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<Vec<LabRecord>, PersistenceError> {
    Ok(labs::table
        .select(LabRecord::as_select())
        .filter(labs::course_id.eq(course_id))
        .order(labs::name.asc())
        .load::<LabRecord>(conn)?)
}

/// Lists the labs that have no TA assigned.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn labs_without_ta(conn: &mut SqliteConnection) -> Result<Vec<LabRecord>, PersistenceError> {
    Ok(labs::table
        .select(LabRecord::as_select())
        .filter(labs::ta_user_id.is_null())
        .order(labs::name.asc())
        .load::<LabRecord>(conn)?)
}

/// Lists the labs assigned to the given TA.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The TA's canonical user identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn labs_assigned_to(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<LabRecord>, PersistenceError> {
    Ok(labs::table
        .select(LabRecord::as_select())
        .filter(labs::ta_user_id.eq(user_id))
        .order(labs::name.asc())
        .load::<LabRecord>(conn)?)
}
