// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lab mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::labs;
use crate::error::PersistenceError;

/// Creates a new lab within a course.
///
/// The course association is set once here and never changes for the
/// lab's lifetime. The TA assignment is optional.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The owning course's canonical identifier
/// * `name` - The lab name (unique within the course)
/// * `ta_user_id` - The assigned TA's canonical user identifier, if any
///
/// # Errors
///
/// Returns `PersistenceError::ForeignKeyViolation` if the course or TA
/// does not exist, `PersistenceError::UniqueViolation` if the lab name
/// already exists within the course, or another error if the insert
/// fails.
pub fn create_lab(
    conn: &mut SqliteConnection,
    course_id: i64,
    name: &str,
    ta_user_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!(course_id, "Creating lab: {}", name);

    diesel::insert_into(labs::table)
        .values((
            labs::course_id.eq(course_id),
            labs::name.eq(name),
            labs::ta_user_id.eq(ta_user_id),
        ))
        .execute(conn)?;

    let lab_id: i64 = get_last_insert_rowid(conn)?;

    info!(lab_id, "Lab created successfully");

    Ok(lab_id)
}
