// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{course_instructors, courses};
use crate::error::PersistenceError;

/// Creates a new course.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The course name (unique)
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the course name
/// already exists, or another error if the insert fails.
pub fn create_course(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    info!("Creating course: {}", name);

    diesel::insert_into(courses::table)
        .values(courses::name.eq(name))
        .execute(conn)?;

    let course_id: i64 = get_last_insert_rowid(conn)?;

    info!(course_id, "Course created successfully");

    Ok(course_id)
}

/// Assigns an instructor to a course (many-to-many membership).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The canonical course identifier
/// * `user_id` - The instructor's canonical user identifier
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the instructor is
/// already assigned to the course, `PersistenceError::ForeignKeyViolation`
/// if either row does not exist, or another error if the insert fails.
pub fn add_instructor(
    conn: &mut SqliteConnection,
    course_id: i64,
    user_id: i64,
) -> Result<i64, PersistenceError> {
    info!(course_id, user_id, "Assigning instructor to course");

    diesel::insert_into(course_instructors::table)
        .values((
            course_instructors::course_id.eq(course_id),
            course_instructors::user_id.eq(user_id),
        ))
        .execute(conn)?;

    let assignment_id: i64 = get_last_insert_rowid(conn)?;

    Ok(assignment_id)
}
