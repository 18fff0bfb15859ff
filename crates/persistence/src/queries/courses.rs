// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course queries, including the database-backed visibility filters.
//!
//! The assigned-only filters compose over the relation tables:
//!
//! - Instructor visibility joins through `course_instructors`
//!   (many-to-many Course <-> User).
//! - TA visibility joins through `labs` on `ta_user_id`, de-duplicated
//!   with `DISTINCT` since a TA may hold several labs in one course.

use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{CourseRecord, UserRecord};
use crate::diesel_schema::{course_instructors, courses, labs, users};
use crate::error::PersistenceError;

/// Lists all courses ordered by name.
///
/// This is the unrestricted directory listing.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_courses(conn: &mut SqliteConnection) -> Result<Vec<CourseRecord>, PersistenceError> {
    Ok(courses::table
        .select(CourseRecord::as_select())
        .order(courses::name.asc())
        .load::<CourseRecord>(conn)?)
}

/// Retrieves a course row by canonical ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The canonical course identifier
///
/// # Errors
///
/// Returns `PersistenceError::CourseNotFound` if no such course exists.
pub fn get_course(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<CourseRecord, PersistenceError> {
    let result = courses::table
        .select(CourseRecord::as_select())
        .filter(courses::course_id.eq(course_id))
        .first::<CourseRecord>(conn);

    match result {
        Ok(record) => Ok(record),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::CourseNotFound(course_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists the courses the given instructor is assigned to.
///
/// A course is visible to an instructor exactly when the instructor is
/// a member of that course's instructor set.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The instructor's canonical user identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn courses_for_instructor(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<CourseRecord>, PersistenceError> {
    Ok(courses::table
        .inner_join(course_instructors::table)
        .filter(course_instructors::user_id.eq(user_id))
        .select(CourseRecord::as_select())
        .order(courses::name.asc())
        .load::<CourseRecord>(conn)?)
}

/// Lists the courses containing at least one lab assigned to the given TA.
///
/// Each course appears at most once even if the TA holds several labs
/// within it. A course with zero labs never appears here.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The TA's canonical user identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn courses_with_lab_assigned_to(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Vec<CourseRecord>, PersistenceError> {
    Ok(courses::table
        .inner_join(labs::table)
        .filter(labs::ta_user_id.eq(user_id))
        .select(CourseRecord::as_select())
        .distinct()
        .order(courses::name.asc())
        .load::<CourseRecord>(conn)?)
}

/// Lists the courses that have no instructors assigned.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn courses_without_instructors(
    conn: &mut SqliteConnection,
) -> Result<Vec<CourseRecord>, PersistenceError> {
    Ok(courses::table
        .left_outer_join(course_instructors::table)
        .filter(course_instructors::id.is_null())
        .select(CourseRecord::as_select())
        .order(courses::name.asc())
        .load::<CourseRecord>(conn)?)
}

/// Lists the instructors assigned to a course, ordered by username.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `course_id` - The canonical course identifier
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn instructors_for_course(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<Vec<UserRecord>, PersistenceError> {
    Ok(users::table
        .inner_join(course_instructors::table)
        .filter(course_instructors::course_id.eq(course_id))
        .select(UserRecord::as_select())
        .order(users::username.asc())
        .load::<UserRecord>(conn)?)
}
