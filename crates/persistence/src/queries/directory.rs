// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster snapshot assembly.
//!
//! Reconstructs the domain's [`RosterEntry`] snapshot from the
//! canonical tables so the pure visibility filter can run over it.

use std::collections::HashMap;

use course_roster_domain::{Course, Lab, RosterEntry, Username};
use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::data_models::{CourseRecord, InstructorAssignmentRecord, LabRecord};
use crate::diesel_schema::{course_instructors, labs, users};
use crate::error::PersistenceError;
use crate::queries::courses::list_courses;

/// Loads the full roster snapshot: every course with its instructor
/// usernames and labs (including each lab's TA username, if assigned).
///
/// Courses are ordered by name; instructors and labs within a course
/// are ordered by username and name respectively. The assignment and
/// lab tables are each read once and grouped by course, rather than
/// queried per course.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn load_roster(conn: &mut SqliteConnection) -> Result<Vec<RosterEntry>, PersistenceError> {
    let course_rows: Vec<CourseRecord> = list_courses(conn)?;

    let assignment_rows: Vec<(InstructorAssignmentRecord, String)> = course_instructors::table
        .inner_join(users::table)
        .select((InstructorAssignmentRecord::as_select(), users::username))
        .order(users::username.asc())
        .load::<(InstructorAssignmentRecord, String)>(conn)?;

    let lab_rows: Vec<(LabRecord, Option<String>)> = labs::table
        .left_outer_join(users::table)
        .select((LabRecord::as_select(), users::username.nullable()))
        .order(labs::name.asc())
        .load::<(LabRecord, Option<String>)>(conn)?;

    // The rows arrive globally ordered, so pushing in order keeps each
    // per-course group ordered as well.
    let mut instructors_by_course: HashMap<i64, Vec<Username>> = HashMap::new();
    for (assignment, instructor_name) in assignment_rows {
        instructors_by_course
            .entry(assignment.course_id)
            .or_default()
            .push(Username::new(&instructor_name));
    }

    let mut labs_by_course: HashMap<i64, Vec<Lab>> = HashMap::new();
    for (lab_row, ta_name) in lab_rows {
        labs_by_course
            .entry(lab_row.course_id)
            .or_default()
            .push(Lab::with_id(
                lab_row.lab_id,
                &lab_row.name,
                ta_name.as_deref().map(Username::new),
            ));
    }

    let mut roster: Vec<RosterEntry> = Vec::with_capacity(course_rows.len());
    for course_row in course_rows {
        let course: Course = Course::with_id(course_row.course_id, &course_row.name);
        let instructors: Vec<Username> = instructors_by_course
            .remove(&course_row.course_id)
            .unwrap_or_default();
        let lab_entries: Vec<Lab> = labs_by_course
            .remove(&course_row.course_id)
            .unwrap_or_default();

        roster.push(RosterEntry::new(course, instructors, lab_entries));
    }

    Ok(roster)
}
