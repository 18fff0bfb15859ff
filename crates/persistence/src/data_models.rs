// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::diesel_schema::{course_instructors, courses, labs, users};

/// A user row as stored in the database.
///
/// The `role` column holds the raw, case-sensitive role tag; callers
/// that need a typed role parse it at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = users)]
pub struct UserRecord {
    /// The canonical user identifier.
    pub user_id: i64,
    /// The username (unique).
    pub username: String,
    /// The raw role tag (e.g., "Admin", "Instructor", "TA").
    pub role: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
    /// Creation timestamp (ISO 8601 text, set by the database).
    pub created_at: String,
}

/// A course row as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = courses)]
pub struct CourseRecord {
    /// The canonical course identifier.
    pub course_id: i64,
    /// The course name (unique).
    pub name: String,
    /// Creation timestamp (ISO 8601 text, set by the database).
    pub created_at: String,
}

/// A lab row as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = labs)]
pub struct LabRecord {
    /// The canonical lab identifier.
    pub lab_id: i64,
    /// The owning course. Immutable for the lab's lifetime.
    pub course_id: i64,
    /// The lab name (unique within its course).
    pub name: String,
    /// The assigned TA's user ID, if any.
    pub ta_user_id: Option<i64>,
    /// Creation timestamp (ISO 8601 text, set by the database).
    pub created_at: String,
}

/// An instructor assignment row (Course <-> User many-to-many).
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = course_instructors)]
pub struct InstructorAssignmentRecord {
    /// The assignment row identifier.
    pub id: i64,
    /// The course.
    pub course_id: i64,
    /// The instructor's user ID.
    pub user_id: i64,
}
