// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The role tag is not a valid role. Role tags are case-sensitive.
    InvalidRole(String),
    /// The username is empty or invalid.
    InvalidUsername(String),
    /// A name field is empty or invalid.
    InvalidName(String),
    /// The course name is empty or invalid.
    InvalidCourseName(String),
    /// The lab name is empty or invalid.
    InvalidLabName(String),
    /// A user with this username already exists.
    DuplicateUsername {
        /// The duplicate username.
        username: String,
    },
    /// A course with this name already exists.
    DuplicateCourse {
        /// The duplicate course name.
        name: String,
    },
    /// A lab with this name already exists in the course.
    DuplicateLab {
        /// The course name.
        course: String,
        /// The duplicate lab name.
        name: String,
    },
    /// The instructor is already assigned to the course.
    DuplicateAssignment {
        /// The course name.
        course: String,
        /// The instructor's username.
        username: String,
    },
    /// The requested user does not exist.
    UserNotFound {
        /// The username that was looked up.
        username: String,
    },
    /// The requested course does not exist.
    CourseNotFound {
        /// The course identifier that was looked up.
        course_id: i64,
    },
    /// The requested lab does not exist.
    LabNotFound {
        /// The lab identifier that was looked up.
        lab_id: i64,
    },
    /// The target user does not hold the role the assignment requires.
    RoleMismatch {
        /// The target user's username.
        username: String,
        /// The role required for the assignment.
        required_role: String,
        /// The role the user actually holds.
        actual_role: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(tag) => {
                write!(f, "{tag:?} is not a valid role (role tags are case-sensitive)")
            }
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidCourseName(msg) => write!(f, "Invalid course name: {msg}"),
            Self::InvalidLabName(msg) => write!(f, "Invalid lab name: {msg}"),
            Self::DuplicateUsername { username } => {
                write!(f, "User with username '{username}' already exists")
            }
            Self::DuplicateCourse { name } => {
                write!(f, "Course '{name}' already exists")
            }
            Self::DuplicateLab { course, name } => {
                write!(f, "Lab '{name}' already exists in course '{course}'")
            }
            Self::DuplicateAssignment { course, username } => {
                write!(
                    f,
                    "Instructor '{username}' is already assigned to course '{course}'"
                )
            }
            Self::UserNotFound { username } => {
                write!(f, "User '{username}' not found")
            }
            Self::CourseNotFound { course_id } => {
                write!(f, "Course with ID {course_id} not found")
            }
            Self::LabNotFound { lab_id } => {
                write!(f, "Lab with ID {lab_id} not found")
            }
            Self::RoleMismatch {
                username,
                required_role,
                actual_role,
            } => {
                write!(
                    f,
                    "User '{username}' holds role {actual_role} but the assignment requires {required_role}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
