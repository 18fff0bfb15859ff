// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a user's role.
///
/// Roles are mutually exclusive, fixed domain constants. Role tags are
/// case-sensitive: `"instructor"` is not a valid spelling of
/// `Role::Instructor` and fails to parse rather than being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Admin role: unrestricted visibility and structural authority.
    Admin,
    /// Instructor role: restricted to courses the user is assigned to.
    Instructor,
    /// TA role: restricted to courses containing a lab the user is assigned to.
    #[serde(rename = "TA")]
    Ta,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Instructor" => Ok(Self::Instructor),
            "TA" => Ok(Self::Ta),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its canonical string tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Instructor => "Instructor",
            Self::Ta => "TA",
        }
    }
}

/// Represents a username.
///
/// Usernames are the sole identity of a user and are not case-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username {
    /// The username value.
    value: String,
}

impl Username {
    /// Creates a new `Username`.
    ///
    /// # Arguments
    ///
    /// * `value` - The username value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the username value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a user of the roster system.
///
/// `user_id` is the canonical internal identifier assigned by the
/// database. Usernames remain unique but are the human-facing identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// `None` indicates the user has not been persisted yet.
    pub user_id: Option<i64>,
    /// The user's username (unique).
    pub username: Username,
    /// The user's role.
    pub role: Role,
    /// The user's first name (informational).
    pub first_name: String,
    /// The user's last name (informational).
    pub last_name: String,
}

// Two Users are equal if they have the same username, regardless of IDs
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl User {
    /// Creates a new `User` without a persisted `user_id`.
    ///
    /// The `user_id` will be assigned by the persistence layer upon first save.
    ///
    /// # Arguments
    ///
    /// * `username` - The user's username
    /// * `role` - The user's role
    /// * `first_name` - The user's first name
    /// * `last_name` - The user's last name
    #[must_use]
    pub const fn new(username: Username, role: Role, first_name: String, last_name: String) -> Self {
        Self {
            user_id: None,
            username,
            role,
            first_name,
            last_name,
        }
    }

    /// Creates a `User` with an existing `user_id` (from persistence).
    ///
    /// # Arguments
    ///
    /// * `user_id` - The canonical internal identifier
    /// * `username` - The user's username
    /// * `role` - The user's role
    /// * `first_name` - The user's first name
    /// * `last_name` - The user's last name
    #[must_use]
    pub const fn with_id(
        user_id: i64,
        username: Username,
        role: Role,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            username,
            role,
            first_name,
            last_name,
        }
    }

    /// Returns the user's display name (`first last`).
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Represents a course.
///
/// A course has zero or more assigned instructors (many-to-many) and
/// zero or more labs (one-to-many).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// The canonical numeric identifier assigned by the database.
    /// `None` when no identifier is known for this course.
    course_id: Option<i64>,
    /// The course name (unique, used for display).
    name: String,
}

// Two Courses are equal if they have the same name, regardless of IDs
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl std::hash::Hash for Course {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Course {
    /// Creates a `Course` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `course_id` - The canonical numeric identifier
    /// * `name` - The course name
    #[must_use]
    pub fn with_id(course_id: i64, name: &str) -> Self {
        Self {
            course_id: Some(course_id),
            name: name.to_string(),
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn course_id(&self) -> Option<i64> {
        self.course_id
    }

    /// Returns the course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Represents a lab section.
///
/// A lab belongs to exactly one course for its entire lifetime; in a
/// roster snapshot that association is modeled by containment within
/// the owning course's entry. A lab may have no TA assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    /// The canonical numeric identifier assigned by the database.
    /// `None` when no identifier is known for this lab.
    pub lab_id: Option<i64>,
    /// The lab name (unique within its course).
    pub name: String,
    /// The assigned TA's username, if any.
    pub ta: Option<Username>,
}

impl Lab {
    /// Creates a `Lab` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `lab_id` - The canonical numeric identifier
    /// * `name` - The lab name
    /// * `ta` - The assigned TA's username, if any
    #[must_use]
    pub fn with_id(lab_id: i64, name: &str, ta: Option<Username>) -> Self {
        Self {
            lab_id: Some(lab_id),
            name: name.to_string(),
            ta,
        }
    }

    /// Returns whether this lab has a TA assigned.
    #[must_use]
    pub const fn has_ta(&self) -> bool {
        self.ta.is_some()
    }
}
