// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use course_roster_domain::VisibilityScope;

/// The query-string value that selects the restricted directory view.
pub const ASSIGNED_FILTER: &str = "assigned";

/// API request to register a new user.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// The user's username (unique).
    pub username: String,
    /// The user's role tag (case-sensitive: `Admin`, `Instructor`, or `TA`).
    pub role: String,
    /// The user's first name.
    pub first_name: String,
    /// The user's last name.
    pub last_name: String,
}

/// API response for a successful user registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterUserResponse {
    /// The user's canonical identifier.
    pub user_id: i64,
    /// The user's username.
    pub username: String,
    /// The user's role tag.
    pub role: String,
    /// A success message.
    pub message: String,
}

/// API request to create a new course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCourseRequest {
    /// The course name (unique).
    pub name: String,
}

/// API response for a successful course creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateCourseResponse {
    /// The canonical course identifier.
    pub course_id: i64,
    /// The course name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a new lab within a course.
///
/// The owning course is fixed at creation and never changes for the
/// lab's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLabRequest {
    /// The owning course's canonical identifier.
    pub course_id: i64,
    /// The lab name (unique within the course).
    pub name: String,
    /// The username of the TA to assign, if any.
    pub ta_username: Option<String>,
}

/// API response for a successful lab creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateLabResponse {
    /// The canonical lab identifier.
    pub lab_id: i64,
    /// The owning course's canonical identifier.
    pub course_id: i64,
    /// The lab name.
    pub name: String,
    /// The assigned TA's username, if any.
    pub ta_username: Option<String>,
    /// A success message.
    pub message: String,
}

/// API request to assign an instructor to a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignInstructorRequest {
    /// The course's canonical identifier.
    pub course_id: i64,
    /// The username of the instructor to assign.
    pub instructor_username: String,
}

/// API response for a successful instructor assignment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignInstructorResponse {
    /// The course's canonical identifier.
    pub course_id: i64,
    /// The course name.
    pub course_name: String,
    /// The assigned instructor's username.
    pub instructor_username: String,
    /// A success message.
    pub message: String,
}

/// API request for the course directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseDirectoryRequest {
    /// The optional directory filter; [`ASSIGNED_FILTER`] selects the
    /// restricted view, anything else selects the full listing.
    pub filter: Option<String>,
}

impl CourseDirectoryRequest {
    /// Resolves the requested visibility scope.
    ///
    /// Only the exact value [`ASSIGNED_FILTER`] restricts the listing;
    /// an absent or unrecognized filter yields the full directory.
    #[must_use]
    pub fn scope(&self) -> VisibilityScope {
        if self.filter.as_deref() == Some(ASSIGNED_FILTER) {
            VisibilityScope::AssignedOnly
        } else {
            VisibilityScope::All
        }
    }
}

/// One lab row in the course directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LabInfo {
    /// The canonical lab identifier.
    pub lab_id: i64,
    /// The lab name.
    pub name: String,
    /// The assigned TA's username, if any.
    pub ta_username: Option<String>,
}

/// One course entry in the course directory, with its assignments.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseInfo {
    /// The canonical course identifier.
    pub course_id: i64,
    /// The course name.
    pub name: String,
    /// Usernames of the instructors assigned to the course.
    pub instructors: Vec<String>,
    /// The course's labs.
    pub labs: Vec<LabInfo>,
}

/// API response for the course directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseDirectoryResponse {
    /// The visible courses, in roster order.
    pub courses: Vec<CourseInfo>,
}

/// API response for the admin home page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminHomeResponse {
    /// A greeting for the admin.
    pub message: String,
    /// The total number of registered users.
    pub user_count: usize,
    /// The total number of courses.
    pub course_count: usize,
}
