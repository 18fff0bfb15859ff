// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use course_roster_domain::DomainError;
use course_roster_persistence::PersistenceError;

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRole(tag) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("{tag:?} is not a valid role (role tags are case-sensitive)"),
        },
        DomainError::InvalidUsername(msg) => ApiError::InvalidInput {
            field: String::from("username"),
            message: msg,
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidCourseName(msg) => ApiError::InvalidInput {
            field: String::from("course_name"),
            message: msg,
        },
        DomainError::InvalidLabName(msg) => ApiError::InvalidInput {
            field: String::from("lab_name"),
            message: msg,
        },
        DomainError::DuplicateUsername { username } => ApiError::DomainRuleViolation {
            rule: String::from("unique_username"),
            message: format!("User with username '{username}' already exists"),
        },
        DomainError::DuplicateCourse { name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_course_name"),
            message: format!("Course '{name}' already exists"),
        },
        DomainError::DuplicateLab { course, name } => ApiError::DomainRuleViolation {
            rule: String::from("unique_lab_name"),
            message: format!("Lab '{name}' already exists in course '{course}'"),
        },
        DomainError::DuplicateAssignment { course, username } => ApiError::DomainRuleViolation {
            rule: String::from("unique_instructor_assignment"),
            message: format!("Instructor '{username}' is already assigned to course '{course}'"),
        },
        DomainError::UserNotFound { username } => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{username}' does not exist"),
        },
        DomainError::CourseNotFound { course_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Course"),
            message: format!("Course with ID {course_id} does not exist"),
        },
        DomainError::LabNotFound { lab_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Lab"),
            message: format!("Lab with ID {lab_id} does not exist"),
        },
        DomainError::RoleMismatch {
            username,
            required_role,
            actual_role,
        } => ApiError::DomainRuleViolation {
            rule: String::from("role_mismatch"),
            message: format!(
                "User '{username}' holds role {actual_role} but the assignment requires {required_role}"
            ),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Constraint violations are expected to be caught and translated by
/// the handlers before reaching this point; anything that falls through
/// here is an internal failure.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::UserNotFound(username) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User '{username}' does not exist"),
        },
        PersistenceError::CourseNotFound(course_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Course"),
            message: format!("Course with ID {course_id} does not exist"),
        },
        PersistenceError::LabNotFound(lab_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Lab"),
            message: format!("Lab with ID {lab_id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        _ => ApiError::Internal {
            message: format!("Persistence failure: {err}"),
        },
    }
}
