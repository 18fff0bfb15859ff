// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;

use course_roster_domain::{
    DomainError, Role, RosterEntry, User, Username, VisibilityScope, validate_course_name,
    validate_lab_name, validate_user_fields, validate_username_unique, visible_courses,
};
use course_roster_persistence::{Persistence, PersistenceError, UserRecord};
use tracing::info;

use crate::auth::AuthorizationService;
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AdminHomeResponse, AssignInstructorRequest, AssignInstructorResponse, CourseDirectoryRequest,
    CourseDirectoryResponse, CourseInfo, CreateCourseRequest, CreateCourseResponse,
    CreateLabRequest, CreateLabResponse, LabInfo, RegisterUserRequest, RegisterUserResponse,
};

/// Resolves the acting user for a request.
///
/// An absent or unknown username resolves to `None`, which downstream
/// authorization treats as not authorized. Unknown actors are not an
/// error here; admin-only handlers reject them uniformly without
/// revealing whether the username exists.
///
/// # Arguments
///
/// * `persistence` - The persistence layer to query
/// * `acting_username` - The username supplied with the request, if any
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored role
/// tag cannot be parsed.
pub fn resolve_acting_user(
    persistence: &mut Persistence,
    acting_username: Option<&str>,
) -> Result<Option<User>, ApiError> {
    let Some(username) = acting_username else {
        return Ok(None);
    };

    let record: UserRecord = match persistence.get_user_by_username(username) {
        Ok(record) => record,
        Err(PersistenceError::UserNotFound(_)) => return Ok(None),
        Err(e) => return Err(translate_persistence_error(e)),
    };

    Ok(Some(user_from_record(record)?))
}

/// Reconstructs a domain user from a stored row.
///
/// Rows are written through `register_user`, which validates the role
/// tag, so a parse failure here indicates a corrupted store.
fn user_from_record(record: UserRecord) -> Result<User, ApiError> {
    let role: Role = Role::from_str(&record.role).map_err(|_| ApiError::Internal {
        message: format!(
            "Stored role tag '{}' for user '{}' is not a valid role",
            record.role, record.username
        ),
    })?;

    Ok(User::with_id(
        record.user_id,
        Username::new(&record.username),
        role,
        record.first_name,
        record.last_name,
    ))
}

/// Registers a new user via the API boundary with authorization.
///
/// This function:
/// - Verifies the actor is authorized (Admin role required)
/// - Validates the role tag (case-sensitive) and the field constraints
/// - Persists the user and returns the canonical ID
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to register a user
/// * `acting_user` - The acting user performing this action, if resolved
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The role tag or any field validation fails
/// - The username is already in use
pub fn register_user(
    persistence: &mut Persistence,
    request: RegisterUserRequest,
    acting_user: Option<&User>,
) -> Result<RegisterUserResponse, ApiError> {
    // Enforce authorization before touching the request
    AuthorizationService::authorize_register_user(acting_user)?;

    let RegisterUserRequest {
        username,
        role,
        first_name,
        last_name,
    } = request;

    // Role tags are case-sensitive; 'instructor' is rejected here
    let role: Role = Role::from_str(&role).map_err(translate_domain_error)?;

    let user: User = User::new(
        Username::new(&username),
        role,
        first_name.clone(),
        last_name.clone(),
    );
    validate_user_fields(&user).map_err(translate_domain_error)?;

    // Uniqueness is checked against the current user list up front; the
    // UNIQUE constraint on the insert below remains the backstop.
    let existing_users: Vec<User> = persistence
        .list_users()
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(user_from_record)
        .collect::<Result<Vec<User>, ApiError>>()?;
    validate_username_unique(&user.username, &existing_users).map_err(translate_domain_error)?;

    let user_id: i64 = persistence
        .create_user(&username, role.as_str(), &first_name, &last_name)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => {
                translate_domain_error(DomainError::DuplicateUsername {
                    username: username.clone(),
                })
            }
            _ => translate_persistence_error(e),
        })?;

    info!(user_id, "User '{}' registered", username);

    Ok(RegisterUserResponse {
        user_id,
        role: role.as_str().to_string(),
        message: format!("User '{username}' registered successfully"),
        username,
    })
}

/// Creates a new course via the API boundary with authorization.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to create a course
/// * `acting_user` - The acting user performing this action, if resolved
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The course name is empty
/// - The course name is already in use
pub fn create_course(
    persistence: &mut Persistence,
    request: CreateCourseRequest,
    acting_user: Option<&User>,
) -> Result<CreateCourseResponse, ApiError> {
    AuthorizationService::authorize_create_course(acting_user)?;

    let CreateCourseRequest { name } = request;

    validate_course_name(&name).map_err(translate_domain_error)?;

    let course_id: i64 = persistence.create_course(&name).map_err(|e| match e {
        PersistenceError::UniqueViolation(_) => {
            translate_domain_error(DomainError::DuplicateCourse { name: name.clone() })
        }
        _ => translate_persistence_error(e),
    })?;

    info!(course_id, "Course '{}' created", name);

    Ok(CreateCourseResponse {
        course_id,
        message: format!("Course '{name}' created successfully"),
        name,
    })
}

/// Creates a new lab within a course via the API boundary with authorization.
///
/// The owning course must exist, and if a TA is supplied the referenced
/// user must exist and hold the TA role.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to create a lab
/// * `acting_user` - The acting user performing this action, if resolved
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The lab name is empty, or taken within the course
/// - The course does not exist
/// - The TA username does not exist or does not hold the TA role
pub fn create_lab(
    persistence: &mut Persistence,
    request: CreateLabRequest,
    acting_user: Option<&User>,
) -> Result<CreateLabResponse, ApiError> {
    AuthorizationService::authorize_create_lab(acting_user)?;

    let CreateLabRequest {
        course_id,
        name,
        ta_username,
    } = request;

    validate_lab_name(&name).map_err(translate_domain_error)?;

    let course = persistence
        .get_course(course_id)
        .map_err(translate_persistence_error)?;

    let ta_user_id: Option<i64> = match ta_username.as_deref() {
        Some(ta) => Some(resolve_role_holder(persistence, ta, Role::Ta)?),
        None => None,
    };

    let lab_id: i64 = persistence
        .create_lab(course_id, &name, ta_user_id)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => {
                translate_domain_error(DomainError::DuplicateLab {
                    course: course.name.clone(),
                    name: name.clone(),
                })
            }
            _ => translate_persistence_error(e),
        })?;

    info!(lab_id, course_id, "Lab '{}' created", name);

    Ok(CreateLabResponse {
        lab_id,
        course_id,
        message: format!("Lab '{}' created successfully in course '{}'", name, course.name),
        name,
        ta_username,
    })
}

/// Assigns an instructor to a course via the API boundary with authorization.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The API request to assign an instructor
/// * `acting_user` - The acting user performing this action, if resolved
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an Admin)
/// - The course does not exist
/// - The username does not exist or does not hold the Instructor role
/// - The instructor is already assigned to the course
pub fn assign_instructor(
    persistence: &mut Persistence,
    request: AssignInstructorRequest,
    acting_user: Option<&User>,
) -> Result<AssignInstructorResponse, ApiError> {
    AuthorizationService::authorize_assign_instructor(acting_user)?;

    let AssignInstructorRequest {
        course_id,
        instructor_username,
    } = request;

    let course = persistence
        .get_course(course_id)
        .map_err(translate_persistence_error)?;

    let instructor_id: i64 =
        resolve_role_holder(persistence, &instructor_username, Role::Instructor)?;

    persistence
        .add_instructor(course_id, instructor_id)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => {
                translate_domain_error(DomainError::DuplicateAssignment {
                    course: course.name.clone(),
                    username: instructor_username.clone(),
                })
            }
            _ => translate_persistence_error(e),
        })?;

    info!(
        course_id,
        "Instructor '{}' assigned to course '{}'", instructor_username, course.name
    );

    Ok(AssignInstructorResponse {
        course_id,
        message: format!(
            "Instructor '{instructor_username}' assigned to course '{}'",
            course.name
        ),
        course_name: course.name,
        instructor_username,
    })
}

/// Looks up a user by username and verifies they hold the required role.
///
/// Assignments name users by username; the role check keeps an admin
/// from wiring an Instructor into a TA slot or vice versa.
fn resolve_role_holder(
    persistence: &mut Persistence,
    username: &str,
    required_role: Role,
) -> Result<i64, ApiError> {
    let record: UserRecord = persistence
        .get_user_by_username(username)
        .map_err(|e| match e {
            PersistenceError::UserNotFound(username) => {
                translate_domain_error(DomainError::UserNotFound { username })
            }
            _ => translate_persistence_error(e),
        })?;

    if record.role != required_role.as_str() {
        return Err(translate_domain_error(DomainError::RoleMismatch {
            username: username.to_string(),
            required_role: required_role.as_str().to_string(),
            actual_role: record.role,
        }));
    }

    Ok(record.user_id)
}

/// Returns the course directory visible to the acting user.
///
/// The full listing is open to everyone, including requests with no
/// resolved acting user. The restricted listing shows an Instructor the
/// courses they are assigned to and a TA the courses containing a lab
/// they hold; an unresolved viewer sees an empty restricted list.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The directory request
/// * `acting_user` - The viewing user, if resolved
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded.
pub fn course_directory(
    persistence: &mut Persistence,
    request: &CourseDirectoryRequest,
    acting_user: Option<&User>,
) -> Result<CourseDirectoryResponse, ApiError> {
    let scope: VisibilityScope = request.scope();
    let roster: Vec<RosterEntry> = persistence
        .load_roster()
        .map_err(translate_persistence_error)?;

    let visible: Vec<&RosterEntry> = match acting_user {
        Some(viewer) => visible_courses(&roster, viewer, scope),
        None if scope == VisibilityScope::All => roster.iter().collect(),
        None => Vec::new(),
    };

    let courses: Vec<CourseInfo> = visible
        .into_iter()
        .map(course_info)
        .collect::<Result<Vec<CourseInfo>, ApiError>>()?;

    Ok(CourseDirectoryResponse { courses })
}

fn course_info(entry: &RosterEntry) -> Result<CourseInfo, ApiError> {
    let course_id: i64 = entry.course.course_id().ok_or_else(|| ApiError::Internal {
        message: format!("Course '{}' has no canonical ID", entry.course.name()),
    })?;

    let labs: Vec<LabInfo> = entry
        .labs
        .iter()
        .map(|lab| {
            let lab_id: i64 = lab.lab_id.ok_or_else(|| ApiError::Internal {
                message: format!("Lab '{}' has no canonical ID", lab.name),
            })?;
            Ok(LabInfo {
                lab_id,
                name: lab.name.clone(),
                ta_username: lab.ta.as_ref().map(|ta| ta.value().to_string()),
            })
        })
        .collect::<Result<Vec<LabInfo>, ApiError>>()?;

    Ok(CourseInfo {
        course_id,
        name: entry.course.name().to_string(),
        instructors: entry
            .instructors
            .iter()
            .map(|username| username.value().to_string())
            .collect(),
        labs,
    })
}

/// Returns the admin home page content.
///
/// Only Admin users may view it; everyone else is rejected.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `acting_user` - The acting user, if resolved
///
/// # Errors
///
/// Returns an error if the actor does not have the Admin role or the
/// counts cannot be queried.
pub fn admin_home(
    persistence: &mut Persistence,
    acting_user: Option<&User>,
) -> Result<AdminHomeResponse, ApiError> {
    AuthorizationService::authorize_admin_home(acting_user)?;

    let user_count: usize = persistence
        .list_users()
        .map_err(translate_persistence_error)?
        .len();
    let course_count: usize = persistence
        .list_courses()
        .map_err(translate_persistence_error)?
        .len();

    let message: String = acting_user.map_or_else(
        || String::from("Welcome."),
        |user| format!("Welcome, {}.", user.display_name()),
    );

    Ok(AdminHomeResponse {
        message,
        user_count,
        course_count,
    })
}
