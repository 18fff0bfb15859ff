// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization checks for the API boundary.
//!
//! The acting user is an ordinary domain [`User`]; there is no separate
//! operator concept. Every structural mutation requires the Admin role,
//! and the checks here are the single place that rule is enforced.

use course_roster_domain::{check_admin, User};

use crate::error::AuthError;

/// The message shown to non-admins who request the admin home page.
pub const ADMIN_ACCESS_DENIED_MESSAGE: &str = "You cannot access this page.";

/// Authorization service for enforcing role-based access control.
///
/// Authorization is evaluated against the acting user's role. An absent
/// acting user (unknown username, or none supplied) is never authorized
/// for admin-only actions.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(actor: Option<&User>, action: &str) -> Result<(), AuthError> {
        if check_admin(actor) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            })
        }
    }

    /// Checks if an actor is authorized to register a user.
    ///
    /// Only Admin users may register users.
    ///
    /// # Arguments
    ///
    /// * `actor` - The acting user, if one was resolved
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_register_user(actor: Option<&User>) -> Result<(), AuthError> {
        Self::require_admin(actor, "register_user")
    }

    /// Checks if an actor is authorized to create a course.
    ///
    /// Only Admin users may create courses.
    ///
    /// # Arguments
    ///
    /// * `actor` - The acting user, if one was resolved
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_create_course(actor: Option<&User>) -> Result<(), AuthError> {
        Self::require_admin(actor, "create_course")
    }

    /// Checks if an actor is authorized to create a lab.
    ///
    /// Only Admin users may create labs.
    ///
    /// # Arguments
    ///
    /// * `actor` - The acting user, if one was resolved
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_create_lab(actor: Option<&User>) -> Result<(), AuthError> {
        Self::require_admin(actor, "create_lab")
    }

    /// Checks if an actor is authorized to assign an instructor to a course.
    ///
    /// Only Admin users may assign instructors.
    ///
    /// # Arguments
    ///
    /// * `actor` - The acting user, if one was resolved
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_assign_instructor(actor: Option<&User>) -> Result<(), AuthError> {
        Self::require_admin(actor, "assign_instructor")
    }

    /// Checks if an actor is authorized to view the admin home page.
    ///
    /// Only Admin users may view it; everyone else is told
    /// [`ADMIN_ACCESS_DENIED_MESSAGE`].
    ///
    /// # Arguments
    ///
    /// * `actor` - The acting user, if one was resolved
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_admin_home(actor: Option<&User>) -> Result<(), AuthError> {
        Self::require_admin(actor, "admin_home")
    }
}
