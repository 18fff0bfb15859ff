// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Course Roster Service.
//!
//! This crate sits between the transport (the HTTP server) and the
//! domain/persistence layers. It owns:
//!
//! - Authorization: every structural mutation requires the Admin role,
//!   enforced in [`auth::AuthorizationService`] before any work happens
//! - Request/response DTOs, distinct from domain types
//! - Explicit error translation, so domain and persistence errors never
//!   leak through the API contract

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{ADMIN_ACCESS_DENIED_MESSAGE, AuthorizationService};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    admin_home, assign_instructor, course_directory, create_course, create_lab, register_user,
    resolve_acting_user,
};
pub use request_response::{
    ASSIGNED_FILTER, AdminHomeResponse, AssignInstructorRequest, AssignInstructorResponse,
    CourseDirectoryRequest, CourseDirectoryResponse, CourseInfo, CreateCourseRequest,
    CreateCourseResponse, CreateLabRequest, CreateLabResponse, LabInfo, RegisterUserRequest,
    RegisterUserResponse,
};
