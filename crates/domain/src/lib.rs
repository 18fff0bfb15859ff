// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod access;
mod error;
mod types;
mod validation;
mod visibility;

#[cfg(test)]
mod tests;

pub use access::{ADMIN_ROLE_TAG, check_admin, is_admin_tag};
pub use error::DomainError;
pub use types::{Course, Lab, Role, User, Username};
pub use validation::{
    validate_course_name, validate_lab_name, validate_user_fields, validate_username_unique,
};
pub use visibility::{RosterEntry, VisibilityScope, visible_courses};
