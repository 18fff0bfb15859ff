// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for the persistence layer.
//!
//! This module contains all read-only queries, including the
//! database-backed course visibility filters.
//!
//! ## Module Organization
//!
//! - `users` — User lookups and listings
//! - `courses` — Course listings and the assigned-course filters
//! - `labs` — Lab listings and TA-assignment lookups
//! - `directory` — Full roster snapshot assembly

pub mod courses;
pub mod directory;
pub mod labs;
pub mod users;

pub use courses::{
    courses_for_instructor, courses_with_lab_assigned_to, courses_without_instructors, get_course,
    instructors_for_course, list_courses,
};
pub use directory::load_roster;
pub use labs::{get_lab, labs_assigned_to, labs_for_course, labs_without_ta};
pub use users::{get_user_by_id, get_user_by_username, list_users};
