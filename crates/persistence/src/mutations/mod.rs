// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules for the persistence layer.
//!
//! This module contains all state-changing operations. Entities are
//! created by admin action and removed only by dropping the database;
//! there is no update or delete API (labs in particular keep their
//! course association for life).
//!
//! ## Module Organization
//!
//! - `users` — User creation
//! - `courses` — Course creation and instructor assignment
//! - `labs` — Lab creation

pub mod courses;
pub mod labs;
pub mod users;

pub use courses::{add_instructor, create_course};
pub use labs::create_lab;
pub use users::create_user;
