// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod directory_tests;
mod initialization_tests;

use crate::Persistence;

/// Seeded identifiers for the reference roster.
pub struct RosterFixture {
    pub persistence: Persistence,
    pub admin_id: i64,
    pub instructor_id: i64,
    pub ta_id: i64,
    pub course1_id: i64,
    pub course2_id: i64,
    pub course3_id: i64,
    pub lab1_id: i64,
    pub lab2_id: i64,
    pub lab3_id: i64,
}

/// Builds the reference roster:
///
/// - Course 1: instructor `instructor`, Lab 1 with TA `ta`
/// - Course 2: instructor `instructor`, Lab 2 unassigned
/// - Course 3: no instructor, Lab 3 with TA `ta`
pub fn setup_test_roster() -> RosterFixture {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");

    let admin_id = persistence
        .create_user("admin", "Admin", "Admin", "User")
        .expect("Failed to create admin");
    let instructor_id = persistence
        .create_user("instructor", "Instructor", "Instructor", "User")
        .expect("Failed to create instructor");
    let ta_id = persistence
        .create_user("ta", "TA", "TA", "User")
        .expect("Failed to create ta");

    let course1_id = persistence
        .create_course("Course 1")
        .expect("Failed to create Course 1");
    let course2_id = persistence
        .create_course("Course 2")
        .expect("Failed to create Course 2");
    let course3_id = persistence
        .create_course("Course 3")
        .expect("Failed to create Course 3");

    persistence
        .add_instructor(course1_id, instructor_id)
        .expect("Failed to assign instructor to Course 1");
    persistence
        .add_instructor(course2_id, instructor_id)
        .expect("Failed to assign instructor to Course 2");

    let lab1_id = persistence
        .create_lab(course1_id, "Lab 1", Some(ta_id))
        .expect("Failed to create Lab 1");
    let lab2_id = persistence
        .create_lab(course2_id, "Lab 2", None)
        .expect("Failed to create Lab 2");
    let lab3_id = persistence
        .create_lab(course3_id, "Lab 3", Some(ta_id))
        .expect("Failed to create Lab 3");

    RosterFixture {
        persistence,
        admin_id,
        instructor_id,
        ta_id,
        course1_id,
        course2_id,
        course3_id,
        lab1_id,
        lab2_id,
        lab3_id,
    }
}
