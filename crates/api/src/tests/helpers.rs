// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared test fixtures for the API layer.

use course_roster_domain::User;
use course_roster_persistence::Persistence;

use crate::handlers::{
    assign_instructor, create_course, create_lab, register_user, resolve_acting_user,
};
use crate::request_response::{
    AssignInstructorRequest, CreateCourseRequest, CreateLabRequest, RegisterUserRequest,
};

/// A seeded database with the reference roster and one user per role.
pub struct ApiFixture {
    pub persistence: Persistence,
    pub course1_id: i64,
    pub course2_id: i64,
    pub course3_id: i64,
}

/// Creates a fresh database containing only the bootstrap admin.
///
/// The first admin is inserted directly; every later row goes through
/// the API acting as that admin.
pub fn setup_with_admin() -> Persistence {
    let mut persistence = Persistence::new_in_memory().expect("Failed to create database");
    persistence
        .create_user("admin", "Admin", "Admin", "User")
        .expect("Failed to create bootstrap admin");
    persistence
}

/// Resolves the acting user for a username, panicking on query failure.
pub fn actor(persistence: &mut Persistence, username: &str) -> Option<User> {
    resolve_acting_user(persistence, Some(username)).expect("Failed to resolve acting user")
}

/// Builds the reference roster through the API, acting as the admin:
///
/// - Course 1: instructor `instructor`, Lab 1 with TA `ta`
/// - Course 2: instructor `instructor`, Lab 2 unassigned
/// - Course 3: no instructor, Lab 3 with TA `ta`
pub fn setup_reference_roster() -> ApiFixture {
    let mut persistence = setup_with_admin();
    let admin = actor(&mut persistence, "admin");

    for (username, role, first_name, last_name) in [
        ("instructor", "Instructor", "Ida", "Instructor"),
        ("ta", "TA", "Tess", "Assistant"),
    ] {
        register_user(
            &mut persistence,
            RegisterUserRequest {
                username: String::from(username),
                role: String::from(role),
                first_name: String::from(first_name),
                last_name: String::from(last_name),
            },
            admin.as_ref(),
        )
        .expect("Failed to register user");
    }

    let mut course_ids: Vec<i64> = Vec::new();
    for name in ["Course 1", "Course 2", "Course 3"] {
        let response = create_course(
            &mut persistence,
            CreateCourseRequest {
                name: String::from(name),
            },
            admin.as_ref(),
        )
        .expect("Failed to create course");
        course_ids.push(response.course_id);
    }
    let (course1_id, course2_id, course3_id) = (course_ids[0], course_ids[1], course_ids[2]);

    for course_id in [course1_id, course2_id] {
        assign_instructor(
            &mut persistence,
            AssignInstructorRequest {
                course_id,
                instructor_username: String::from("instructor"),
            },
            admin.as_ref(),
        )
        .expect("Failed to assign instructor");
    }

    for (course_id, name, ta_username) in [
        (course1_id, "Lab 1", Some(String::from("ta"))),
        (course2_id, "Lab 2", None),
        (course3_id, "Lab 3", Some(String::from("ta"))),
    ] {
        create_lab(
            &mut persistence,
            CreateLabRequest {
                course_id,
                name: String::from(name),
                ta_username,
            },
            admin.as_ref(),
        )
        .expect("Failed to create lab");
    }

    ApiFixture {
        persistence,
        course1_id,
        course2_id,
        course3_id,
    }
}
