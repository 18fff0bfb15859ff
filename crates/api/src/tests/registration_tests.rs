// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation and domain-rule tests for the mutation handlers.

use crate::error::ApiError;
use crate::handlers::{assign_instructor, create_course, create_lab, register_user};
use crate::request_response::{
    AssignInstructorRequest, CreateCourseRequest, CreateLabRequest, RegisterUserRequest,
};
use crate::tests::helpers::{actor, setup_reference_roster};

#[test]
fn test_register_user_rejects_lowercase_role_tag() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = register_user(
        &mut fixture.persistence,
        RegisterUserRequest {
            username: String::from("newuser"),
            role: String::from("instructor"),
            first_name: String::from("New"),
            last_name: String::from("User"),
        },
        admin.as_ref(),
    );

    match result.unwrap_err() {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "role");
            assert!(message.contains("case-sensitive"));
        }
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_register_user_rejects_empty_username() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = register_user(
        &mut fixture.persistence,
        RegisterUserRequest {
            username: String::new(),
            role: String::from("TA"),
            first_name: String::from("New"),
            last_name: String::from("User"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "username"
    ));
}

#[test]
fn test_register_user_rejects_whitespace_username() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = register_user(
        &mut fixture.persistence,
        RegisterUserRequest {
            username: String::from("new user"),
            role: String::from("TA"),
            first_name: String::from("New"),
            last_name: String::from("User"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "username"
    ));
}

#[test]
fn test_register_user_rejects_duplicate_username() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = register_user(
        &mut fixture.persistence,
        RegisterUserRequest {
            username: String::from("ta"),
            role: String::from("TA"),
            first_name: String::from("Second"),
            last_name: String::from("Assistant"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_username"
    ));
}

#[test]
fn test_register_user_duplicate_check_is_case_sensitive() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    // "Ta" is a different username than the existing "ta".
    let response = register_user(
        &mut fixture.persistence,
        RegisterUserRequest {
            username: String::from("Ta"),
            role: String::from("TA"),
            first_name: String::from("Second"),
            last_name: String::from("Assistant"),
        },
        admin.as_ref(),
    )
    .expect("Usernames differing only in case are distinct");

    assert_eq!(response.username, "Ta");
}

#[test]
fn test_create_course_rejects_empty_name() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_course(
        &mut fixture.persistence,
        CreateCourseRequest {
            name: String::from("   "),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "course_name"
    ));
}

#[test]
fn test_create_course_rejects_duplicate_name() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_course(
        &mut fixture.persistence,
        CreateCourseRequest {
            name: String::from("Course 1"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_course_name"
    ));
}

#[test]
fn test_create_lab_rejects_unknown_course() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_lab(
        &mut fixture.persistence,
        CreateLabRequest {
            course_id: 9999,
            name: String::from("Orphan Lab"),
            ta_username: None,
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "Course"
    ));
}

#[test]
fn test_create_lab_rejects_unknown_ta() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_lab(
        &mut fixture.persistence,
        CreateLabRequest {
            course_id: fixture.course1_id,
            name: String::from("Lab 9"),
            ta_username: Some(String::from("nobody")),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { resource_type, .. }) if resource_type == "User"
    ));
}

#[test]
fn test_create_lab_rejects_non_ta_assignee() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_lab(
        &mut fixture.persistence,
        CreateLabRequest {
            course_id: fixture.course1_id,
            name: String::from("Lab 9"),
            ta_username: Some(String::from("instructor")),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "role_mismatch"
    ));
}

#[test]
fn test_create_lab_rejects_duplicate_name_within_course() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = create_lab(
        &mut fixture.persistence,
        CreateLabRequest {
            course_id: fixture.course1_id,
            name: String::from("Lab 1"),
            ta_username: None,
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_lab_name"
    ));
}

#[test]
fn test_create_lab_allows_same_name_in_another_course() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    create_lab(
        &mut fixture.persistence,
        CreateLabRequest {
            course_id: fixture.course2_id,
            name: String::from("Lab 1"),
            ta_username: None,
        },
        admin.as_ref(),
    )
    .expect("Lab names are scoped to their course");
}

#[test]
fn test_assign_instructor_rejects_non_instructor() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = assign_instructor(
        &mut fixture.persistence,
        AssignInstructorRequest {
            course_id: fixture.course3_id,
            instructor_username: String::from("ta"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "role_mismatch"
    ));
}

#[test]
fn test_assign_instructor_rejects_duplicate_assignment() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let result = assign_instructor(
        &mut fixture.persistence,
        AssignInstructorRequest {
            course_id: fixture.course1_id,
            instructor_username: String::from("instructor"),
        },
        admin.as_ref(),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_instructor_assignment"
    ));
}

#[test]
fn test_assign_instructor_to_unstaffed_course() {
    let mut fixture = setup_reference_roster();
    let admin = actor(&mut fixture.persistence, "admin");

    let response = assign_instructor(
        &mut fixture.persistence,
        AssignInstructorRequest {
            course_id: fixture.course3_id,
            instructor_username: String::from("instructor"),
        },
        admin.as_ref(),
    )
    .expect("Failed to assign instructor");

    assert_eq!(response.course_name, "Course 3");
    assert_eq!(response.instructor_username, "instructor");
}
