// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the course visibility queries and the roster snapshot.

use course_roster_domain::Username;

use super::{setup_test_roster, RosterFixture};
use crate::{CourseRecord, LabRecord};

fn course_names(records: &[CourseRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn test_courses_for_instructor_returns_assigned_courses() {
    let RosterFixture {
        mut persistence,
        instructor_id,
        ..
    } = setup_test_roster();

    let courses = persistence
        .courses_for_instructor(instructor_id)
        .expect("Failed to query instructor courses");

    assert_eq!(course_names(&courses), vec!["Course 1", "Course 2"]);
}

#[test]
fn test_courses_for_instructor_with_no_assignments_is_empty() {
    let RosterFixture {
        mut persistence,
        ta_id,
        ..
    } = setup_test_roster();

    let courses = persistence
        .courses_for_instructor(ta_id)
        .expect("Failed to query instructor courses");

    assert!(courses.is_empty());
}

#[test]
fn test_courses_with_lab_assigned_to_returns_ta_courses() {
    let RosterFixture {
        mut persistence,
        ta_id,
        ..
    } = setup_test_roster();

    let courses = persistence
        .courses_with_lab_assigned_to(ta_id)
        .expect("Failed to query TA courses");

    assert_eq!(course_names(&courses), vec!["Course 1", "Course 3"]);
}

#[test]
fn test_courses_with_lab_assigned_to_deduplicates_multi_lab_courses() {
    let RosterFixture {
        mut persistence,
        ta_id,
        course1_id,
        ..
    } = setup_test_roster();

    // A second lab in Course 1 held by the same TA must not produce a
    // duplicate course row.
    persistence
        .create_lab(course1_id, "Lab 1b", Some(ta_id))
        .expect("Failed to create second lab");

    let courses = persistence
        .courses_with_lab_assigned_to(ta_id)
        .expect("Failed to query TA courses");

    assert_eq!(course_names(&courses), vec!["Course 1", "Course 3"]);
}

#[test]
fn test_courses_with_lab_assigned_to_for_unassigned_user_is_empty() {
    let RosterFixture {
        mut persistence,
        instructor_id,
        ..
    } = setup_test_roster();

    let courses = persistence
        .courses_with_lab_assigned_to(instructor_id)
        .expect("Failed to query TA courses");

    assert!(courses.is_empty());
}

#[test]
fn test_courses_without_instructors() {
    let RosterFixture { mut persistence, .. } = setup_test_roster();

    let courses = persistence
        .courses_without_instructors()
        .expect("Failed to query unstaffed courses");

    assert_eq!(course_names(&courses), vec!["Course 3"]);
}

#[test]
fn test_instructors_for_course() {
    let RosterFixture {
        mut persistence,
        course1_id,
        course3_id,
        ..
    } = setup_test_roster();

    let staffed = persistence
        .instructors_for_course(course1_id)
        .expect("Failed to query instructors");
    let unstaffed = persistence
        .instructors_for_course(course3_id)
        .expect("Failed to query instructors");

    assert_eq!(staffed.len(), 1);
    assert_eq!(staffed[0].username, "instructor");
    assert!(unstaffed.is_empty());
}

#[test]
fn test_get_user_by_id_round_trips() {
    let RosterFixture {
        mut persistence,
        admin_id,
        ..
    } = setup_test_roster();

    let record = persistence
        .get_user_by_id(admin_id)
        .expect("Failed to fetch user");

    assert_eq!(record.username, "admin");
    assert_eq!(record.role, "Admin");
}

#[test]
fn test_labs_for_course() {
    let RosterFixture {
        mut persistence,
        course1_id,
        lab1_id,
        ta_id,
        ..
    } = setup_test_roster();

    let labs: Vec<LabRecord> = persistence
        .labs_for_course(course1_id)
        .expect("Failed to query labs");

    assert_eq!(labs.len(), 1);
    assert_eq!(labs[0].lab_id, lab1_id);
    assert_eq!(labs[0].name, "Lab 1");
    assert_eq!(labs[0].ta_user_id, Some(ta_id));
}

#[test]
fn test_labs_without_ta() {
    let RosterFixture {
        mut persistence,
        lab2_id,
        ..
    } = setup_test_roster();

    let labs = persistence
        .labs_without_ta()
        .expect("Failed to query unassigned labs");

    assert_eq!(labs.len(), 1);
    assert_eq!(labs[0].lab_id, lab2_id);
}

#[test]
fn test_labs_assigned_to() {
    let RosterFixture {
        mut persistence,
        ta_id,
        lab1_id,
        lab3_id,
        ..
    } = setup_test_roster();

    let labs = persistence
        .labs_assigned_to(ta_id)
        .expect("Failed to query TA labs");

    let lab_ids: Vec<i64> = labs.iter().map(|lab| lab.lab_id).collect();
    assert_eq!(lab_ids, vec![lab1_id, lab3_id]);
}

#[test]
fn test_load_roster_reconstructs_full_snapshot() {
    let RosterFixture { mut persistence, .. } = setup_test_roster();

    let roster = persistence.load_roster().expect("Failed to load roster");

    assert_eq!(roster.len(), 3);

    let first = &roster[0];
    assert_eq!(first.course.name(), "Course 1");
    assert_eq!(first.instructors, vec![Username::new("instructor")]);
    assert_eq!(first.labs.len(), 1);
    assert_eq!(first.labs[0].name, "Lab 1");
    assert_eq!(first.labs[0].ta, Some(Username::new("ta")));

    let second = &roster[1];
    assert_eq!(second.course.name(), "Course 2");
    assert_eq!(second.instructors, vec![Username::new("instructor")]);
    assert_eq!(second.labs[0].name, "Lab 2");
    assert_eq!(second.labs[0].ta, None);

    let third = &roster[2];
    assert_eq!(third.course.name(), "Course 3");
    assert!(third.instructors.is_empty());
    assert_eq!(third.labs[0].ta, Some(Username::new("ta")));
}

#[test]
fn test_load_roster_groups_instructors_and_labs_by_course() {
    let RosterFixture {
        mut persistence,
        course1_id,
        ..
    } = setup_test_roster();

    // A second instructor on Course 1 whose username sorts first.
    let aux_id = persistence
        .create_user("aux_instructor", "Instructor", "Aux", "Teacher")
        .expect("Failed to create user");
    persistence
        .add_instructor(course1_id, aux_id)
        .expect("Failed to assign instructor");

    let roster = persistence.load_roster().expect("Failed to load roster");

    let first = &roster[0];
    assert_eq!(first.course.name(), "Course 1");
    assert_eq!(
        first.instructors,
        vec![Username::new("aux_instructor"), Username::new("instructor")]
    );
    assert_eq!(first.labs.len(), 1);
    assert_eq!(first.labs[0].name, "Lab 1");

    // The second assignment must not leak into the other courses.
    let second = &roster[1];
    assert_eq!(second.course.name(), "Course 2");
    assert_eq!(second.instructors, vec![Username::new("instructor")]);
    assert_eq!(second.labs[0].name, "Lab 2");
}

#[test]
fn test_load_roster_includes_courses_without_labs() {
    let RosterFixture { mut persistence, .. } = setup_test_roster();

    persistence
        .create_course("Course 4")
        .expect("Failed to create course");

    let roster = persistence.load_roster().expect("Failed to load roster");

    assert_eq!(roster.len(), 4);
    let fourth = &roster[3];
    assert_eq!(fourth.course.name(), "Course 4");
    assert!(fourth.instructors.is_empty());
    assert!(fourth.labs.is_empty());
}
