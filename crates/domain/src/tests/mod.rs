// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod access;

use crate::{Course, Lab, Role, RosterEntry, User, Username};

pub fn create_test_user(username: &str, role: Role) -> User {
    User::new(
        Username::new(username),
        role,
        String::from("Test"),
        String::from("User"),
    )
}

/// Builds the reference roster:
///
/// - Course 1: instructor `instructor`, Lab 1 with TA `ta`
/// - Course 2: instructor `instructor`, Lab 2 unassigned
/// - Course 3: no instructor, Lab 3 with TA `ta`
pub fn create_test_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(
            Course::with_id(1, "Course 1"),
            vec![Username::new("instructor")],
            vec![Lab::with_id(1, "Lab 1", Some(Username::new("ta")))],
        ),
        RosterEntry::new(
            Course::with_id(2, "Course 2"),
            vec![Username::new("instructor")],
            vec![Lab::with_id(2, "Lab 2", None)],
        ),
        RosterEntry::new(
            Course::with_id(3, "Course 3"),
            vec![],
            vec![Lab::with_id(3, "Lab 3", Some(Username::new("ta")))],
        ),
    ]
}
