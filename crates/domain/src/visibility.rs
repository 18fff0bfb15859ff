// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The course/lab visibility filter.
//!
//! Given a roster snapshot and a viewing user, this module computes the
//! subset of courses the user is permitted to see. The filter is pure
//! and read-only; the equivalent database-backed queries live in the
//! persistence crate.

use crate::types::{Course, Lab, Role, User, Username};
use serde::{Deserialize, Serialize};

/// The visibility query mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VisibilityScope {
    /// The default unrestricted listing: every course with every lab.
    #[default]
    All,
    /// The restricted listing: only courses the viewer is assigned to.
    AssignedOnly,
}

/// A snapshot of one course and its assignments, used for visibility
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The course.
    pub course: Course,
    /// Usernames of the instructors assigned to the course.
    pub instructors: Vec<Username>,
    /// The course's labs.
    pub labs: Vec<Lab>,
}

impl RosterEntry {
    /// Creates a new `RosterEntry`.
    ///
    /// # Arguments
    ///
    /// * `course` - The course
    /// * `instructors` - Usernames of the assigned instructors
    /// * `labs` - The course's labs
    #[must_use]
    pub const fn new(course: Course, instructors: Vec<Username>, labs: Vec<Lab>) -> Self {
        Self {
            course,
            instructors,
            labs,
        }
    }

    /// Returns whether the given user is an assigned instructor of this course.
    #[must_use]
    pub fn has_instructor(&self, username: &Username) -> bool {
        self.instructors.contains(username)
    }

    /// Returns whether any lab of this course is assigned to the given TA.
    ///
    /// A course with zero labs contributes nothing to any TA's view.
    #[must_use]
    pub fn has_ta(&self, username: &Username) -> bool {
        self.labs
            .iter()
            .any(|lab| lab.ta.as_ref() == Some(username))
    }
}

/// Computes the subset of courses the viewer is permitted to see.
///
/// - `All` scope, or an Admin viewer: every entry, in roster order.
/// - `AssignedOnly` + Instructor: entries whose instructor set contains
///   the viewer.
/// - `AssignedOnly` + TA: entries containing at least one lab assigned
///   to the viewer. Each course appears at most once even if the viewer
///   holds several labs within it.
///
/// The filter is read-only and never errors; a viewer with no
/// assignments simply sees an empty restricted list.
///
/// # Arguments
///
/// * `roster` - The roster snapshot to filter
/// * `viewer` - The requesting user
/// * `scope` - The visibility query mode
#[must_use]
pub fn visible_courses<'a>(
    roster: &'a [RosterEntry],
    viewer: &User,
    scope: VisibilityScope,
) -> Vec<&'a RosterEntry> {
    if scope == VisibilityScope::All {
        return roster.iter().collect();
    }

    match viewer.role {
        // Admins always see the unrestricted listing, even when the
        // assigned-only flag is supplied.
        Role::Admin => roster.iter().collect(),
        Role::Instructor => roster
            .iter()
            .filter(|entry| entry.has_instructor(&viewer.username))
            .collect(),
        Role::Ta => roster
            .iter()
            .filter(|entry| entry.has_ta(&viewer.username))
            .collect(),
    }
}
