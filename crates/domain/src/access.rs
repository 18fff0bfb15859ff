// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The administrative permission check.
//!
//! This is a pure predicate: it never errors and has no side effects.
//! Absence of a user degrades to `false`, not to a failure.

use crate::types::{Role, User};

/// The exact role tag that carries administrative privileges.
///
/// Matching against this tag is strictly case-sensitive: `"admin"` and
/// `"ADMIN"` do not qualify.
pub const ADMIN_ROLE_TAG: &str = "Admin";

/// Checks whether the given user has administrative privileges.
///
/// Returns `true` only if a user is supplied and its role is
/// [`Role::Admin`]. Returns `false` for every other role and for `None`.
///
/// # Arguments
///
/// * `user` - The user to check, or `None` if no user is authenticated
#[must_use]
pub const fn check_admin(user: Option<&User>) -> bool {
    match user {
        Some(user) => matches!(user.role, Role::Admin),
        None => false,
    }
}

/// Checks whether a raw, unparsed role tag is the administrative tag.
///
/// This exists for boundary code that holds a role string straight from
/// storage or a request. The comparison is exact: near-miss casing such
/// as `"admin"` is `false`, and `None` is `false`.
///
/// # Arguments
///
/// * `tag` - The raw role tag, or `None` if no user is present
#[must_use]
pub fn is_admin_tag(tag: Option<&str>) -> bool {
    tag == Some(ADMIN_ROLE_TAG)
}
