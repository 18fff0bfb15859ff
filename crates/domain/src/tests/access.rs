// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_user;
use crate::{ADMIN_ROLE_TAG, Role, User, check_admin, is_admin_tag};

#[test]
fn test_check_admin_accepts_admin_user() {
    let admin: User = create_test_user("admin", Role::Admin);
    assert!(check_admin(Some(&admin)));
}

#[test]
fn test_check_admin_rejects_instructor() {
    let instructor: User = create_test_user("instructor", Role::Instructor);
    assert!(!check_admin(Some(&instructor)));
}

#[test]
fn test_check_admin_rejects_ta() {
    let ta: User = create_test_user("ta", Role::Ta);
    assert!(!check_admin(Some(&ta)));
}

#[test]
fn test_check_admin_rejects_no_user() {
    assert!(!check_admin(None));
}

#[test]
fn test_admin_tag_exact_match() {
    assert!(is_admin_tag(Some("Admin")));
    assert!(is_admin_tag(Some(ADMIN_ROLE_TAG)));
}

#[test]
fn test_admin_tag_rejects_near_miss_casing() {
    assert!(!is_admin_tag(Some("admin")));
    assert!(!is_admin_tag(Some("ADMIN")));
    assert!(!is_admin_tag(Some("Instructor")));
    assert!(!is_admin_tag(Some("TA")));
}

#[test]
fn test_admin_tag_rejects_absent_tag() {
    assert!(!is_admin_tag(None));
}
