// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Course Roster Service.
//!
//! This crate provides database persistence for users, courses, labs,
//! and instructor assignments, including the database-backed course
//! visibility filters. It is built on Diesel with the `SQLite` backend.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against in-memory `SQLite`
//! - Each test receives its own database via an atomic counter, so
//!   tests are deterministic and fully isolated
//! - Foreign key enforcement is verified at startup; the schema's
//!   referential integrity is load-bearing (labs reference courses and
//!   TAs)

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use course_roster_domain::RosterEntry;
use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{CourseRecord, InstructorAssignmentRecord, LabRecord, UserRecord};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the roster tables.
///
/// Wraps a single `SQLite` connection and exposes the query and
/// mutation surface as methods.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        // Verify foreign key enforcement is active
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        // Verify foreign key enforcement is active
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure referential
    /// integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // User operations
    // ========================================================================

    /// Creates a new user and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists or the insert fails.
    pub fn create_user(
        &mut self,
        username: &str,
        role: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_user(&mut self.conn, username, role, first_name, last_name)
    }

    /// Retrieves a user row by username.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UserNotFound` if no such user exists.
    pub fn get_user_by_username(&mut self, username: &str) -> Result<UserRecord, PersistenceError> {
        queries::get_user_by_username(&mut self.conn, username)
    }

    /// Retrieves a user row by canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no such user exists.
    pub fn get_user_by_id(&mut self, user_id: i64) -> Result<UserRecord, PersistenceError> {
        queries::get_user_by_id(&mut self.conn, user_id)
    }

    /// Lists all users ordered by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_users(&mut self) -> Result<Vec<UserRecord>, PersistenceError> {
        queries::list_users(&mut self.conn)
    }

    // ========================================================================
    // Course operations
    // ========================================================================

    /// Creates a new course and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the course name already exists or the insert fails.
    pub fn create_course(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::create_course(&mut self.conn, name)
    }

    /// Retrieves a course row by canonical ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::CourseNotFound` if no such course exists.
    pub fn get_course(&mut self, course_id: i64) -> Result<CourseRecord, PersistenceError> {
        queries::get_course(&mut self.conn, course_id)
    }

    /// Lists all courses ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_courses(&mut self) -> Result<Vec<CourseRecord>, PersistenceError> {
        queries::list_courses(&mut self.conn)
    }

    /// Assigns an instructor to a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the assignment already exists, either row is
    /// missing, or the insert fails.
    pub fn add_instructor(&mut self, course_id: i64, user_id: i64) -> Result<i64, PersistenceError> {
        mutations::add_instructor(&mut self.conn, course_id, user_id)
    }

    /// Lists the courses the given instructor is assigned to.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn courses_for_instructor(
        &mut self,
        user_id: i64,
    ) -> Result<Vec<CourseRecord>, PersistenceError> {
        queries::courses_for_instructor(&mut self.conn, user_id)
    }

    /// Lists the courses containing at least one lab assigned to the
    /// given TA, de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn courses_with_lab_assigned_to(
        &mut self,
        user_id: i64,
    ) -> Result<Vec<CourseRecord>, PersistenceError> {
        queries::courses_with_lab_assigned_to(&mut self.conn, user_id)
    }

    /// Lists the courses that have no instructors assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn courses_without_instructors(&mut self) -> Result<Vec<CourseRecord>, PersistenceError> {
        queries::courses_without_instructors(&mut self.conn)
    }

    /// Lists the instructors assigned to a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn instructors_for_course(
        &mut self,
        course_id: i64,
    ) -> Result<Vec<UserRecord>, PersistenceError> {
        queries::instructors_for_course(&mut self.conn, course_id)
    }

    // ========================================================================
    // Lab operations
    // ========================================================================

    /// Creates a new lab within a course and returns its canonical ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the course or TA does not exist, the lab name
    /// is taken within the course, or the insert fails.
    pub fn create_lab(
        &mut self,
        course_id: i64,
        name: &str,
        ta_user_id: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::create_lab(&mut self.conn, course_id, name, ta_user_id)
    }

    /// Retrieves a lab row by canonical ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::LabNotFound` if no such lab exists.
    pub fn get_lab(&mut self, lab_id: i64) -> Result<LabRecord, PersistenceError> {
        queries::get_lab(&mut self.conn, lab_id)
    }

    /// Lists the labs of a course, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn labs_for_course(&mut self, course_id: i64) -> Result<Vec<LabRecord>, PersistenceError> {
        queries::labs_for_course(&mut self.conn, course_id)
    }

    /// Lists the labs that have no TA assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn labs_without_ta(&mut self) -> Result<Vec<LabRecord>, PersistenceError> {
        queries::labs_without_ta(&mut self.conn)
    }

    /// Lists the labs assigned to the given TA.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn labs_assigned_to(&mut self, user_id: i64) -> Result<Vec<LabRecord>, PersistenceError> {
        queries::labs_assigned_to(&mut self.conn, user_id)
    }

    // ========================================================================
    // Roster snapshot
    // ========================================================================

    /// Loads the full roster snapshot for the pure visibility filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn load_roster(&mut self) -> Result<Vec<RosterEntry>, PersistenceError> {
        queries::load_roster(&mut self.conn)
    }
}
