// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates backend-specific initialization, migration,
//! and helper functions that cannot be expressed in Diesel DSL.
//!
//! `SQLite` is the only supported backend. Backend-specific code is
//! limited to:
//!
//! - Connection initialization
//! - Migration execution
//! - `SQLite`-specific configuration (PRAGMA statements)
//! - `SQLite`-specific workarounds for missing Diesel DSL features
//!
//! All domain queries and mutations live in the `queries/` and
//! `mutations/` modules and use Diesel DSL exclusively.

pub mod sqlite;
