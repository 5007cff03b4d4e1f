//! Schema bootstrap
//!
//! The DDL is embedded at compile time and every statement is
//! `IF NOT EXISTS`, so applying it to a populated database is a no-op.

#![allow(clippy::result_large_err)]

use crate::errors::{store_error, Result};
use rusqlite::Connection;

/// Embedded DDL for the four tables
pub const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Tables a quest run reads from or writes to
pub const TABLES: [&str; 4] = ["Realm", "treasure", "quest", "loot"];

/// Create any missing tables
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .map_err(|e| store_error("apply_schema", e))
}
