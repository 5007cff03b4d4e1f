//! Reference importer
//!
//! Writes realms and treasure kinds in a single transaction

#![allow(clippy::result_large_err)]

use crate::errors::{store_error, Result};
use crate::reference::format_v0::ReferenceV0;
use crate::reference::parser::parse_reference_file;
use crate::schema::apply_schema;
use rusqlite::Connection;
use std::path::Path;

/// Counts of reference rows written by one import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub realms: usize,
    pub treasures: usize,
}

/// Parse a reference file and import it
pub fn import_reference_file(path: &Path, conn: &mut Connection) -> Result<ImportSummary> {
    let reference = parse_reference_file(path)?;
    import_reference(&reference, conn)
}

/// Import parsed reference data
///
/// Creates missing tables first. Realms already present are left alone;
/// treasure kinds already present take the imported value.
pub fn import_reference(reference: &ReferenceV0, conn: &mut Connection) -> Result<ImportSummary> {
    apply_schema(conn)?;

    let tx = conn
        .transaction()
        .map_err(|e| store_error("import_reference", e))?;

    for realm in &reference.realms {
        tx.execute(
            "INSERT INTO Realm (realm) VALUES (?1) ON CONFLICT(realm) DO NOTHING",
            [realm],
        )
        .map_err(|e| store_error("import_realm", e))?;
    }

    for treasure in &reference.treasures {
        tx.execute(
            "INSERT INTO treasure (treasure, sql) VALUES (?1, ?2)
             ON CONFLICT(treasure) DO UPDATE SET sql = excluded.sql",
            rusqlite::params![treasure.name, treasure.value],
        )
        .map_err(|e| store_error("import_treasure", e))?;
    }

    tx.commit()
        .map_err(|e| store_error("import_reference", e))?;

    let summary = ImportSummary {
        realms: reference.realms.len(),
        treasures: reference.treasures.len(),
    };
    tracing::info!(
        realms = summary.realms,
        treasures = summary.treasures,
        "reference data imported"
    );
    Ok(summary)
}
