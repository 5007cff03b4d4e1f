//! Reference Format v0 schema
//!
//! ```yaml
//! schema_version: 0
//! realms:
//!   - Arendale
//! treasures:
//!   - name: Crown
//!     value: 20
//! ```

use serde::{Deserialize, Serialize};

/// Top-level reference file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Realm names
    #[serde(default)]
    pub realms: Vec<String>,

    /// Treasure kinds with their values
    #[serde(default)]
    pub treasures: Vec<ReferenceTreasure>,
}

/// Treasure kind definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTreasure {
    pub name: String,
    pub value: i64,
}
